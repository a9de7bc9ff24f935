use corral_forest::{Pos, RbTree};

fn keys<K: Clone + Ord, V>(tree: &RbTree<K, V>) -> Vec<K> {
    tree.iter().map(|(k, _)| k.clone()).collect()
}

#[test]
fn rb_tree_smoke_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    assert!(tree.is_empty());
    assert!(tree.first_pos().is_end());

    tree.insert(5, 50);
    tree.insert(1, 10);
    tree.insert(9, 90);
    tree.insert(3, 30);
    tree.insert(7, 70);

    assert_eq!(tree.len(), 5);
    assert_eq!(keys(&tree), vec![1, 3, 5, 7, 9]);
    assert_eq!(tree.get(&7), Some(&70));
    assert_eq!(tree.get(&8), None);
    tree.check().unwrap();
}

#[test]
fn rb_tree_ascending_ladder_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in 0..200 {
        let (_, fresh) = tree.insert(i, ());
        assert!(fresh);
        tree.check().unwrap();
        assert_eq!(tree.key_at(tree.first_pos()), Some(&0));
        assert_eq!(tree.key_at(tree.last_pos()), Some(&i));
    }
    for i in 0..200 {
        assert!(tree.erase(tree.find(&i)));
        tree.check().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_tree_descending_ladder_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in (0..200).rev() {
        tree.insert(i, ());
        tree.check().unwrap();
        assert_eq!(tree.key_at(tree.first_pos()), Some(&i));
    }
    for i in (0..200).rev() {
        assert!(tree.erase(tree.find(&i)));
        tree.check().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_tree_duplicate_insert_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    let (first, fresh) = tree.insert(42, 1);
    assert!(fresh);
    let (again, fresh) = tree.insert(42, 2);
    assert!(!fresh);
    assert_eq!(first, again);
    assert_eq!(tree.len(), 1);
    // The losing insert never touches the stored value.
    assert_eq!(tree.get(&42), Some(&1));
    tree.check().unwrap();
}

#[test]
fn rb_tree_insert_multi_matrix() {
    let mut tree = RbTree::<i32, u8>::new();
    for (tag, key) in [(0u8, 5), (1, 3), (2, 5), (3, 5), (4, 8)] {
        tree.insert_multi(key, tag);
        tree.check().unwrap();
    }
    assert_eq!(tree.len(), 5);
    assert_eq!(keys(&tree), vec![3, 5, 5, 5, 8]);

    // Duplicates descend right: in-order order of equal keys is the
    // insertion order.
    let dup_tags: Vec<u8> = tree
        .iter()
        .filter(|(k, _)| **k == 5)
        .map(|(_, v)| *v)
        .collect();
    assert_eq!(dup_tags, vec![0, 2, 3]);
}

#[test]
fn rb_tree_erase_positions_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in 0..10 {
        tree.insert(i, ());
    }
    assert!(!tree.erase(Pos::end()));

    let pos = tree.find(&4);
    assert!(tree.erase(pos));
    assert!(!tree.contains(&4));
    tree.check().unwrap();

    // The slot has not been reused yet, so the stale position is
    // rejected.
    assert!(!tree.erase(pos));
    assert_eq!(tree.len(), 9);
}

#[test]
fn rb_tree_bounds_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in [10, 20, 30, 40] {
        tree.insert(i, ());
    }
    assert_eq!(tree.key_at(tree.lower_bound(&20)), Some(&20));
    assert_eq!(tree.key_at(tree.upper_bound(&20)), Some(&30));
    assert_eq!(tree.key_at(tree.lower_bound(&25)), Some(&30));
    assert_eq!(tree.key_at(tree.upper_bound(&25)), Some(&30));
    assert_eq!(tree.key_at(tree.lower_bound(&5)), Some(&10));
    assert!(tree.lower_bound(&41).is_end());
    assert!(tree.upper_bound(&40).is_end());
}

#[test]
fn rb_tree_position_stepping_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in [2, 4, 6] {
        tree.insert(i, ());
    }

    let mut pos = tree.first_pos();
    let mut seen = Vec::new();
    while !pos.is_end() {
        seen.push(*tree.key_at(pos).unwrap());
        pos = tree.next_pos(pos);
    }
    assert_eq!(seen, vec![2, 4, 6]);

    // Stepping backward from end lands on the last element.
    let last = tree.prev_pos(Pos::end());
    assert_eq!(tree.key_at(last), Some(&6));
    // Stepping backward past the first element yields end.
    assert!(tree.prev_pos(tree.first_pos()).is_end());
    // Stepping forward from end stays at end.
    assert!(tree.next_pos(Pos::end()).is_end());
}

#[test]
fn rb_tree_merge_matrix() {
    let mut a = RbTree::<i32, ()>::new();
    let mut b = RbTree::<i32, ()>::new();
    for i in [1, 3, 5] {
        a.insert(i, ());
    }
    for i in [2, 3, 4] {
        b.insert(i, ());
    }
    a.merge(&mut b);
    assert_eq!(keys(&a), vec![1, 2, 3, 4, 5]);
    assert!(b.is_empty());
    a.check().unwrap();
    b.check().unwrap();
}

#[test]
fn rb_tree_merge_multi_matrix() {
    let mut a = RbTree::<i32, ()>::new();
    let mut b = RbTree::<i32, ()>::new();
    for i in [1, 3, 5] {
        a.insert_multi(i, ());
    }
    for i in [2, 3, 4] {
        b.insert_multi(i, ());
    }
    a.merge_multi(&mut b);
    assert_eq!(keys(&a), vec![1, 2, 3, 3, 4, 5]);
    assert!(b.is_empty());
    a.check().unwrap();
}

#[test]
fn rb_tree_pop_first_drains_sorted_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    for i in [8, 2, 6, 4, 0] {
        tree.insert(i, i * 10);
    }
    let mut drained = Vec::new();
    while let Some(kv) = tree.pop_first() {
        drained.push(kv);
        tree.check().unwrap();
    }
    assert_eq!(drained, vec![(0, 0), (2, 20), (4, 40), (6, 60), (8, 80)]);
}

#[test]
fn rb_tree_double_ended_iterator_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in 0..6 {
        tree.insert(i, ());
    }
    let mut it = tree.iter();
    assert_eq!(it.len(), 6);
    assert_eq!(it.next().map(|(k, _)| *k), Some(0));
    assert_eq!(it.next_back().map(|(k, _)| *k), Some(5));
    assert_eq!(it.next_back().map(|(k, _)| *k), Some(4));
    assert_eq!(it.next().map(|(k, _)| *k), Some(1));
    assert_eq!(it.next().map(|(k, _)| *k), Some(2));
    assert_eq!(it.next_back().map(|(k, _)| *k), Some(3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn rb_tree_into_iter_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    for i in [3, 1, 2] {
        tree.insert(i, -i);
    }
    let pairs: Vec<(i32, i32)> = tree.into_iter().collect();
    assert_eq!(pairs, vec![(1, -1), (2, -2), (3, -3)]);
}

#[test]
fn rb_tree_clone_is_independent_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in 0..20 {
        tree.insert(i, ());
    }
    let mut copy = tree.clone();
    copy.erase(copy.find(&7));
    assert!(tree.contains(&7));
    assert!(!copy.contains(&7));
    tree.check().unwrap();
    copy.check().unwrap();
}

#[test]
fn rb_tree_clear_and_reuse_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for i in 0..50 {
        tree.insert(i, ());
    }
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.first_pos().is_end());
    tree.check().unwrap();

    for i in 0..50 {
        tree.insert(i, ());
    }
    assert_eq!(tree.len(), 50);
    tree.check().unwrap();
}

#[test]
fn rb_tree_swap_matrix() {
    let mut a = RbTree::<i32, ()>::new();
    let mut b = RbTree::<i32, ()>::new();
    a.insert(1, ());
    b.insert(2, ());
    b.insert(3, ());
    a.swap(&mut b);
    assert_eq!(keys(&a), vec![2, 3]);
    assert_eq!(keys(&b), vec![1]);
}

#[test]
fn rb_tree_slot_reuse_keeps_validity_matrix() {
    let mut tree = RbTree::<i32, ()>::new();
    for round in 0..5 {
        for i in 0..40 {
            tree.insert(round * 1000 + i, ());
        }
        for i in (0..40).step_by(2) {
            tree.erase(tree.find(&(round * 1000 + i)));
        }
        tree.check().unwrap();
    }
    assert_eq!(tree.len(), 5 * 20);
}
