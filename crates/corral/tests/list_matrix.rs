use corral::List;

fn collect<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn list_smoke_matrix() {
    let mut list = List::new();
    assert!(list.is_empty());
    assert!(list.first_pos().is_end());

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);

    assert_eq!(list.len(), 3);
    assert_eq!(collect(&list), vec![1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
}

#[test]
fn list_reverse_matrix() {
    let mut list = List::from([1, 2, 3]);
    list.reverse();
    assert_eq!(collect(&list), vec![3, 2, 1]);
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.back(), Some(&1));

    let mut empty = List::<i32>::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut one = List::from([7]);
    one.reverse();
    assert_eq!(collect(&one), vec![7]);
}

#[test]
fn list_insert_and_erase_positions_matrix() {
    let mut list = List::from([1, 3]);
    let pos3 = list.next_pos(list.first_pos());
    let pos2 = list.insert(pos3, 2);
    assert_eq!(collect(&list), vec![1, 2, 3]);

    assert_eq!(list.erase(pos2), Some(2));
    assert_eq!(collect(&list), vec![1, 3]);

    // Erasing the end position is a checked no-op.
    assert_eq!(list.erase(list.end_pos()), None);
    // A stale position is rejected while its slot stays vacant.
    assert_eq!(list.erase(pos2), None);
    assert_eq!(list.len(), 2);
}

#[test]
fn list_pop_matrix() {
    let mut list = List::from([1, 2, 3]);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn list_merge_is_stable_matrix() {
    let mut a: List<(i32, char)> = List::new();
    let mut b: List<(i32, char)> = List::new();
    // The tag records which list an element came from.
    for item in [(1, 'a'), (3, 'a'), (3, 'b'), (5, 'a')] {
        a.push_back(item);
    }
    for item in [(2, 'x'), (3, 'x'), (6, 'x')] {
        b.push_back(item);
    }
    a.merge(&mut b);
    assert_eq!(
        collect(&a),
        vec![
            (1, 'a'),
            (2, 'x'),
            (3, 'a'),
            (3, 'b'),
            (3, 'x'),
            (5, 'a'),
            (6, 'x')
        ]
    );
    assert!(b.is_empty());
}

#[test]
fn list_sort_matrix() {
    let mut list = List::from([5, 1, 4, 1, 3, 9, 2, 6]);
    list.sort();
    assert_eq!(collect(&list), vec![1, 1, 2, 3, 4, 5, 6, 9]);

    let mut empty = List::<i32>::new();
    empty.sort();
    assert!(empty.is_empty());

    let mut sorted = List::from([1, 2, 3]);
    sorted.sort();
    assert_eq!(collect(&sorted), vec![1, 2, 3]);
}

#[test]
fn list_sort_is_stable_matrix() {
    let mut list: List<(i32, usize)> = List::new();
    for (i, key) in [3, 1, 3, 2, 1, 3].into_iter().enumerate() {
        list.push_back((key, i));
    }
    list.sort();
    assert_eq!(
        collect(&list),
        vec![(1, 1), (1, 4), (2, 3), (3, 0), (3, 2), (3, 5)]
    );
}

#[test]
fn list_unique_matrix() {
    let mut list = List::from([1, 1, 2, 2, 2, 3, 1]);
    list.unique();
    // Only consecutive runs collapse.
    assert_eq!(collect(&list), vec![1, 2, 3, 1]);
}

#[test]
fn list_splice_matrix() {
    let mut a = List::from([1, 4]);
    let mut b = List::from([2, 3]);
    let pos4 = list_pos_of(&a, &4);
    a.splice(pos4, &mut b);
    assert_eq!(collect(&a), vec![1, 2, 3, 4]);
    assert!(b.is_empty());
}

fn list_pos_of<'a, T: PartialEq>(list: &'a List<T>, needle: &T) -> corral::list::Pos {
    let mut pos = list.first_pos();
    while !pos.is_end() {
        if list.value(pos) == Some(needle) {
            return pos;
        }
        pos = list.next_pos(pos);
    }
    pos
}

#[test]
fn list_insert_many_matrix() {
    let mut list = List::from([1, 5]);
    let pos5 = list_pos_of(&list, &5);
    list.insert_many(pos5, [2, 3, 4]);
    assert_eq!(collect(&list), vec![1, 2, 3, 4, 5]);

    list.insert_many_back([6, 7]);
    list.insert_many_front([-1, 0]);
    assert_eq!(collect(&list), vec![-1, 0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn list_double_ended_iteration_matrix() {
    let list = List::from([1, 2, 3, 4]);
    assert_eq!(list.iter().count(), list.len());
    let mut it = list.iter();
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next_back(), Some(&4));
    assert_eq!(it.next_back(), Some(&3));
    assert_eq!(it.next(), Some(&2));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn list_round_trip_and_slot_reuse_matrix() {
    let mut list = List::new();
    for round in 0..3 {
        for i in 0..40 {
            list.push_back(round * 100 + i);
        }
        for _ in 0..40 {
            list.pop_front();
        }
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}

#[test]
fn list_with_len_and_clone_matrix() {
    let zeros = List::<i32>::with_len(3);
    assert_eq!(collect(&zeros), vec![0, 0, 0]);

    let a = List::from([1, 2]);
    let mut b = a.clone();
    b.push_back(3);
    assert_eq!(collect(&a), vec![1, 2]);
    assert_eq!(collect(&b), vec![1, 2, 3]);
}

#[test]
fn list_into_iter_matrix() {
    let list = List::from([1, 2, 3]);
    let drained: Vec<i32> = list.into_iter().collect();
    assert_eq!(drained, vec![1, 2, 3]);
}
