use corral::{Array, Error, Queue, Stack};

#[test]
fn array_access_matrix() {
    let mut arr = Array::from([10, 20, 30]);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.max_size(), 3);
    assert!(!arr.is_empty());

    assert_eq!(arr.at(0), Ok(&10));
    assert_eq!(arr.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    assert_eq!(arr[2], 30);
    *arr.at_mut(1).unwrap() = 21;
    assert_eq!(arr.data(), &[10, 21, 30]);

    assert_eq!(arr.front(), Some(&10));
    assert_eq!(arr.back(), Some(&30));
    assert_eq!(arr.iter().count(), arr.len());
}

#[test]
fn array_default_fill_swap_matrix() {
    let mut a = Array::<i32, 3>::new();
    assert_eq!(a.data(), &[0, 0, 0]);
    a.fill(7);
    assert_eq!(a.data(), &[7, 7, 7]);

    let mut b = Array::from([1, 2, 3]);
    a.swap(&mut b);
    assert_eq!(a.data(), &[1, 2, 3]);
    assert_eq!(b.data(), &[7, 7, 7]);
}

#[test]
fn array_zero_len_matrix() {
    let arr = Array::<i32, 0>::new();
    assert!(arr.is_empty());
    assert_eq!(arr.front(), None);
    assert_eq!(arr.back(), None);
    assert!(arr.at(0).is_err());
}

#[test]
fn stack_lifo_matrix() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);

    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
}

#[test]
fn stack_from_array_matrix() {
    // The last array element ends on top.
    let mut stack = Stack::from([1, 2, 3]);
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.top(), Some(&2));
}

#[test]
fn stack_insert_many_matrix() {
    let mut stack = Stack::from([1]);
    stack.insert_many_front([2, 3]);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
}

#[test]
fn stack_swap_matrix() {
    let mut a = Stack::from([1]);
    let mut b = Stack::from([2, 3]);
    a.swap(&mut b);
    assert_eq!(a.len(), 2);
    assert_eq!(b.top(), Some(&1));
}

#[test]
fn queue_fifo_matrix() {
    let mut queue = Queue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);

    queue.push(1);
    queue.push(2);
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&2));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.front(), Some(&2));
    assert_eq!(queue.pop(), Some(2));
    assert!(queue.is_empty());
}

#[test]
fn queue_from_array_and_insert_many_matrix() {
    let mut queue = Queue::from([1, 2]);
    queue.insert_many_back([3, 4]);
    let mut drained = Vec::new();
    while let Some(v) = queue.pop() {
        drained.push(v);
    }
    assert_eq!(drained, vec![1, 2, 3, 4]);
}

#[test]
fn queue_round_trip_matrix() {
    let mut queue = Queue::new();
    for i in 0..30 {
        queue.push(i);
    }
    for i in 0..30 {
        assert_eq!(queue.pop(), Some(i));
    }
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}
