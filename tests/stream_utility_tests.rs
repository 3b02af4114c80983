use lazy_streams::producers::enumerate;
use lazy_streams::stream::{repeat, Stream};
use lazy_streams::{StreamError, ToStream};

fn stream() -> Stream<i32> {
    [1, 2, 3].to_stream()
}

#[test]
fn test_size() {
    assert_eq!(stream().size(), 3);
    assert_eq!(Stream::<i32>::empty().size(), 0);
}

#[test]
fn test_for_each() {
    let mut visited = Vec::new();
    stream().for_each(|x| visited.push(*x));
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn test_for_each_empty() {
    let mut visited = 0;
    Stream::<i32>::empty().for_each(|_| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn test_at() {
    let stream = stream();
    assert_eq!(stream.at(0), Ok(&1));
    assert_eq!(stream.at(2), Ok(&3));
}

#[test]
fn test_at_out_of_bounds() {
    assert_eq!(
        stream().at(3),
        Err(StreamError::IndexOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        Stream::<i32>::empty().at(0),
        Err(StreamError::IndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn test_at_infinite() {
    assert_eq!(enumerate(0u32).at(30), Ok(&30));
}

#[test]
fn test_skip() {
    let stream = stream();
    assert!(stream.skip(0).ptr_eq(&stream));
    assert_eq!(stream.skip(1).to_vec(), vec![2, 3]);
    assert!(stream.skip(3).is_empty());
    assert!(stream.skip(10).is_empty());
}

#[test]
fn test_skip_shares_nodes() {
    let stream = stream();
    assert!(stream.skip(2).ptr_eq(&stream.tail().tail()));
}

#[test]
fn test_skip_is_eager() {
    let stream = stream();
    let _rest = stream.skip(2);
    assert!(stream.is_realized());
    assert!(stream.tail().is_realized());
}

#[test]
fn test_skip_infinite() {
    assert_eq!(enumerate(0u64).skip(1_000).head(), Some(&1_000));
}

#[test]
fn test_last() {
    assert_eq!(stream().last(), Some(&3));
    assert_eq!(Stream::single(9).last(), Some(&9));
    assert_eq!(Stream::<i32>::empty().last(), None);
}

#[test]
fn test_try_last() {
    assert_eq!(stream().try_last(), Ok(&3));
    assert_eq!(
        Stream::<i32>::empty().try_last(),
        Err(StreamError::EmptyStream { operation: "last" })
    );
}

#[test]
fn test_to_vec() {
    assert_eq!(stream().to_vec(), vec![1, 2, 3]);
    assert_eq!(Stream::<i32>::empty().to_vec(), Vec::<i32>::new());
}

#[test]
fn test_join() {
    assert_eq!(Stream::<i32>::empty().join(""), "");
    assert_eq!(Stream::single(1).join(", "), "1");
    assert_eq!(stream().join(""), "123");
    assert_eq!(stream().join(", "), "1, 2, 3");
}

#[test]
fn test_display() {
    assert_eq!(Stream::<i32>::empty().to_string(), "[]");
    assert_eq!(stream().to_string(), "[1, 2, 3]");
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", stream()), "[1, 2, 3]");
    assert_eq!(format!("{:?}", ["a"].to_stream()), "[\"a\"]");
}

#[test]
fn test_display_and_debug_differ_for_strings() {
    let words = ["a", "b"].to_stream();
    assert_eq!(words.to_string(), "[a, b]");
    assert_eq!(format!("{:?}", words), "[\"a\", \"b\"]");
}

#[test]
fn test_contains() {
    assert!(stream().contains(&1));
    assert!(!stream().contains(&4));
    assert!(!Stream::<i32>::empty().contains(&1));
    assert!(enumerate(0i32).contains(&500));
}

#[test]
fn test_any() {
    assert!(!Stream::<i32>::empty().any(|_| true));
    assert!(stream().any(|n| *n == 2));
    assert!(!stream().any(|n| *n < -500));
    assert!(enumerate(0i32).any(|n| *n > 10));
}

#[test]
fn test_all() {
    assert!(Stream::<i32>::empty().all(|_| false));
    assert!(stream().all(|n| *n > 0));
    assert!(!stream().all(|n| *n != 2));
    assert!(!enumerate(0i32).all(|n| *n < 10));
}

#[test]
fn test_equality() {
    assert_eq!(stream(), stream());
    assert_eq!(Stream::<i32>::empty(), Stream::empty());
    assert_ne!(stream(), [1, 2].to_stream());
    assert_ne!(stream(), [1, 2, 4].to_stream());
    assert_ne!(stream(), Stream::empty());
}

#[test]
fn test_equality_same_node_shortcut() {
    let ones = repeat(1);
    assert_eq!(ones, ones.clone());
}

#[test]
fn test_iter_forces_lazily() {
    // the tail after 4 would search forever
    let small = enumerate(1i64).select(|n| *n < 5);
    let firsts: Vec<i64> = small.iter().take(4).copied().collect();
    assert_eq!(firsts, vec![1, 2, 3, 4]);
}

#[test]
fn test_iter_borrowing_loop() {
    let mut total = 0;
    for n in &stream() {
        total += n;
    }
    assert_eq!(total, 6);
}

#[test]
fn test_into_iter() {
    let owned: Vec<String> = ["a", "b"].to_stream().map(|s| s.to_uppercase()).into_iter().collect();
    assert_eq!(owned, vec!["A", "B"]);
}
