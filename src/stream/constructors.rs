//! Stream constructors: empty, once, from_iter, repeat, cyclic
use std::rc::{Rc, Weak};

use super::core::{Node, Stream};

// ================================
// Basic Constructors
// ================================

/// The empty stream
pub fn empty<T>() -> Stream<T> {
    Stream::empty()
}

/// A stream with a single element
pub fn once<T: 'static>(value: T) -> Stream<T> {
    Stream::single(value)
}

/// A stream that pulls from `iter` one element at a time.
///
/// The first element is taken immediately; every later element is pulled
/// when the tail before it is forced.
pub fn from_iter<T, I>(iter: I) -> Stream<T>
where
    T: 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
{
    let mut iter = iter.into_iter();
    match iter.next() {
        None => Stream::empty(),
        Some(head) => Stream::cons(head, move || from_iter(iter)),
    }
}

// ================================
// Infinite Constructors
// ================================

/// An endless stream of `value`
pub fn repeat<T: Clone + 'static>(value: T) -> Stream<T> {
    let next = value.clone();
    Stream::cons(value, move || repeat(next))
}

/// Builds a stream whose tail may refer back to the stream itself.
///
/// `tail` receives a handle to the stream being built the first time the
/// tail is forced:
///
/// ```
/// use lazy_streams::stream::cyclic;
///
/// let fibs = cyclic(0u64, |fibs| {
///     lazy_streams::Stream::cons(1, move || fibs.merge(&fibs.tail()))
/// });
/// assert_eq!(fibs.take(8).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
///
/// The handle keeps the stream alive, so a stream built this way is never
/// freed once its tail has been forced.
pub fn cyclic<T, F>(head: T, tail: F) -> Stream<T>
where
    T: 'static,
    F: FnOnce(Stream<T>) -> Stream<T> + 'static,
{
    let node = Rc::new_cyclic(|this: &Weak<Node<T>>| {
        let this = this.clone();
        Node::new(head, Box::new(move || tail(Stream { node: this.upgrade() })))
    });
    Stream { node: Some(node) }
}

// ================================
// Conversions
// ================================

impl<T: 'static> From<Vec<T>> for Stream<T> {
    fn from(values: Vec<T>) -> Self {
        from_iter(values)
    }
}

impl<T: 'static> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_iter(iter.into_iter().collect::<Vec<_>>())
    }
}
