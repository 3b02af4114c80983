//! Core stream type: a persistent cons cell whose tail is computed on demand
//! and memoized after the first request.

use once_cell::unsync::Lazy;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};

/// Deferred tail computation. A node invokes its thunk at most once.
pub type Thunk<T> = Box<dyn FnOnce() -> Stream<T>>;

pub(crate) struct Node<T> {
    pub(crate) head: T,
    tail: Lazy<Stream<T>, Thunk<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(head: T, thunk: Thunk<T>) -> Self {
        Self { head, tail: Lazy::new(thunk) }
    }

    /// Forces the deferred tail, caching the result in the node.
    pub(crate) fn force_tail(&self) -> &Stream<T> {
        if Lazy::get(&self.tail).is_none() {
            log::trace!("forcing deferred tail");
        }
        Lazy::force(&self.tail)
    }

    pub(crate) fn is_realized(&self) -> bool {
        Lazy::get(&self.tail).is_some()
    }
}

/// A lazy, memoizing, persistent singly linked sequence.
///
/// A stream is either empty or a head value followed by a deferred tail.
/// The tail is computed the first time it is requested and shared by every
/// clone of the stream afterwards. Cloning is cheap: clones share nodes.
///
/// Streams may be infinite. Operations that walk the whole stream
/// (`size`, `to_vec`, `last`, `for_each`, equality, `Debug` and `Display`
/// formatting...) never return on an infinite stream; bound the stream with
/// [`Stream::take`] or [`Stream::take_while`] first. That includes a failing
/// `assert_eq!` that prints an infinite stream.
pub struct Stream<T> {
    pub(crate) node: Option<Rc<Node<T>>>,
}

impl<T> Stream<T> {
    /// The empty stream
    pub fn empty() -> Self {
        Self { node: None }
    }

    /// Returns the head, or `None` for the empty stream
    pub fn head(&self) -> Option<&T> {
        self.node.as_deref().map(|node| &node.head)
    }

    /// Returns the head, failing on the empty stream
    pub fn try_head(&self) -> StreamResult<&T> {
        self.head().ok_or(StreamError::EmptyStream { operation: "head" })
    }

    /// Returns the tail, forcing and caching it on first use.
    ///
    /// The tail of the empty stream is a fresh empty stream.
    pub fn tail(&self) -> Stream<T> {
        self.forced_tail().cloned().unwrap_or_default()
    }

    /// Borrowing form of [`Stream::tail`]. `None` for the empty stream.
    pub(crate) fn forced_tail(&self) -> Option<&Stream<T>> {
        self.node.as_deref().map(Node::force_tail)
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Whether the tail has already been computed. The empty stream has
    /// nothing deferred and always counts as realized.
    pub fn is_realized(&self) -> bool {
        self.node.as_deref().map_or(true, Node::is_realized)
    }

    /// True if both handles point at the very same node
    pub fn ptr_eq(&self, other: &Stream<T>) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: 'static> Stream<T> {
    /// A one-element stream: `head`, then the empty stream
    pub fn single(head: T) -> Self {
        Self::cons(head, Stream::empty)
    }

    /// A stream with `head` whose tail is produced by `tail` when first needed
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        Self::from_thunk(head, Box::new(tail))
    }

    pub fn from_thunk(head: T, thunk: Thunk<T>) -> Self {
        Self { node: Some(Rc::new(Node::new(head, thunk))) }
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self { node: self.node.clone() }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned, already forced tails one node at a time so
        // that dropping a long realized stream does not recurse.
        let mut next = self.node.take();
        while let Some(rc) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(mut node) => Lazy::get_mut(&mut node.tail).and_then(|tail| tail.node.take()),
                Err(_) => None,
            };
        }
    }
}
