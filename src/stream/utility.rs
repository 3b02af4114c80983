//! Terminal stream operations: size, for_each, at, skip, last, to_vec, join,
//! contains, all, any, iteration, equality and formatting
//!
//! These walk the stream eagerly with explicit loops rather than recursion,
//! so long finite streams do not grow the call stack. They do not return on
//! infinite streams unless they can stop early (`at`, `skip`, `contains`,
//! `all`, `any`).

use std::fmt;

use super::core::{Node, Stream};
use crate::error::{StreamError, StreamResult};

impl<T> Stream<T> {
    /// Borrowing iterator over the elements.
    ///
    /// Each tail is forced only when the iterator is advanced past the
    /// element before it.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { start: Some(self), yielded: None }
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Calls `visit` on every element in order
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for element in self.iter() {
            visit(element);
        }
    }

    /// Zero-based element lookup
    pub fn at(&self, index: usize) -> StreamResult<&T> {
        let mut len = 0;
        for element in self.iter() {
            if len == index {
                return Ok(element);
            }
            len += 1;
        }
        log::debug!("index {} out of bounds for stream of {} element(s)", index, len);
        Err(StreamError::IndexOutOfBounds { index, len })
    }

    /// The stream without its first `n` elements.
    ///
    /// Unlike [`Stream::take`] this is eager: up to `n` tails are forced
    /// before it returns. The result shares nodes with `self`.
    pub fn skip(&self, n: usize) -> Stream<T> {
        let mut current = self.clone();
        for _ in 0..n {
            let next = match current.forced_tail() {
                Some(tail) => tail.clone(),
                None => break,
            };
            current = next;
        }
        current
    }

    /// The last element, or `None` for the empty stream
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn try_last(&self) -> StreamResult<&T> {
        self.last().ok_or(StreamError::EmptyStream { operation: "last" })
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Concatenates the elements' text, `separator` between neighbours
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut joined = String::new();
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&element.to_string());
        }
        joined
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == element)
    }

    /// True if every element satisfies `predicate`. Stops at the first miss.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|element| predicate(element))
    }

    /// True if some element satisfies `predicate`. Stops at the first hit.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|element| predicate(element))
    }
}

/// Borrowing iterator returned by [`Stream::iter`]
pub struct Iter<'a, T> {
    start: Option<&'a Stream<T>>,
    yielded: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let stream = match self.yielded.take() {
            Some(node) => node.force_tail(),
            None => self.start.take()?,
        };
        let node = stream.node.as_deref()?;
        self.yielded = Some(node);
        Some(&node.head)
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over cloned elements
pub struct IntoIter<T> {
    current: Stream<T>,
    advance: bool,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if std::mem::take(&mut self.advance) {
            self.current = self.current.tail();
        }
        let head = self.current.head()?.clone();
        self.advance = true;
        Some(head)
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { current: self, advance: false }
    }
}

/// Structural equality: heads first, then tails.
///
/// Two handles to the same node compare equal without further forcing;
/// otherwise comparing infinite streams does not terminate.
impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self;
        let mut right = other;
        loop {
            match (left.node.as_deref(), right.node.as_deref()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if std::ptr::eq(a, b) {
                        return true;
                    }
                    if a.head != b.head {
                        return false;
                    }
                    left = a.force_tail();
                    right = b.force_tail();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for Stream<T> {}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats as `[1, 2, 3]`
impl<T: fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}
