//! Lazy stream combinators: map, select, reject, merge, append, take,
//! take_while, uniq
//!
//! Each combinator computes at most the head of its result up front and
//! defers everything else into the result's tail thunk. Callbacks are shared
//! between the levels of the result through an `Rc`, so they must be `Fn`.
//! They may run more than once for the same element when a stream is
//! re-derived, so keep them free of side effects.

use std::ops::Add;
use std::rc::Rc;

use super::core::Stream;

impl<T: 'static> Stream<T> {
    /// Applies `f` to every element, lazily
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.map_shared(Rc::new(f))
    }

    fn map_shared<U, F>(&self, f: Rc<F>) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        match self.head() {
            None => Stream::empty(),
            Some(head) => {
                let mapped = f(head);
                let source = self.clone();
                Stream::cons(mapped, move || source.tail().map_shared(f))
            }
        }
    }

    /// Keeps the elements matching `predicate`.
    ///
    /// The head of the result has to be known, so leading elements that fail
    /// the predicate are skipped right away. On an infinite stream with no
    /// further match this search never ends.
    pub fn select<P>(&self, predicate: P) -> Stream<T>
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        self.select_shared(Rc::new(predicate))
    }

    fn select_shared<P>(&self, predicate: Rc<P>) -> Stream<T>
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        let mut current = self.clone();
        loop {
            let next = match current.head() {
                None => return Stream::empty(),
                Some(head) if predicate(head) => {
                    let head = head.clone();
                    let source = current.clone();
                    return Stream::cons(head, move || source.tail().select_shared(predicate));
                }
                Some(_) => current.tail(),
            };
            current = next;
        }
    }

    /// Drops the elements matching `predicate`
    pub fn reject<P>(&self, predicate: P) -> Stream<T>
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        self.select(move |element| !predicate(element))
    }

    /// Pairwise sum of two streams. Once either side runs out the rest of the
    /// other side is returned unchanged.
    pub fn merge(&self, other: &Stream<T>) -> Stream<T>
    where
        T: Add<Output = T> + Clone,
    {
        self.merge_with(other, |a: &T, b: &T| a.clone() + b.clone())
    }

    /// Pairwise combination of two streams with an explicit combinator
    pub fn merge_with<F>(&self, other: &Stream<T>, combine: F) -> Stream<T>
    where
        F: Fn(&T, &T) -> T + 'static,
    {
        self.merge_shared(other, Rc::new(combine))
    }

    fn merge_shared<F>(&self, other: &Stream<T>, combine: Rc<F>) -> Stream<T>
    where
        F: Fn(&T, &T) -> T + 'static,
    {
        match (self.head(), other.head()) {
            (_, None) => self.clone(),
            (None, _) => other.clone(),
            (Some(a), Some(b)) => {
                let combined = combine(a, b);
                let left = self.clone();
                let right = other.clone();
                Stream::cons(combined, move || left.tail().merge_shared(&right.tail(), combine))
            }
        }
    }

    /// `self` followed by `other`. `self` is walked lazily.
    pub fn append(&self, other: &Stream<T>) -> Stream<T>
    where
        T: Clone,
    {
        if other.is_empty() {
            return self.clone();
        }
        match self.head() {
            None => other.clone(),
            Some(head) => {
                let front = self.clone();
                let back = other.clone();
                Stream::cons(head.clone(), move || front.tail().append(&back))
            }
        }
    }

    /// The first `n` elements, lazily
    pub fn take(&self, n: usize) -> Stream<T>
    where
        T: Clone,
    {
        match self.head() {
            None => Stream::empty(),
            Some(_) if n == 0 => Stream::empty(),
            Some(head) if n == 1 => Stream::single(head.clone()),
            Some(head) => {
                let source = self.clone();
                Stream::cons(head.clone(), move || source.tail().take(n - 1))
            }
        }
    }

    /// The longest prefix whose elements all satisfy `predicate`
    pub fn take_while<P>(&self, predicate: P) -> Stream<T>
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        self.take_while_shared(Rc::new(predicate))
    }

    fn take_while_shared<P>(&self, predicate: Rc<P>) -> Stream<T>
    where
        T: Clone,
        P: Fn(&T) -> bool + 'static,
    {
        match self.head() {
            Some(head) if predicate(head) => {
                let source = self.clone();
                Stream::cons(head.clone(), move || source.tail().take_while_shared(predicate))
            }
            _ => Stream::empty(),
        }
    }

    /// Removes repeated elements, keeping first occurrences in order
    pub fn uniq(&self) -> Stream<T>
    where
        T: Clone + PartialEq,
    {
        match self.head() {
            None => self.clone(),
            Some(head) => {
                let seen = head.clone();
                let source = self.clone();
                Stream::cons(head.clone(), move || {
                    source.tail().reject(move |element| *element == seen).uniq()
                })
            }
        }
    }
}
