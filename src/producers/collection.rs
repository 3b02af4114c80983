//! Collection to stream conversion

use crate::stream::{from_iter, Stream};

/// Extension trait turning a finite collection into a stream of its elements
pub trait ToStream {
    type Item;

    /// A stream mirroring the collection in order. Elements are cloned out
    /// up front; nodes are built as the stream is forced.
    fn to_stream(&self) -> Stream<Self::Item>;
}

impl<T: Clone + 'static> ToStream for [T] {
    type Item = T;

    fn to_stream(&self) -> Stream<T> {
        from_iter(self.to_vec())
    }
}
