//! Prime numbers by sieving an integer enumeration

use num::Integer;

use super::integer::enumerate;
use crate::stream::Stream;

impl<N: Integer + Clone + 'static> Stream<N> {
    /// Keeps the head, then sieves the rest with every multiple of the head
    /// removed.
    ///
    /// Applied to `2, 3, 4, ...` this yields the primes. Each element deeper
    /// in the result adds one filter layer, so forcing element `k` costs
    /// `O(k)` stack depth.
    pub fn sieve(&self) -> Stream<N> {
        match self.head() {
            None => Stream::empty(),
            Some(head) => {
                let prime = head.clone();
                let source = self.clone();
                Stream::cons(head.clone(), move || {
                    source.tail().reject(move |n| n.is_multiple_of(&prime)).sieve()
                })
            }
        }
    }
}

/// The infinite stream of primes
pub fn primes() -> Stream<u64> {
    enumerate(2u64).sieve()
}
