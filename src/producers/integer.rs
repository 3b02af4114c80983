//! Integer enumerations
//!
//! Thin wrappers over [`EnumerationConfig`] for the common shapes. Counting
//! by a step stops at the edge of the integer type instead of overflowing,
//! so even the "infinite" enumerations end at `N::MAX` (or `N::MIN`).

use crate::stream::Stream;
use crate::stream_configuration::{Countable, EnumerationConfig};

/// `start, start + 1, start + 2, ...`
pub fn enumerate<N: Countable>(start: N) -> Stream<N> {
    EnumerationConfig::new(start).build()
}

/// `start, start + step, start + 2 * step, ...`
pub fn enumerate_by<N: Countable>(start: N, step: N) -> Stream<N> {
    EnumerationConfig::new(start).step(step).build()
}

/// `start, f(start), f(f(start)), ...`
pub fn enumerate_with<N, F>(start: N, successor: F) -> Stream<N>
where
    N: Countable,
    F: Fn(N) -> N + 'static,
{
    EnumerationConfig::new(start).successor(successor).build()
}

/// `start, start + 1, ...` while the value does not exceed `limit`
pub fn enumerate_to<N: Countable>(start: N, limit: N) -> Stream<N> {
    EnumerationConfig::new(start).limit(limit).build()
}

/// Counts from `start` by `step` until the value passes `limit`.
/// A negative step counts down and stops below `limit`.
pub fn enumerate_to_by<N: Countable>(start: N, limit: N, step: N) -> Stream<N> {
    EnumerationConfig::new(start).limit(limit).step(step).build()
}

/// `start, f(start), ...` while the value does not exceed `limit`
pub fn enumerate_to_with<N, F>(start: N, limit: N, successor: F) -> Stream<N>
where
    N: Countable,
    F: Fn(N) -> N + 'static,
{
    EnumerationConfig::new(start).limit(limit).successor(successor).build()
}
