//! Configuration types for stream producers

use num::traits::{CheckedAdd, One, Zero};
use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::stream::Stream;

/// Numeric types that integer enumerations can count with
pub trait Countable: Copy + PartialOrd + Add<Output = Self> + CheckedAdd + Zero + One + 'static {}

impl<N> Countable for N where
    N: Copy + PartialOrd + Add<Output = N> + CheckedAdd + Zero + One + 'static
{
}

/// Rule producing the next value of an enumeration from the current one
pub type Successor<N> = Rc<dyn Fn(N) -> N>;

/// Configuration for integer enumerations
///
/// Without a successor each value is the previous one plus `step`. With a
/// successor, the successor alone decides the next value and `step` only
/// decides which side of `limit` ends a bounded enumeration: a non-negative
/// step stops once a value exceeds the limit, a negative step once a value
/// falls below it.
///
/// Stepping never overflows: if adding the step would leave the range of
/// `N`, the enumeration ends there, bounded or not. `enumerate(250u8)` is
/// `250, 251, ..., 255`. A successor is called as given and must handle its
/// own overflow.
#[derive(Clone)]
pub struct EnumerationConfig<N> {
    pub start: N,
    pub step: N,
    pub limit: Option<N>,
    pub successor: Option<Successor<N>>,
}

impl<N: fmt::Debug> fmt::Debug for EnumerationConfig<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumerationConfig")
            .field("start", &self.start)
            .field("step", &self.step)
            .field("limit", &self.limit)
            .field(
                "successor",
                &if self.successor.is_some() {
                    "Some(Successor)"
                } else {
                    "None"
                },
            )
            .finish()
    }
}

impl<N: Countable> Default for EnumerationConfig<N> {
    fn default() -> Self {
        Self {
            start: N::zero(),
            step: N::one(),
            limit: None,
            successor: None,
        }
    }
}

impl<N: Countable> EnumerationConfig<N> {
    /// Create an unbounded enumeration counting up by one from `start`
    pub fn new(start: N) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    /// Set the arithmetic step
    pub fn step(mut self, step: N) -> Self {
        self.step = step;
        self
    }

    /// Bound the enumeration
    pub fn limit(mut self, limit: N) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Generate each value from the previous one with `successor` instead of
    /// adding the step
    pub fn successor<F>(mut self, successor: F) -> Self
    where
        F: Fn(N) -> N + 'static,
    {
        self.successor = Some(Rc::new(successor));
        self
    }

    /// Rejects bounded enumerations that can never reach their limit
    pub fn validate(&self) -> StreamResult<()>
    where
        N: fmt::Debug,
    {
        match self.limit {
            Some(limit) if self.step.is_zero() && self.successor.is_none() && !self.is_past_limit(self.start) => {
                log::warn!("enumeration from {:?} towards {:?} has a zero step", self.start, limit);
                Err(StreamError::InvalidStep {
                    start: format!("{:?}", self.start),
                    limit: format!("{:?}", limit),
                })
            }
            _ => Ok(()),
        }
    }

    /// Build the stream. Values are generated as the stream is forced.
    pub fn build(&self) -> Stream<N> {
        generate(self.start, Rc::new(self.clone()))
    }

    pub(crate) fn is_past_limit(&self, value: N) -> bool {
        match self.limit {
            None => false,
            Some(limit) if self.step >= N::zero() => value > limit,
            Some(limit) => value < limit,
        }
    }

    /// `None` when stepping would overflow `N`
    pub(crate) fn next_value(&self, value: N) -> Option<N> {
        match &self.successor {
            Some(successor) => Some(successor(value)),
            None => value.checked_add(&self.step),
        }
    }
}

fn generate<N: Countable>(value: N, config: Rc<EnumerationConfig<N>>) -> Stream<N> {
    if config.is_past_limit(value) {
        log::trace!("enumeration crossed its limit");
        return Stream::empty();
    }
    Stream::cons(value, move || match config.next_value(value) {
        Some(next) => generate(next, config),
        None => {
            log::trace!("enumeration reached the end of its integer range");
            Stream::empty()
        }
    })
}
