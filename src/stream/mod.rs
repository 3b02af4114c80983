//! Lazy, memoizing streams
//!
//! A [`Stream`] is a cons list whose tail is a deferred computation that runs
//! at most once. Combinators in [`transform`] build new streams lazily;
//! operations in [`utility`] walk them.

pub mod core;
pub mod constructors;
pub mod transform;
pub mod utility;

// Re-export core types
pub use self::core::{Stream, Thunk};

// Re-export constructors
pub use self::constructors::{cyclic, empty, from_iter, once, repeat};

// Re-export iterators
pub use self::utility::{IntoIter, Iter};
