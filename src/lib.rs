//! Lazy, memoizing, persistent streams.
//!
//! ```
//! use lazy_streams::producers::{enumerate, primes};
//!
//! let evens = enumerate(0i64).select(|n| n % 2 == 0);
//! assert_eq!(evens.take(4).to_vec(), vec![0, 2, 4, 6]);
//! assert_eq!(primes().at(9), Ok(&29));
//! ```

pub mod error;
pub mod stream;
pub mod producers;
pub mod stream_configuration;
mod serde_impls;

// Re-export the common surface at the crate root
pub use error::{StreamError, StreamResult};
pub use producers::ToStream;
pub use stream::Stream;
pub use stream_configuration::{Countable, EnumerationConfig, Successor};
