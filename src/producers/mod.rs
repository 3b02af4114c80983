//! Producers: helpers that build streams from collections and integers

pub mod collection;
pub mod integer;
pub mod primes;

pub use collection::ToStream;
pub use integer::{
    enumerate, enumerate_by, enumerate_to, enumerate_to_by, enumerate_to_with, enumerate_with,
};
pub use primes::primes;
