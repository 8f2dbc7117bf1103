#![warn(missing_docs)]

//! Crate-internal support: typed errors, extension traits and test instrumentation.

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod option;
#[cfg(test)]
pub mod panic;
pub mod result;
