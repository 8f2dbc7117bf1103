//! Strongly-typed errors for the fallible collection operations.

use derive_more::{Display, Error};

/// Returned when indexed access lands past the end of a collection.
#[derive(Debug, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements the collection held at the time.
    pub len: usize,
}

/// Returned when a collection's length can no longer be counted in a `usize`.
#[derive(Debug, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
