//! Error types.

use thiserror::Error;

/// A write would exceed the capacity of a [`StaticString`](crate::StaticString).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("capacity exceeded: {required} bytes required, capacity is {capacity}")]
pub struct CapacityError {
    /// Total length the string would have had after the write.
    pub required: usize,
    /// Fixed capacity of the string.
    pub capacity: usize,
}
