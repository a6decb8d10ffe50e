//! Error types for heap operations.
//!
//! - [`HeapError`]: returned by the `Result` flavoured accessors
//!   ([`try_find_min`](crate::fibonacci::FibonacciHeap::try_find_min),
//!   [`try_extract_min`](crate::fibonacci::FibonacciHeap::try_extract_min)).
//! - [`InvariantError`]: returned by
//!   [`check_invariants`](crate::fibonacci::FibonacciHeap::check_invariants)
//!   when the forest's structure is inconsistent.
//!
//! # Example
//!
//! ```
//! use rust_fibonacci_heap::error::HeapError;
//! use rust_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let mut heap: FibonacciHeap<i32> = FibonacciHeap::new();
//! assert_eq!(heap.try_extract_min(), Err(HeapError::EmptyHeap));
//!
//! heap.insert(7);
//! assert_eq!(heap.try_extract_min(), Ok(7));
//! ```

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Error returned when a structural invariant of the forest does not hold.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
