//! Fibonacci Heap for Rust
//!
//! This crate provides an arena-backed Fibonacci heap: a min-priority queue
//! built from a forest of heap-ordered trees whose roots sit in a circular
//! ring. Insertion is lazy and all restructuring happens on extraction.
//!
//! # Complexity
//!
//! - `insert`: O(1)
//! - `find_min`: O(1)
//! - `extract_min`: O(log n) amortized
//! - `merge`: O(1) ring splice, plus moving the other heap's nodes into this arena
//!
//! Decrease-key and arbitrary deletion are not supported.
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! for key in [5, 3, 8, 1] {
//!     heap.insert(key);
//! }
//! assert_eq!(heap.find_min(), Some(&1));
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.extract_min(), Some(3));
//! assert_eq!(heap.len(), 2);
//! ```

mod arena;
pub mod degree;
pub mod error;
pub mod fibonacci;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export the main types for convenience
pub use error::{HeapError, InvariantError};
pub use fibonacci::FibonacciHeap;
pub use traits::Heap;
