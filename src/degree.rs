//! Degree type and bounds for Fibonacci heap nodes.
//!
//! # Why u8?
//!
//! A node's degree is the number of its direct children. In a Fibonacci heap
//! a tree whose root has degree `d` holds at least `F(d+2) >= φ^d` nodes, so
//! the largest degree in a heap of `n` nodes is at most `log_φ(n)`.
//!
//! For practical purposes:
//! - 2⁶⁴ nodes → max degree ~92
//! - `u8::MAX` (255) is never reachable with addressable memory
//!
//! Using `u8` instead of `usize` keeps the node header small, which matters
//! for the arena's cache footprint.

/// Type alias for node degree (count of direct children).
pub type Degree = u8;

/// Maximum representable degree.
pub const MAX_DEGREE: Degree = u8::MAX;

/// The golden ratio, the growth factor of minimum tree sizes per degree.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Safely increment a degree value, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`. That would need more than φ²⁵⁵ nodes,
/// so reaching it means the forest is corrupted.
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::degree::{checked_increment, Degree};
///
/// let degree: Degree = 5;
/// assert_eq!(checked_increment(degree), 6);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree.checked_add(1).expect(
        "degree overflow: max degree is log_φ(n) and u8::MAX (255) \
         supports heaps with up to φ²⁵⁵ nodes",
    )
}

/// Upper bound on any node degree in a heap of `len` nodes: `⌊log_φ(len)⌋ + 1`.
///
/// The consolidation table needs one slot per possible degree, so it is sized
/// `max_degree(len) + 1`. An empty heap is treated as a heap of one node.
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::degree::max_degree;
///
/// assert_eq!(max_degree(1), 1);
/// assert_eq!(max_degree(100), 10);
/// ```
#[inline]
pub fn max_degree(len: usize) -> usize {
    let n = len.max(1) as f64;
    (n.ln() / PHI.ln()).floor() as usize + 1
}
