//! Common trait for heap data structures
//!
//! [`Heap`] follows the shape of Rust's standard heap API (`push`, `pop`,
//! `peek`) but is a min-heap over keys that only need a total order.

/// Base trait for min-heap / priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts a key (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::Heap;
/// use rust_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(1) amortized for lazy heaps.
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn pop(&mut self) -> Option<K>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
