//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a priority queue with:
//! - O(1) insert, find_min, and merge of root rings
//! - O(log n) amortized extract_min
//!
//! The structure is a forest of heap-ordered trees. Roots are linked in a
//! circular doubly linked ring, and the heap keeps a handle to the minimum
//! root. Inserts only add singleton roots; all restructuring is deferred to
//! extract_min, which consolidates the forest so that no two roots share a
//! degree.
//!
//! Nodes live in an arena ([`slotmap`]) and are addressed by handles, so
//! parent links and sibling rings involve no raw pointers.

use std::fmt;

use log::{debug, trace};

use crate::arena::{NodeArena, NodeKey};
use crate::degree::{checked_increment, max_degree, Degree};
use crate::error::{HeapError, InvariantError};
use crate::traits::Heap;

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.insert(8);
/// assert_eq!(heap.find_min(), Some(&3));
/// assert_eq!(heap.extract_min(), Some(3));
/// assert_eq!(heap.find_min(), Some(&5));
/// ```
#[derive(Clone)]
pub struct FibonacciHeap<K> {
    nodes: NodeArena<K>,
    min: Option<NodeKey>,
    len: usize,
}

impl<K: Ord> FibonacciHeap<K> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::default(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with room for `capacity` keys before the node
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            min: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Number of keys the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Removes every key, keeping the allocated arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
        self.len = 0;
    }

    /// Inserts a key as a new singleton root next to the minimum.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, key: K) {
        let node = self.nodes.alloc(key);

        match self.min {
            Some(min) => {
                self.nodes.insert_before(min, node);
                if self.nodes[node].key < self.nodes[min].key {
                    self.min = Some(node);
                }
            }
            None => self.min = Some(node),
        }

        self.len += 1;
    }

    /// Returns the minimum key, or `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn find_min(&self) -> Option<&K> {
        self.min.map(|min| &self.nodes[min].key)
    }

    /// Like [`find_min`](Self::find_min), but reports an empty heap as an error.
    pub fn try_find_min(&self) -> Result<&K, HeapError> {
        self.find_min().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum key, or `None` if the heap is empty.
    ///
    /// The minimum's children are promoted to roots, then the forest is
    /// consolidated so that every root has a distinct degree.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Option<K> {
        let z = self.min?;

        if let Some(child) = self.nodes[z].child.take() {
            for c in self.nodes.ring(child) {
                self.nodes[c].parent = None;
            }
            self.nodes.splice(Some(z), Some(child));
            self.nodes[z].degree = 0;
        }

        match self.nodes.unlink(z) {
            None => self.min = None,
            Some(next) => {
                self.min = Some(next);
                self.consolidate(next);
            }
        }

        self.len -= 1;
        let key = self.nodes.free(z);

        #[cfg(any(test, feature = "invariant-checks"))]
        self.assert_consolidated();

        key
    }

    /// Like [`extract_min`](Self::extract_min), but reports an empty heap as an error.
    pub fn try_extract_min(&mut self) -> Result<K, HeapError> {
        self.extract_min().ok_or(HeapError::EmptyHeap)
    }

    /// Merges another heap into this one by splicing its root ring next to
    /// the minimum.
    ///
    /// No consolidation happens here; duplicate root degrees are resolved by
    /// the next extract_min.
    ///
    /// # Time Complexity
    /// O(1) when `self` is empty, otherwise O(m) to move `other`'s m nodes
    /// into this heap's arena.
    pub fn merge(&mut self, other: Self) {
        let FibonacciHeap {
            nodes,
            min: other_min,
            len: other_len,
        } = other;

        let Some(other_min) = other_min else {
            return;
        };
        let Some(self_min) = self.min else {
            *self = FibonacciHeap {
                nodes,
                min: Some(other_min),
                len: other_len,
            };
            return;
        };

        let remap = self.nodes.absorb(nodes);
        let other_min = remap[other_min];

        self.nodes.splice(Some(self_min), Some(other_min));
        if self.nodes[other_min].key < self.nodes[self_min].key {
            self.min = Some(other_min);
        }
        self.len += other_len;
    }

    /// Drains the heap into a vector in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(key) = self.extract_min() {
            sorted.push(key);
        }
        sorted
    }

    /// Number of trees in the forest.
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| self.nodes.ring(min).len())
    }

    /// Degrees of the roots, walking the root ring from the minimum.
    pub fn root_degrees(&self) -> Vec<Degree> {
        self.min.map_or_else(Vec::new, |min| {
            self.nodes
                .ring(min)
                .into_iter()
                .map(|root| self.nodes[root].degree)
                .collect()
        })
    }

    /// Validates the structure of the whole forest.
    ///
    /// Checks that rings are symmetric, that only roots lack a parent, that
    /// each degree equals the size of the child ring, heap order, that the
    /// minimum handle names the smallest root, and that the live count
    /// matches the stored nodes. O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let Some(min) = self.min else {
            if self.len != 0 || self.nodes.len() != 0 {
                return Err(InvariantError::new(format!(
                    "no minimum but len is {} with {} stored nodes",
                    self.len,
                    self.nodes.len()
                )));
            }
            return Ok(());
        };

        let roots = self.checked_ring(min)?;
        let mut stack = Vec::with_capacity(roots.len());
        for root in roots {
            let node = &self.nodes[root];
            if node.parent.is_some() {
                return Err(InvariantError::new("root ring member has a parent"));
            }
            if node.key < self.nodes[min].key {
                return Err(InvariantError::new("minimum handle is not the smallest root"));
            }
            stack.push(root);
        }

        let mut visited = 0usize;
        while let Some(current) = stack.pop() {
            visited += 1;
            let node = &self.nodes[current];
            let children = match node.child {
                Some(child) => self.checked_ring(child)?,
                None => Vec::new(),
            };
            if children.len() != usize::from(node.degree) {
                return Err(InvariantError::new(format!(
                    "degree {} but {} children",
                    node.degree,
                    children.len()
                )));
            }
            for child in children {
                let c = &self.nodes[child];
                if c.parent != Some(current) {
                    return Err(InvariantError::new("child does not point back to its parent"));
                }
                if c.key < node.key {
                    return Err(InvariantError::new("child key is smaller than parent key"));
                }
                stack.push(child);
            }
        }

        if visited != self.len || self.nodes.len() != self.len {
            return Err(InvariantError::new(format!(
                "len is {} but {} nodes are reachable and {} are stored",
                self.len,
                visited,
                self.nodes.len()
            )));
        }
        Ok(())
    }

    /// [`check_invariants`](Self::check_invariants) plus the post-extract_min
    /// guarantee that no two roots share a degree.
    pub fn check_consolidated(&self) -> Result<(), InvariantError> {
        self.check_invariants()?;

        let mut degrees = self.root_degrees();
        degrees.sort_unstable();
        if let Some(pair) = degrees.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(InvariantError::new(format!(
                "two roots share degree {}",
                pair[0]
            )));
        }
        Ok(())
    }

    #[cfg(any(test, feature = "invariant-checks"))]
    fn assert_consolidated(&self) {
        if let Err(err) = self.check_consolidated() {
            panic!("heap invariant violated after extract_min: {err}");
        }
    }

    /// Walks a ring with a step limit, checking that every member exists and
    /// that left/right links mirror each other.
    fn checked_ring(&self, start: NodeKey) -> Result<Vec<NodeKey>, InvariantError> {
        let mut members = Vec::new();
        let mut current = start;
        loop {
            if !self.nodes.contains(current) {
                return Err(InvariantError::new("ring links to a freed node"));
            }
            let right = self.nodes[current].right;
            if !self.nodes.contains(right) || self.nodes[right].left != current {
                return Err(InvariantError::new("ring links are not symmetric"));
            }
            members.push(current);
            if members.len() > self.nodes.len() {
                return Err(InvariantError::new("ring does not close"));
            }
            current = right;
            if current == start {
                return Ok(members);
            }
        }
    }

    /// Links equal-degree roots until every root degree is unique, then
    /// rescans the survivors for the new minimum.
    fn consolidate(&mut self, start: NodeKey) {
        // Snapshot first: linking rewrites the ring being walked.
        let roots = self.nodes.ring(start);
        let root_count = roots.len();
        let mut table: Vec<Option<NodeKey>> = vec![None; max_degree(self.len) + 1];

        for root in roots {
            let mut x = root;
            let mut d = usize::from(self.nodes[x].degree);

            while let Some(y) = table[d].take() {
                // On equal keys the root already in the table stays parent.
                let (parent, child) = if self.nodes[x].key < self.nodes[y].key {
                    (x, y)
                } else {
                    (y, x)
                };
                self.link(child, parent);
                x = parent;
                d += 1;
            }

            table[d] = Some(x);
        }

        let mut min: Option<NodeKey> = None;
        for &root in table.iter().flatten() {
            if min.map_or(true, |m| self.nodes[root].key < self.nodes[m].key) {
                min = Some(root);
            }
        }
        self.min = min;

        debug!(
            "consolidated {} roots into {} (degree table of {} slots)",
            root_count,
            table.iter().flatten().count(),
            table.len()
        );
    }

    /// Makes root `child` a child of root `parent`.
    ///
    /// Requires `child`'s key to be no smaller than `parent`'s.
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        debug_assert!(self.nodes[child].key >= self.nodes[parent].key);
        trace!(
            "linking root of degree {} under root of degree {}",
            self.nodes[child].degree,
            self.nodes[parent].degree
        );

        self.nodes.unlink(child);
        self.nodes[child].parent = Some(parent);

        match self.nodes[parent].child {
            Some(sibling) => self.nodes.insert_before(sibling, child),
            None => self.nodes[parent].child = Some(child),
        }

        self.nodes[parent].degree = checked_increment(self.nodes[parent].degree);
    }
}

impl<K: Ord> Heap<K> for FibonacciHeap<K> {
    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn push(&mut self, key: K) {
        self.insert(key)
    }

    fn peek(&self) -> Option<&K> {
        self.find_min()
    }

    fn pop(&mut self) -> Option<K> {
        self.extract_min()
    }

    fn merge(&mut self, other: Self) {
        FibonacciHeap::merge(self, other)
    }
}

impl<K: Ord> Default for FibonacciHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for FibonacciHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Ord> Extend<K> for FibonacciHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for FibonacciHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("min", &self.find_min())
            .field("roots", &self.root_count())
            .finish()
    }
}
