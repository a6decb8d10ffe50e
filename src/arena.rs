//! Arena node store and circular ring operations
//!
//! All nodes of a heap live in one [`SlotMap`] and refer to each other through
//! generational [`NodeKey`] handles instead of pointers. Parent links are plain
//! handles too: the arena is the only owner, so removing a node never has to
//! coordinate with other owners.
//!
//! # Rings
//!
//! Every node sits in exactly one circular doubly-linked ring through its
//! `left`/`right` handles: either the root ring or its parent's child ring.
//!
//! - A detached node points to itself (a ring of one)
//! - There is no head or tail; any member is an entry point
//! - Splicing two rings together is O(1)
//! - Iteration wraps around, so traversals stop on returning to the start

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::degree::Degree;

new_key_type! {
    /// Handle to a node in a [`NodeArena`]
    pub(crate) struct NodeKey;
}

/// A tree node in the forest
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) degree: Degree,
    pub(crate) parent: Option<NodeKey>,
    /// Any one member of this node's child ring
    pub(crate) child: Option<NodeKey>,
    pub(crate) left: NodeKey,
    pub(crate) right: NodeKey,
}

/// Contiguous storage for heap nodes plus the ring primitives over them
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K> {
    nodes: SlotMap<NodeKey, Node<K>>,
}

impl<K> Default for NodeArena<K> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<K> NodeArena<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn contains(&self, node: NodeKey) -> bool {
        self.nodes.contains_key(node)
    }

    /// Allocates a detached node forming a ring of one.
    pub(crate) fn alloc(&mut self, key: K) -> NodeKey {
        self.nodes.insert_with_key(|this| Node {
            key,
            degree: 0,
            parent: None,
            child: None,
            left: this,
            right: this,
        })
    }

    /// Frees a node, returning its key. The node must already be detached.
    pub(crate) fn free(&mut self, node: NodeKey) -> Option<K> {
        debug_assert!(
            self.nodes.get(node).map_or(true, |n| n.right == node),
            "freeing a node that is still linked"
        );
        self.nodes.remove(node).map(|n| n.key)
    }

    /// Inserts detached `new` immediately before `at` in `at`'s ring.
    pub(crate) fn insert_before(&mut self, at: NodeKey, new: NodeKey) {
        debug_assert!(self.is_detached(new), "node is already linked");
        let prev = self.nodes[at].left;

        self.nodes[new].right = at;
        self.nodes[new].left = prev;
        self.nodes[prev].right = new;
        self.nodes[at].left = new;
    }

    /// Removes `node` from its ring and leaves it detached.
    ///
    /// Returns a remaining member of the old ring (the node's right
    /// neighbour), or `None` if `node` was the only member.
    pub(crate) fn unlink(&mut self, node: NodeKey) -> Option<NodeKey> {
        let left = self.nodes[node].left;
        let right = self.nodes[node].right;

        self.nodes[node].left = node;
        self.nodes[node].right = node;

        if right == node {
            return None;
        }
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        Some(right)
    }

    /// Splices two rings into one in O(1).
    ///
    /// The members of `b`'s ring end up between `a`'s left neighbour and `a`.
    /// Returns an entry point into the merged ring, or `None` if both were empty.
    pub(crate) fn splice(&mut self, a: Option<NodeKey>, b: Option<NodeKey>) -> Option<NodeKey> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (Some(a), Some(b)) => {
                let a_prev = self.nodes[a].left;
                let b_prev = self.nodes[b].left;

                self.nodes[a_prev].right = b;
                self.nodes[b].left = a_prev;

                self.nodes[b_prev].right = a;
                self.nodes[a].left = b_prev;

                Some(a)
            }
        }
    }

    /// Snapshot of every member of the ring containing `start`, beginning
    /// with `start` and following `right` links.
    pub(crate) fn ring(&self, start: NodeKey) -> Vec<NodeKey> {
        let mut members = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            members.push(current);
            current = self.nodes[current].right;
        }
        members
    }

    fn is_detached(&self, node: NodeKey) -> bool {
        let n = &self.nodes[node];
        n.left == node && n.right == node
    }

    /// Moves every node of `other` into this arena.
    ///
    /// Handles inside the moved nodes are rewritten to their new values; the
    /// returned map translates `other`'s handles for the caller.
    pub(crate) fn absorb(&mut self, other: NodeArena<K>) -> SecondaryMap<NodeKey, NodeKey> {
        let mut remap = SecondaryMap::with_capacity(other.nodes.len());
        let mut moved = Vec::with_capacity(other.nodes.len());

        for (old, node) in other.nodes {
            let new = self.nodes.insert(node);
            remap.insert(old, new);
            moved.push(new);
        }

        for new in moved {
            let node = &mut self.nodes[new];
            node.left = remap[node.left];
            node.right = remap[node.right];
            node.parent = node.parent.map(|p| remap[p]);
            node.child = node.child.map(|c| remap[c]);
        }

        remap
    }
}

impl<K> std::ops::Index<NodeKey> for NodeArena<K> {
    type Output = Node<K>;

    fn index(&self, node: NodeKey) -> &Node<K> {
        &self.nodes[node]
    }
}

impl<K> std::ops::IndexMut<NodeKey> for NodeArena<K> {
    fn index_mut(&mut self, node: NodeKey) -> &mut Node<K> {
        &mut self.nodes[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_keys(arena: &NodeArena<i32>, start: NodeKey) -> Vec<i32> {
        arena.ring(start).into_iter().map(|n| arena[n].key).collect()
    }

    #[test]
    fn test_alloc_is_singleton_ring() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(1);

        assert_eq!(arena[a].left, a);
        assert_eq!(arena[a].right, a);
        assert_eq!(arena[a].degree, 0);
        assert!(arena[a].parent.is_none());
        assert_eq!(arena.ring(a), vec![a]);
    }

    #[test]
    fn test_insert_before_and_unlink() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        let c = arena.alloc(3);

        arena.insert_before(a, b);
        arena.insert_before(a, c);
        assert_eq!(ring_keys(&arena, a), vec![1, 2, 3]);

        assert_eq!(arena.unlink(b), Some(c));
        assert_eq!(ring_keys(&arena, a), vec![1, 3]);
        assert_eq!(arena.ring(b), vec![b]);

        assert_eq!(arena.unlink(a), Some(c));
        assert_eq!(arena.unlink(c), None);
    }

    #[test]
    fn test_splice_rings() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        arena.insert_before(a, b);

        let x = arena.alloc(10);
        let y = arena.alloc(11);
        arena.insert_before(x, y);

        assert_eq!(arena.splice(Some(a), Some(x)), Some(a));
        assert_eq!(ring_keys(&arena, a), vec![1, 2, 10, 11]);
        assert_eq!(arena.splice(None, Some(x)), Some(x));
        assert_eq!(arena.splice(None, None), None);
    }

    #[test]
    fn test_free_returns_key() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(42);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.free(a), Some(42));
        assert!(!arena.contains(a));
        assert_eq!(arena.free(a), None);
    }

    #[test]
    fn test_absorb_rewrites_handles() {
        let mut left = NodeArena::default();
        let _ = left.alloc(0);

        let mut right = NodeArena::default();
        let p = right.alloc(1);
        let c = right.alloc(2);
        let s = right.alloc(3);
        right.insert_before(p, s);
        right[c].parent = Some(p);
        right[p].child = Some(c);
        right[p].degree = 1;

        let remap = left.absorb(right);
        let (p, c, s) = (remap[p], remap[c], remap[s]);

        assert_eq!(left.len(), 4);
        assert_eq!(left[p].child, Some(c));
        assert_eq!(left[c].parent, Some(p));
        assert_eq!(ring_keys(&left, p), vec![1, 3]);
        assert_eq!(left[s].right, p);
    }
}
