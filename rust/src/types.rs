//! Core types and data structures for BTree.
//!
//! This module contains the tree, its nodes, and the read-only views handed
//! out by positional lookups.

use crate::compare::OrdComparator;
use crate::release::{NoRelease, Release};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest supported branching factor.
pub const MIN_FACTOR: usize = 1;

/// Branching factor used by `BTree::new`.
pub const DEFAULT_FACTOR: usize = 2;

/// Default bound on tree height, and so on iterator stack depth.
///
/// A tree of this height holds at least `2 * (factor + 1)^31 - 1` elements:
/// about 4.3e9 for factor 1, and impractically many for larger factors.
pub const DEFAULT_MAX_HEIGHT: usize = 32;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// An in-memory ordered B-tree.
///
/// Elements are ordered by a [`Comparator`](crate::Comparator); two elements
/// that compare equal are the same key, and inserting one replaces the other.
/// Each node holds between `factor` and `2 * factor` elements (the root may
/// hold fewer). Insertion lets a node overflow by one element and splits it
/// on the way back up.
///
/// # Type Parameters
///
/// * `T` - Element type
/// * `C` - Comparison rule, `OrdComparator` by default
/// * `R` - Hook receiving discarded elements, `NoRelease` by default
///
/// # Examples
///
/// ```
/// use overflow_btree::BTree;
///
/// let mut tree = BTree::new();
/// for x in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(x);
/// }
///
/// assert_eq!(tree.lookup(&6), Some(&6));
/// assert_eq!(tree.len(), 8);
/// assert_eq!(tree.insert(10), Some(10));
///
/// let sorted: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(sorted, [5, 6, 7, 10, 12, 17, 20, 30]);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(factor * log n)
/// - **Lookup**: O(log factor * log n)
/// - **Iteration**: O(n), auxiliary memory bounded by the height limit
pub struct BTree<T, C = OrdComparator, R = NoRelease>
where
    R: Release<T>,
{
    /// Root node, absent while the tree is empty.
    pub(crate) root: Option<Box<Node<T>>>,
    /// Number of stored elements.
    pub(crate) len: usize,
    /// Number of levels; 0 for an empty tree.
    pub(crate) height: usize,
    /// Branching factor.
    pub(crate) factor: usize,
    /// Largest height the tree may reach.
    pub(crate) max_height: usize,
    pub(crate) cmp: C,
    pub(crate) release: R,
}

/// A single tree node.
///
/// `elems` is strictly increasing. A node is a leaf iff `children` is empty;
/// otherwise `children.len() == elems.len() + 1`. Both vectors are allocated
/// one slot past the stable maximum so an overflowing insert never
/// reallocates.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) elems: Vec<T>,
    pub(crate) children: Vec<Box<Node<T>>>,
}

// ============================================================================
// VIEWS
// ============================================================================

/// Read-only handle to a node inside a tree.
#[derive(Debug)]
pub struct NodeView<'a, T> {
    pub(crate) node: &'a Node<T>,
}

impl<T> Clone for NodeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeView<'_, T> {}

impl<'a, T> NodeView<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        Self { node }
    }

    /// Elements stored in this node, in order.
    pub fn elems(&self) -> &'a [T] {
        &self.node.elems
    }

    /// Number of elements stored in this node.
    pub fn len(&self) -> usize {
        self.node.elems.len()
    }

    /// Returns true if the node holds no elements.
    pub fn is_empty(&self) -> bool {
        self.node.elems.is_empty()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Child at `index`, or `None` for leaves and out-of-range indices.
    pub fn child(&self, index: usize) -> Option<NodeView<'a, T>> {
        self.node
            .children
            .get(index)
            .map(|child| NodeView::new(child.as_ref()))
    }
}

/// Result of a positional lookup.
///
/// `node` is the last node visited and `depth` its level (the root is at
/// depth 1). When the element was found, `index` is its slot in `node`;
/// otherwise `node` is a leaf and `index` is where the probe would be
/// inserted.
#[derive(Debug)]
pub struct Probe<'a, T> {
    /// The stored element comparing equal to the probe, if any.
    pub element: Option<&'a T>,
    /// Last node visited; `None` only for an empty tree.
    pub node: Option<NodeView<'a, T>>,
    /// Level of `node`, counting the root as 1; 0 for an empty tree.
    pub depth: usize,
    /// Matching slot in `node`, or the insertion point on a miss.
    pub index: usize,
}

impl<T> Probe<'_, T> {
    /// Returns true if the probe matched a stored element.
    pub fn is_found(&self) -> bool {
        self.element.is_some()
    }
}
