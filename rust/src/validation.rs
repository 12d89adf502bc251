//! Validation and debugging utilities for BTree.
//!
//! Invariant checking over the whole node graph, used by the test suites
//! and available to callers who want to audit a tree.

use std::cmp::Ordering;

use crate::compare::Comparator;
use crate::error::{BTreeError, BTreeResult};
use crate::release::Release;
use crate::types::{BTree, Node};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T, C: Comparator<T>, R: Release<T>> BTree<T, C, R> {
    /// Check if the tree maintains B-tree invariants.
    pub fn check_invariants(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check every invariant, reporting the first violation found.
    ///
    /// - elements within a node are strictly increasing
    /// - every subtree lies strictly between its separating elements
    /// - all leaves sit at depth `height()`
    /// - non-root nodes hold between `factor` and `2 * factor` elements
    /// - internal nodes have exactly one more child than elements
    /// - `len()` matches the number of stored elements
    pub fn validate(&self) -> BTreeResult<()> {
        let Some(root) = self.root.as_deref() else {
            if self.len != 0 || self.height != 0 {
                return Err(BTreeError::data_integrity(
                    "Empty tree",
                    &format!("len {} and height {} should be 0", self.len, self.height),
                ));
            }
            return Ok(());
        };

        if root.elems.is_empty() {
            return Err(BTreeError::corrupted_tree("Root", "root node holds no elements"));
        }

        let mut count = 0;
        self.check_node(root, None, None, 1, true, &mut count)?;

        if count != self.len {
            return Err(BTreeError::data_integrity(
                "Element count",
                &format!("{} in tree vs {} recorded", count, self.len),
            ));
        }
        Ok(())
    }

    /// Recursively check invariants for a node and its children.
    fn check_node(
        &self,
        node: &Node<T>,
        lower: Option<&T>,
        upper: Option<&T>,
        depth: usize,
        is_root: bool,
        count: &mut usize,
    ) -> BTreeResult<()> {
        let n = node.len();
        let max_keys = 2 * self.factor;

        if n > max_keys {
            return Err(BTreeError::corrupted_tree(
                "Node",
                &format!("{} elements at depth {} exceeds {}", n, depth, max_keys),
            ));
        }
        if !is_root && n < self.factor {
            return Err(BTreeError::corrupted_tree(
                "Node",
                &format!("{} elements at depth {} is below {}", n, depth, self.factor),
            ));
        }

        for pair in node.elems.windows(2) {
            if self.cmp.compare(&pair[0], &pair[1]) != Ordering::Less {
                return Err(BTreeError::corrupted_tree(
                    "Node",
                    &format!("elements out of order at depth {}", depth),
                ));
            }
        }

        if let (Some(lower), Some(first)) = (lower, node.elems.first()) {
            if self.cmp.compare(lower, first) != Ordering::Less {
                return Err(BTreeError::corrupted_tree(
                    "Subtree",
                    &format!("element at depth {} not above its left separator", depth),
                ));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.elems.last()) {
            if self.cmp.compare(last, upper) != Ordering::Less {
                return Err(BTreeError::corrupted_tree(
                    "Subtree",
                    &format!("element at depth {} not below its right separator", depth),
                ));
            }
        }

        *count += n;

        if node.is_leaf() {
            if depth != self.height {
                return Err(BTreeError::corrupted_tree(
                    "Leaf",
                    &format!("leaf at depth {} in tree of height {}", depth, self.height),
                ));
            }
            return Ok(());
        }

        if node.children.len() != n + 1 {
            return Err(BTreeError::corrupted_tree(
                "Branch",
                &format!(
                    "{} children for {} elements at depth {}",
                    node.children.len(),
                    n,
                    depth
                ),
            ));
        }

        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(&node.elems[i - 1]) };
            let child_upper = if i == n { upper } else { Some(&node.elems[i]) };
            self.check_node(child, child_lower, child_upper, depth + 1, false, count)?;
        }
        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Returns the sizes of all leaf nodes, left to right.
    pub fn leaf_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        if let Some(root) = self.root.as_deref() {
            Self::collect_leaf_sizes(root, &mut sizes);
        }
        sizes
    }

    fn collect_leaf_sizes(node: &Node<T>, sizes: &mut Vec<usize>) {
        if node.is_leaf() {
            sizes.push(node.len());
            return;
        }
        for child in &node.children {
            Self::collect_leaf_sizes(child, sizes);
        }
    }
}
