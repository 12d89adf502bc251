//! Tree structure management operations for BTree.
//!
//! Size queries, node statistics, whole-tree teardown, and the debug dump.

use std::fmt::{self, Write as _};

use crate::release::Release;
use crate::tracing_helpers::debug_log;
use crate::types::{BTree, Node};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<T, C, R: Release<T>> BTree<T, C, R> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the branching factor.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Returns the height limit.
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.as_deref().map_or(0, Self::node_count_recursive)
    }

    fn node_count_recursive(node: &Node<T>) -> usize {
        1 + node
            .children
            .iter()
            .map(|child| Self::node_count_recursive(child))
            .sum::<usize>()
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.as_deref().map_or(0, Self::leaf_count_recursive)
    }

    fn leaf_count_recursive(node: &Node<T>) -> usize {
        if node.is_leaf() {
            return 1;
        }
        node.children
            .iter()
            .map(|child| Self::leaf_count_recursive(child))
            .sum()
    }

    /// Remove every element, handing each to the release hook.
    ///
    /// The tree keeps its configuration and can be reused.
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let mut tree: BTree<i32> = (0..10).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            debug_log!(len = self.len, height = self.height, "tearing down tree");
            root.release_all(&mut self.release);
        }
        self.len = 0;
        self.height = 0;
    }

    /// Render the tree one node per line, children indented two spaces
    /// below their parent.
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let tree: BTree<i32> = (1..=5).collect();
    /// assert_eq!(tree.dump(), "elems: 3\n  elems: 1 2\n  elems: 4 5\n");
    /// assert_eq!(BTree::<i32>::new().dump(), "<empty>\n");
    /// ```
    pub fn dump(&self) -> String
    where
        T: fmt::Debug,
    {
        let mut out = String::new();
        match self.root.as_deref() {
            Some(root) => Self::dump_node(root, 0, &mut out),
            None => out.push_str("<empty>\n"),
        }
        out
    }

    fn dump_node(node: &Node<T>, depth: usize, out: &mut String)
    where
        T: fmt::Debug,
    {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str("elems:");
        for elem in &node.elems {
            // Writing to a String cannot fail.
            let _ = write!(out, " {:?}", elem);
        }
        out.push('\n');
        for child in &node.children {
            Self::dump_node(child, depth + 1, out);
        }
    }
}

impl<T, C, R: Release<T>> Drop for BTree<T, C, R> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, C, R: Release<T>> fmt::Debug for BTree<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BTree, BTreeConfig, OrdComparator, ReleaseFn};
    use std::cell::RefCell;

    #[test]
    fn test_empty_tree_stats() {
        let tree = BTree::<i32>::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn test_single_insert_is_one_node_height_one() {
        let mut tree = BTree::new();
        tree.insert(1);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_node_counts_after_split() {
        let tree: BTree<i32> = (1..=5).collect();
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_dump_scenario() {
        let mut tree = BTree::new();
        for x in [10, 20, 5, 6, 12, 30, 7, 17] {
            tree.insert(x);
        }
        assert_eq!(
            tree.dump(),
            "elems: 10\n  elems: 5 6 7\n  elems: 12 17 20 30\n"
        );
    }

    #[test]
    fn test_debug_formats_as_set() {
        let tree: BTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }

    #[test]
    fn test_clear_and_drop_release_every_element() {
        let released = RefCell::new(Vec::new());
        {
            let hook = ReleaseFn(|e: i32| released.borrow_mut().push(e));
            let mut tree =
                BTree::with_config(BTreeConfig::default(), OrdComparator, hook).unwrap();
            tree.extend(0..30);
            tree.clear();
            assert_eq!(released.borrow().len(), 30);
            assert_eq!(tree.node_count(), 0);

            tree.extend(100..110);
        }
        let mut all = released.into_inner();
        all.sort();
        let expected: Vec<i32> = (0..30).chain(100..110).collect();
        assert_eq!(all, expected);
    }
}
