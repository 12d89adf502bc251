//! GET operations for BTree.
//!
//! Exact-match lookup by iterative descent from the root, plus the
//! positional variant that reports where the descent ended.

use crate::compare::Comparator;
use crate::release::Release;
use crate::types::{BTree, NodeView, Probe};

impl<T, C: Comparator<T>, R: Release<T>> BTree<T, C, R> {
    /// Get a reference to the stored element comparing equal to `probe`.
    ///
    /// # Examples
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.lookup(&1), Some(&1));
    /// assert_eq!(tree.lookup(&2), None);
    /// ```
    pub fn lookup(&self, probe: &T) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        loop {
            match node.search(probe, &self.cmp) {
                Ok(index) => return Some(&node.elems[index]),
                Err(index) => node = node.children.get(index).map(Box::as_ref)?,
            }
        }
    }

    /// Get a mutable reference to the stored element comparing equal to
    /// `probe`.
    ///
    /// Changing the element in a way that alters its order relative to the
    /// other elements is a logic error; later lookups and inserts will
    /// misbehave.
    ///
    /// ```
    /// use overflow_btree::{BTree, LessThan};
    ///
    /// let by_key = LessThan(|a: &(u32, &str), b: &(u32, &str)| a.0 < b.0);
    /// let mut tree = BTree::with_comparator(2, by_key).unwrap();
    /// tree.insert((1, "one"));
    /// if let Some(entry) = tree.lookup_mut(&(1, "")) {
    ///     entry.1 = "uno";
    /// }
    /// assert_eq!(tree.lookup(&(1, "")), Some(&(1, "uno")));
    /// ```
    pub fn lookup_mut(&mut self, probe: &T) -> Option<&mut T> {
        let cmp = &self.cmp;
        let mut node = self.root.as_deref_mut()?;
        loop {
            match node.search(probe, cmp) {
                Ok(index) => return Some(&mut node.elems[index]),
                Err(index) => node = node.children.get_mut(index).map(Box::as_mut)?,
            }
        }
    }

    /// Check if an element comparing equal to `probe` is stored.
    pub fn contains(&self, probe: &T) -> bool {
        self.lookup(probe).is_some()
    }

    /// Look up `probe` and report where the descent ended.
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let tree: BTree<i32> = (0..10).map(|x| x * 10).collect();
    ///
    /// let hit = tree.lookup_node(&40);
    /// assert_eq!(hit.element, Some(&40));
    /// assert_eq!(hit.node.unwrap().elems()[hit.index], 40);
    ///
    /// let miss = tree.lookup_node(&45);
    /// assert!(!miss.is_found());
    /// assert!(miss.node.unwrap().is_leaf());
    /// assert_eq!(miss.depth, tree.height());
    /// ```
    pub fn lookup_node(&self, probe: &T) -> Probe<'_, T> {
        let mut result = Probe {
            element: None,
            node: None,
            depth: 0,
            index: 0,
        };
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            depth += 1;
            match node.search(probe, &self.cmp) {
                Ok(index) => {
                    return Probe {
                        element: Some(&node.elems[index]),
                        node: Some(NodeView::new(node)),
                        depth,
                        index,
                    };
                }
                Err(index) => {
                    result = Probe {
                        element: None,
                        node: Some(NodeView::new(node)),
                        depth,
                        index,
                    };
                    current = node.children.get(index).map(Box::as_ref);
                }
            }
        }
        result
    }
}

impl<T, C, R: Release<T>> BTree<T, C, R> {
    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(child) = node.children.first().map(Box::as_ref) {
            node = child;
        }
        node.elems.first()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(child) = node.children.last().map(Box::as_ref) {
            node = child;
        }
        node.elems.last()
    }
}
