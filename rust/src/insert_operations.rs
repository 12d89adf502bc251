//! INSERT operations for BTree.
//!
//! Tree-level wrapper around the recursive node insert: creating the first
//! root, splitting an overflowed root (the only way the tree grows taller),
//! enforcing the height limit, and routing replaced elements either back to
//! the caller or to the release hook.

use crate::compare::Comparator;
use crate::error::{BTreeError, ModifyResult};
use crate::release::Release;
use crate::tracing_helpers::{debug_log, warn_log};
use crate::types::{BTree, Node};

impl<T, C: Comparator<T>, R: Release<T>> BTree<T, C, R> {
    /// Insert an element, returning the equal element it replaced.
    ///
    /// # Panics
    ///
    /// Panics if the insertion would grow the tree past its height limit.
    /// Use [`try_insert`](Self::try_insert) to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let mut tree = BTree::new();
    /// assert_eq!(tree.insert(10), None);
    /// assert_eq!(tree.insert(10), Some(10));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, elem: T) -> Option<T> {
        match self.try_insert(elem) {
            Ok(previous) => previous,
            Err(err) => panic!("{}", err),
        }
    }

    /// Insert an element, handing any replaced element to the release hook.
    ///
    /// Returns true if an equal element was replaced.
    ///
    /// # Panics
    ///
    /// Panics if the insertion would grow the tree past its height limit.
    pub fn put(&mut self, elem: T) -> bool {
        match self.insert(elem) {
            Some(previous) => {
                self.release.release(previous);
                true
            }
            None => false,
        }
    }

    /// Insert an element unless doing so would exceed the height limit.
    ///
    /// On error the tree is left untouched.
    ///
    /// ```
    /// use overflow_btree::{BTree, BTreeConfig, BTreeError, NoRelease, OrdComparator};
    ///
    /// let config = BTreeConfig::default().with_factor(1).with_max_height(1);
    /// let mut tree = BTree::with_config(config, OrdComparator, NoRelease).unwrap();
    /// tree.try_insert(1).unwrap();
    /// tree.try_insert(2).unwrap();
    /// assert!(matches!(tree.try_insert(3), Err(BTreeError::HeightLimitExceeded(_))));
    /// assert_eq!(tree.try_insert(2), Ok(Some(2)));
    /// ```
    pub fn try_insert(&mut self, elem: T) -> ModifyResult<Option<T>> {
        if self.height >= self.max_height && self.insert_would_grow(&elem) {
            warn_log!(
                height = self.height,
                max_height = self.max_height,
                "insert rejected at height limit"
            );
            return Err(BTreeError::height_limit_exceeded(
                self.height,
                self.max_height,
            ));
        }
        Ok(self.insert_unchecked(elem))
    }

    fn insert_unchecked(&mut self, elem: T) -> Option<T> {
        let factor = self.factor;
        let (replaced, overflowed) = match self.root.as_deref_mut() {
            Some(root) => {
                let replaced = root.insert(elem, &self.cmp, factor);
                (replaced, root.len() > 2 * factor)
            }
            None => {
                self.root = Some(Box::new(Node::leaf_with(elem, factor)));
                self.height = 1;
                self.len = 1;
                debug_log!("created root leaf");
                return None;
            }
        };

        if overflowed {
            self.grow_root();
        }
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Split the overflowed root under a new single-element root.
    fn grow_root(&mut self) {
        let Some(old_root) = self.root.take() else {
            return;
        };
        let mut new_root = Node::new(self.factor);
        new_root.children.push(old_root);
        let promoted = new_root.split_child(0, self.factor);
        new_root.elems.push(promoted);
        self.root = Some(Box::new(new_root));
        self.height += 1;
        debug_log!(height = self.height, len = self.len, "root split");
    }

    /// Returns true if inserting `elem` would add a level.
    ///
    /// That happens exactly when `elem` is absent and every node on its
    /// search path is full, so the split cascades through the root.
    fn insert_would_grow(&self, elem: &T) -> bool {
        let max_keys = 2 * self.factor;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.len() < max_keys {
                return false;
            }
            match node.search(elem, &self.cmp) {
                Ok(_) => return false,
                Err(index) => current = node.children.get(index).map(Box::as_ref),
            }
        }
        true
    }
}

impl<T, C: Comparator<T>, R: Release<T>> Extend<T> for BTree<T, C, R> {
    /// Insert every element, releasing any it replaces.
    ///
    /// # Panics
    ///
    /// Panics if an insertion would grow the tree past its height limit.
    /// Elements inserted before that point stay in the tree.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.put(elem);
        }
    }
}

impl<T: Ord> FromIterator<T> for BTree<T> {
    /// Build a tree with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the elements would grow the tree past the default height
    /// limit.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use crate::{BTree, BTreeConfig, BTreeError, NoRelease, OrdComparator, ReleaseFn};
    use std::cell::RefCell;

    #[test]
    fn test_first_insert_creates_root_leaf() {
        let mut tree = BTree::new();
        assert_eq!(tree.insert(7), None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 1);
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.elems, vec![7]);
        assert!(root.is_leaf());
    }

    #[test]
    fn test_fifth_insert_splits_root() {
        let mut tree = BTree::new();
        for x in [10, 20, 5, 6] {
            tree.insert(x);
        }
        assert_eq!(tree.height(), 1);

        tree.insert(12);

        assert_eq!(tree.height(), 2);
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.elems, vec![10]);
        assert_eq!(root.children[0].elems, vec![5, 6]);
        assert_eq!(root.children[1].elems, vec![12, 20]);
    }

    #[test]
    fn test_scenario_structure() {
        let mut tree = BTree::new();
        for x in [10, 20, 5, 6, 12, 30, 7, 17] {
            assert_eq!(tree.insert(x), None);
        }
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.elems, vec![10]);
        assert_eq!(root.children[0].elems, vec![5, 6, 7]);
        assert_eq!(root.children[1].elems, vec![12, 17, 20, 30]);
        assert_eq!(tree.len(), 8);

        assert_eq!(tree.insert(10), Some(10));
        assert_eq!(tree.len(), 8);
    }

    #[test]
    fn test_replace_keeps_structure() {
        let mut tree = BTree::new();
        for x in 0..50 {
            tree.insert(x);
        }
        let before = tree.dump();
        for x in 0..50 {
            assert_eq!(tree.insert(x), Some(x));
        }
        assert_eq!(tree.dump(), before);
        assert_eq!(tree.len(), 50);
    }

    #[test]
    fn test_put_releases_replaced_element() {
        let released = RefCell::new(Vec::new());
        let by_key = crate::LessThan(|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        let hook = ReleaseFn(|e: (i32, char)| released.borrow_mut().push(e));
        let mut tree = BTree::with_config(BTreeConfig::default(), by_key, hook).unwrap();

        assert!(!tree.put((1, 'a')));
        assert!(tree.put((1, 'b')));
        assert_eq!(*released.borrow(), vec![(1, 'a')]);

        // `insert` hands the old value back instead.
        assert_eq!(tree.insert((1, 'c')), Some((1, 'b')));
        assert_eq!(released.borrow().len(), 1);
    }

    #[test]
    fn test_height_limit_rejects_growth_without_mutation() {
        let config = BTreeConfig::default().with_factor(1).with_max_height(2);
        let mut tree = BTree::with_config(config, OrdComparator, NoRelease).unwrap();

        let mut accepted = Vec::new();
        for x in 0..100 {
            match tree.try_insert(x) {
                Ok(None) => accepted.push(x),
                Ok(Some(_)) => unreachable!(),
                Err(err) => {
                    assert!(matches!(err, BTreeError::HeightLimitExceeded(_)));
                    break;
                }
            }
        }

        assert_eq!(tree.height(), 2);
        assert_eq!(tree.len(), accepted.len());
        assert!(tree.check_invariants());
        // Replacing never grows the tree, even when full.
        let last = *accepted.last().unwrap();
        assert_eq!(tree.try_insert(last), Ok(Some(last)));
    }

    #[test]
    #[should_panic(expected = "Height limit exceeded")]
    fn test_insert_panics_past_height_limit() {
        let config = BTreeConfig::default().with_factor(1).with_max_height(1);
        let mut tree = BTree::with_config(config, OrdComparator, NoRelease).unwrap();
        for x in 0..3 {
            tree.insert(x);
        }
    }

    #[test]
    #[should_panic(expected = "Height limit exceeded")]
    fn test_extend_panics_past_height_limit() {
        let config = BTreeConfig::default().with_factor(1).with_max_height(1);
        let mut tree = BTree::with_config(config, OrdComparator, NoRelease).unwrap();
        tree.extend(0..3);
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut tree: BTree<i32> = [3, 1, 2].into_iter().collect();
        tree.extend([5, 4, 3]);
        assert_eq!(tree.len(), 5);
        assert!(tree.check_invariants());
    }
}
