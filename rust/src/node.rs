//! Node-level operations for BTree.
//!
//! Binary search within a node, the split primitive, and the recursive
//! insertion that lets a child overflow by one element before splitting it
//! on the way back up.

use crate::compare::Comparator;
use crate::release::Release;
use crate::tracing_helpers::trace_log;
use crate::types::Node;

impl<T> Node<T> {
    // ============================================================================
    // CONSTRUCTION
    // ============================================================================

    /// Creates an empty node sized for `factor`, overflow slot included.
    pub(crate) fn new(factor: usize) -> Self {
        Self {
            elems: Vec::with_capacity(2 * factor + 1),
            children: Vec::with_capacity(2 * factor + 2),
        }
    }

    /// Creates a leaf holding a single element.
    pub(crate) fn leaf_with(elem: T, factor: usize) -> Self {
        let mut node = Self::new(factor);
        node.elems.push(elem);
        node
    }

    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Number of elements in this node.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.elems.len()
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    // ============================================================================
    // SEARCH
    // ============================================================================

    /// Binary searches this node for `elem`.
    ///
    /// Returns `Ok(index)` of the matching element, or `Err(position)` where
    /// `position` is both the insertion point and the index of the child to
    /// descend into.
    ///
    /// Never called on an empty node: every node reachable from a non-empty
    /// tree holds at least one element.
    pub(crate) fn search<C: Comparator<T>>(&self, elem: &T, cmp: &C) -> Result<usize, usize> {
        debug_assert!(!self.elems.is_empty(), "search on an empty node");
        self.elems.binary_search_by(|probe| cmp.compare(probe, elem))
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Inserts `elem` into the subtree rooted at this node.
    ///
    /// Returns the element it replaced, if an equal one was stored. On
    /// return this node may hold `2 * factor + 1` elements; the caller splits
    /// it.
    pub(crate) fn insert<C: Comparator<T>>(&mut self, elem: T, cmp: &C, factor: usize) -> Option<T> {
        let index = match self.search(&elem, cmp) {
            Ok(index) => return Some(std::mem::replace(&mut self.elems[index], elem)),
            Err(index) => index,
        };

        let elem = if self.is_leaf() {
            elem
        } else {
            let replaced = self.children[index].insert(elem, cmp, factor);
            if self.children[index].len() <= 2 * factor {
                return replaced;
            }
            // A child only overflows on a fresh insert, so `replaced` is None
            // here and the promoted element takes the new element's place.
            self.split_child(index, factor)
        };

        self.elems.insert(index, elem);
        None
    }

    /// Splits the overflowed child at `index`, returning its median.
    ///
    /// The child keeps its lower `factor` elements; a new right sibling takes
    /// the upper `factor` elements (and `factor + 1` children, if internal)
    /// and is linked into `children` at `index + 1`. `elems` is left alone:
    /// the caller places the promoted element.
    pub(crate) fn split_child(&mut self, index: usize, factor: usize) -> T {
        let child = &mut self.children[index];
        assert_eq!(
            child.len(),
            2 * factor + 1,
            "split of a child that has not overflowed"
        );

        let mut sibling = Node::new(factor);
        sibling.elems.extend(child.elems.drain(factor + 1..));
        if !child.is_leaf() {
            sibling.children.extend(child.children.drain(factor + 1..));
        }
        let promoted = child.elems.remove(factor);

        trace_log!(index, factor, "split child");
        self.children.insert(index + 1, Box::new(sibling));
        promoted
    }

    // ============================================================================
    // TEARDOWN
    // ============================================================================

    /// Consumes the subtree, handing every element to `hook`.
    pub(crate) fn release_all<R: Release<T>>(self: Box<Self>, hook: &mut R) {
        let Node { elems, children } = *self;
        let mut children = children.into_iter();
        for elem in elems {
            hook.release(elem);
            if let Some(child) = children.next() {
                child.release_all(hook);
            }
        }
        for child in children {
            child.release_all(hook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::OrdComparator;
    use crate::release::ReleaseFn;

    fn leaf(elems: &[i32], factor: usize) -> Node<i32> {
        let mut node = Node::new(factor);
        node.elems.extend_from_slice(elems);
        node
    }

    #[test]
    fn test_search_found_and_missing() {
        let node = leaf(&[10, 20, 30], 2);
        assert_eq!(node.search(&20, &OrdComparator), Ok(1));
        assert_eq!(node.search(&5, &OrdComparator), Err(0));
        assert_eq!(node.search(&25, &OrdComparator), Err(2));
        assert_eq!(node.search(&35, &OrdComparator), Err(3));
    }

    #[test]
    fn test_leaf_insert_may_overflow_by_one() {
        let mut node = leaf(&[1, 2, 4, 5], 2);
        assert_eq!(node.insert(3, &OrdComparator, 2), None);
        assert_eq!(node.elems, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_leaf_insert_replaces_equal() {
        let mut node = leaf(&[1, 2, 3], 2);
        assert_eq!(node.insert(2, &OrdComparator, 2), Some(2));
        assert_eq!(node.elems, vec![1, 2, 3]);
    }

    #[test]
    fn test_split_leaf_child() {
        let mut parent = Node::new(2);
        parent.children.push(Box::new(leaf(&[1, 2, 3, 4, 5], 2)));

        let promoted = parent.split_child(0, 2);

        assert_eq!(promoted, 3);
        assert!(parent.elems.is_empty());
        assert_eq!(parent.children.len(), 2);
        assert_eq!(parent.children[0].elems, vec![1, 2]);
        assert_eq!(parent.children[1].elems, vec![4, 5]);
        assert!(parent.children[1].is_leaf());
    }

    #[test]
    fn test_split_internal_child_moves_upper_children() {
        let factor = 1;
        let mut child = leaf(&[10, 20, 30], factor);
        for x in [5, 15, 25, 35] {
            child.children.push(Box::new(leaf(&[x], factor)));
        }
        let mut parent = Node::new(factor);
        parent.elems.push(40);
        parent.children.push(Box::new(child));
        parent.children.push(Box::new(leaf(&[50], factor)));

        let promoted = parent.split_child(0, factor);

        assert_eq!(promoted, 20);
        assert_eq!(parent.children.len(), 3);
        let left = &parent.children[0];
        let right = &parent.children[1];
        assert_eq!(left.elems, vec![10]);
        assert_eq!(right.elems, vec![30]);
        assert_eq!(left.children.len(), 2);
        assert_eq!(right.children.len(), 2);
        assert_eq!(right.children[0].elems, vec![25]);
        assert_eq!(right.children[1].elems, vec![35]);
        assert_eq!(parent.children[2].elems, vec![50]);
    }

    #[test]
    #[should_panic(expected = "split of a child that has not overflowed")]
    fn test_split_requires_overflow() {
        let mut parent = Node::new(2);
        parent.children.push(Box::new(leaf(&[1, 2, 3], 2)));
        parent.split_child(0, 2);
    }

    #[test]
    fn test_internal_insert_splits_overflowed_child() {
        let mut root = leaf(&[10], 2);
        root.children.push(Box::new(leaf(&[1, 2, 3, 4], 2)));
        root.children.push(Box::new(leaf(&[11, 12], 2)));

        assert_eq!(root.insert(5, &OrdComparator, 2), None);

        assert_eq!(root.elems, vec![3, 10]);
        assert_eq!(root.children[0].elems, vec![1, 2]);
        assert_eq!(root.children[1].elems, vec![4, 5]);
        assert_eq!(root.children[2].elems, vec![11, 12]);
    }

    #[test]
    fn test_release_all_visits_every_element() {
        let mut root = leaf(&[10], 2);
        root.children.push(Box::new(leaf(&[1, 2], 2)));
        root.children.push(Box::new(leaf(&[11, 12], 2)));

        let mut seen = Vec::new();
        Box::new(root).release_all(&mut ReleaseFn(|e| seen.push(e)));
        seen.sort();
        assert_eq!(seen, vec![1, 2, 10, 11, 12]);
    }
}
