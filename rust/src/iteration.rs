//! In-order iteration for BTree.
//!
//! [`Iter`] walks the tree depth-first without recursion. Its state is an
//! explicit stack of frames, one per level, each holding a node and a cursor
//! into that node's child slots. The stack never grows deeper than the
//! tree's height limit.

use std::iter::FusedIterator;

use crate::release::Release;
use crate::types::{BTree, Node};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// One level of the traversal.
#[derive(Debug)]
struct Frame<'a, T> {
    node: &'a Node<T>,
    /// Next child slot to visit; also the next element once that child is done.
    cursor: usize,
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Frame<'_, T> {}

/// In-order iterator over the elements of a [`BTree`].
///
/// Created by [`BTree::iter`]. Once exhausted it keeps returning `None`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<Frame<'a, T>>,
    max_depth: usize,
    remaining: usize,
}

// ============================================================================
// BTREE ITERATOR METHODS
// ============================================================================

impl<T, C, R: Release<T>> BTree<T, C, R> {
    /// Returns an iterator over all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let tree: BTree<i32> = [3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.height, self.max_height, self.len)
    }
}

impl<'a, T, C, R: Release<T>> IntoIterator for &'a BTree<T, C, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, height: usize, max_depth: usize, len: usize) -> Self {
        // The stack holds at most one frame per level of the current tree.
        let mut stack = Vec::with_capacity(height.min(max_depth));
        if let Some(node) = root {
            stack.push(Frame { node, cursor: 0 });
        }
        Self {
            stack,
            max_depth,
            remaining: len,
        }
    }

    fn push(&mut self, node: &'a Node<T>) {
        assert!(
            self.stack.len() < self.max_depth,
            "iterator stack overflow: tree deeper than {} levels",
            self.max_depth
        );
        self.stack.push(Frame { node, cursor: 0 });
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Set after popping a frame: the child under the parent's cursor has
        // been fully visited and must not be entered again.
        let mut returned_from_child = false;
        loop {
            let top = self.stack.len().checked_sub(1)?;
            let Frame { node, cursor } = self.stack[top];

            if cursor > node.len() {
                // The root frame stays so repeated calls keep yielding None.
                if top == 0 {
                    return None;
                }
                self.stack.pop();
                returned_from_child = true;
            } else if !node.is_leaf() && !returned_from_child {
                self.push(&node.children[cursor]);
            } else if cursor < node.len() {
                self.stack[top].cursor += 1;
                self.remaining -= 1;
                return Some(&node.elems[cursor]);
            } else {
                // Past the last element: the next round pops this frame.
                self.stack[top].cursor += 1;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            max_depth: self.max_depth,
            remaining: self.remaining,
        }
    }
}
