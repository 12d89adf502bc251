//! In-memory ordered B-tree.
//!
//! This crate provides [`BTree`], a sorted container supporting
//! insert-with-replace, exact lookup, and in-order traversal. It is generic
//! over the element type, the comparison rule, and a hook that receives
//! discarded elements; the branching factor is fixed when the tree is built.
//!
//! Insertion lets a node overflow by one element and splits it on the way
//! back up the recursion, so nodes are only restructured when they actually
//! overflow. Iteration uses an explicit stack bounded by the tree's height
//! limit rather than recursion.
//!
//! ```
//! use overflow_btree::BTree;
//!
//! let mut tree = BTree::with_factor(2).unwrap();
//! for x in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.lookup(&6), Some(&6));
//! assert!(tree.iter().copied().eq([5, 6, 7, 10, 12, 17, 20, 30]));
//! ```
//!
//! Removal is not supported.

mod compare;
mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod release;
mod tracing_helpers;
mod tree_structure;
mod types;
mod validation;

pub use compare::{Comparator, FnComparator, LessThan, OrdComparator, ReverseComparator};
pub use construction::BTreeConfig;
pub use error::{BTreeError, BTreeResult, InitResult, ModifyResult};
pub use iteration::Iter;
pub use release::{NoRelease, Release, ReleaseFn};
pub use types::{BTree, NodeView, Probe, DEFAULT_FACTOR, DEFAULT_MAX_HEIGHT, MIN_FACTOR};
