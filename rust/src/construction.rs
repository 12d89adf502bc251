//! Construction and configuration for BTree.
//!
//! A tree is configured with a branching factor and a height limit. Both are
//! validated once, here; the algorithms rely on them afterwards.

use crate::compare::{Comparator, OrdComparator};
use crate::error::{BTreeError, BTreeResult, InitResult};
use crate::release::{NoRelease, Release};
use crate::types::{BTree, DEFAULT_FACTOR, DEFAULT_MAX_HEIGHT, MIN_FACTOR};

/// Tuning parameters for a tree.
///
/// # Examples
///
/// ```
/// use overflow_btree::{BTree, BTreeConfig, NoRelease, OrdComparator};
///
/// let config = BTreeConfig::default().with_factor(8).with_max_height(16);
/// let tree: BTree<u64> = BTree::with_config(config, OrdComparator, NoRelease).unwrap();
/// assert_eq!(tree.factor(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BTreeConfig {
    /// Nodes hold between `factor` and `2 * factor` elements.
    pub factor: usize,
    /// Largest height the tree may grow to; also the iterator stack bound.
    pub max_height: usize,
}

impl BTreeConfig {
    pub fn with_factor(mut self, factor: usize) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Check that the configuration can describe a tree.
    pub fn validate(&self) -> BTreeResult<()> {
        if self.factor < MIN_FACTOR {
            return Err(BTreeError::invalid_factor(self.factor, MIN_FACTOR));
        }
        if self.max_height == 0 {
            return Err(BTreeError::invalid_height_limit(self.max_height));
        }
        Ok(())
    }
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl<T: Ord> BTree<T> {
    /// Create an empty tree ordered by `Ord`, with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// let tree = BTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        Self::from_parts(BTreeConfig::default(), OrdComparator, NoRelease)
    }

    /// Create an empty tree ordered by `Ord` with the given branching factor.
    ///
    /// Returns an error if `factor` is below [`MIN_FACTOR`](crate::MIN_FACTOR).
    ///
    /// ```
    /// use overflow_btree::BTree;
    ///
    /// assert!(BTree::<i32>::with_factor(4).is_ok());
    /// assert!(BTree::<i32>::with_factor(0).is_err());
    /// ```
    pub fn with_factor(factor: usize) -> InitResult<Self> {
        Self::with_config(
            BTreeConfig::default().with_factor(factor),
            OrdComparator,
            NoRelease,
        )
    }
}

impl<T, C: Comparator<T>> BTree<T, C> {
    /// Create an empty tree ordered by `cmp`.
    ///
    /// ```
    /// use overflow_btree::{BTree, LessThan};
    ///
    /// let mut tree = BTree::with_comparator(2, LessThan(|a: &i32, b: &i32| a > b)).unwrap();
    /// tree.extend([1, 3, 2]);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(factor: usize, cmp: C) -> InitResult<Self> {
        Self::with_config(BTreeConfig::default().with_factor(factor), cmp, NoRelease)
    }
}

impl<T, C: Comparator<T>, R: Release<T>> BTree<T, C, R> {
    /// Create an empty tree from a full configuration.
    ///
    /// `release` receives every element the tree discards: overwritten
    /// values passed to [`put`](Self::put), and everything still stored on
    /// [`clear`](Self::clear) or drop.
    pub fn with_config(config: BTreeConfig, cmp: C, release: R) -> InitResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, cmp, release))
    }
}

impl<T, C, R: Release<T>> BTree<T, C, R> {
    fn from_parts(config: BTreeConfig, cmp: C, release: R) -> Self {
        Self {
            root: None,
            len: 0,
            height: 0,
            factor: config.factor,
            max_height: config.max_height,
            cmp,
            release,
        }
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> BTreeConfig {
        BTreeConfig {
            factor: self.factor,
            max_height: self.max_height,
        }
    }
}

impl<T: Ord> Default for BTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
