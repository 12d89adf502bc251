//! Shared helpers for integration tests.

#![allow(dead_code)]

use overflow_btree::{BTree, BTreeConfig, NoRelease, OrdComparator};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Tree ordered by `Ord` with the given factor and the default height limit.
pub fn tree_with_factor<T: Ord>(factor: usize) -> BTree<T> {
    BTree::with_config(
        BTreeConfig::default().with_factor(factor),
        OrdComparator,
        NoRelease,
    )
    .unwrap()
}

/// `0..n` in a reproducible shuffled order.
pub fn shuffled(n: u32, seed: u64) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

/// Assert the tree is structurally valid, panicking with its dump if not.
pub fn assert_valid<T: Ord + std::fmt::Debug>(tree: &BTree<T>) {
    if let Err(err) = tree.validate() {
        panic!("{}\n{}", err, tree.dump());
    }
}
