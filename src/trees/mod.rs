//! This module contains the tree substrate and the balancing algorithms built on it.
//!
//! The [`basic_tree`] module implements the [`BalanceableTree`], a proper binary tree
//! with sentinel leaves. A balancing algorithm is a value implementing [`Balancer`]: the
//! sorted map calls its hooks after every insertion, deletion and access, and the balancer
//! rotates the tree to restore its own invariant. Each hook does nothing by default.
//!
//! The provided algorithms are:
//! * [`Unbalanced`]: a plain binary search tree.
//! * [`treap::TreapBalancer`]: randomized, max-heap ordered priorities.
//! * [`avl::AvlBalancer`]: height balanced.
//! * [`splay::SplayBalancer`]: self adjusting, moves touched nodes to the root.

pub mod avl;
pub mod basic_tree;
pub mod splay;
pub mod treap;

pub use basic_tree::{Aux, BalanceableTree, Inorder, Position};

/// Why [`Balancer::after_access`] was called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// A search found the key.
    Hit,
    /// A search ended at a sentinel leaf.
    Miss,
    /// `put` replaced the value of an existing key.
    Overwrite,
}

/// The rebalancing hooks of a sorted map.
///
/// A balancer may keep its own bookkeeping in the [`Aux`] slot of every internal node,
/// and may change the shape of the tree only through [`BalanceableTree::rotate`] and
/// [`BalanceableTree::restructure`], which preserve the key order.
pub trait Balancer {
    /// Called after the sentinel at `p` became an internal node with two sentinel children.
    fn after_insert<K, V>(&mut self, _tree: &mut BalanceableTree<K, V>, _p: Position) {}

    /// Called after a node was spliced out of the tree. `p` is the node that took its place.
    fn after_delete<K, V>(&mut self, _tree: &mut BalanceableTree<K, V>, _p: Position) {}

    /// Called after a search reached `p`, which may be a sentinel.
    fn after_access<K, V>(
        &mut self,
        _tree: &mut BalanceableTree<K, V>,
        _p: Position,
        _access: Access,
    ) {
    }
}

/// A plain binary search tree. All hooks are no-ops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balancer for Unbalanced {}
