//! Implementation of AVL trees.
//! Balanced by keeping track of node heights, this is a worst-case balancing
//! algorithm that has a small memory overhead per node.
//!
//! The height of every internal node is stored in its [`Aux`] slot. Sentinels have
//! height `0`, which is also what [`BalanceableTree::aux`] reads for them.
//! The heights of the two children of any node differ by at most `1`.

use super::*;
use crate::map::TreeMap;

/// The AVL balancing algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvlBalancer;

fn height<K, V>(tree: &BalanceableTree<K, V>, p: Option<Position>) -> Aux {
    p.map_or(0, |p| tree.aux(p))
}

/// Returns `right.height() - left.height()`
fn height_diff<K, V>(tree: &BalanceableTree<K, V>, p: Position) -> Aux {
    height(tree, tree.right(p)) - height(tree, tree.left(p))
}

fn expected_height<K, V>(tree: &BalanceableTree<K, V>, p: Position) -> Aux {
    1 + std::cmp::max(height(tree, tree.left(p)), height(tree, tree.right(p)))
}

fn recompute_height<K, V>(tree: &mut BalanceableTree<K, V>, p: Position) {
    tree.set_aux(p, expected_height(tree, p));
}

/// The child of `p` with the greater height. On a tie, the child on the same side
/// as `p` itself, which makes the following restructure a single rotation.
fn taller_child<K, V>(tree: &BalanceableTree<K, V>, p: Position) -> Position {
    let (left, right) = match (tree.left(p), tree.right(p)) {
        (Some(left), Some(right)) => (left, right),
        _ => panic!("`taller_child()` - {:?} is not an internal node", p),
    };
    match tree.aux(left).cmp(&tree.aux(right)) {
        std::cmp::Ordering::Greater => left,
        std::cmp::Ordering::Less => right,
        std::cmp::Ordering::Equal => {
            if tree.is_root(p) || tree.is_left_child(p) {
                left
            } else {
                right
            }
        }
    }
}

/// Fixes heights and balance from `p` up, stopping once a height no longer changes.
fn rebalance<K, V>(tree: &mut BalanceableTree<K, V>, mut p: Position) {
    loop {
        let old_height = tree.aux(p);
        if height_diff(tree, p).abs() > 1 {
            let grandchild = taller_child(tree, taller_child(tree, p));
            p = tree.restructure(grandchild);
            log::debug!("avl: restructured around {:?}", p);
            for child in tree.left(p).into_iter().chain(tree.right(p)) {
                recompute_height(tree, child);
            }
        }
        recompute_height(tree, p);
        let new_height = tree.aux(p);
        match tree.parent(p) {
            Some(parent) if old_height != new_height => p = parent,
            _ => break,
        }
    }
}

impl AvlBalancer {
    /// Checks that every stored height is correct and every node is balanced.
    /// Every violation found is logged.
    pub fn check_balance<K, V>(&self, tree: &BalanceableTree<K, V>) -> bool {
        let mut ok = true;
        for p in tree.inorder().filter(|&p| tree.is_internal(p)) {
            let expected = expected_height(tree, p);
            if tree.aux(p) != expected {
                log::warn!("avl: {:?} stores height {}, expected {}", p, tree.aux(p), expected);
                ok = false;
            }
            let diff = height_diff(tree, p);
            if diff.abs() > 1 {
                log::warn!("avl: {:?} is unbalanced, height difference {}", p, diff);
                ok = false;
            }
        }
        ok
    }
}

impl Balancer for AvlBalancer {
    fn after_insert<K, V>(&mut self, tree: &mut BalanceableTree<K, V>, p: Position) {
        rebalance(tree, p);
    }

    fn after_delete<K, V>(&mut self, tree: &mut BalanceableTree<K, V>, p: Position) {
        if let Some(parent) = tree.parent(p) {
            rebalance(tree, parent);
        }
    }
}

impl<K, V, C> TreeMap<K, V, AvlBalancer, C> {
    /// Checks the heights and the balance of every node. See [`AvlBalancer::check_balance`].
    pub fn check_balance(&self) -> bool {
        self.balancer.check_balance(&self.tree)
    }
}
