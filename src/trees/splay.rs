//! Implementation of splay trees.
//!
//! A splay tree keeps no bookkeeping at all. Instead, every node that is inserted or
//! accessed is moved to the root by a sequence of splay steps, and after a deletion the
//! parent of the removed node is. Frequently accessed keys stay near the root, and every
//! operation takes `O(log n)` amortized time.

use super::*;

/// The splay balancing algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplayBalancer;

// about the amortized computational complexity of using splay steps:
// the amortized cost of any splay step, except the zig step near the root, is at most
// 3 * (log(new_node.size) - log(old_node.size)),
// and therefore a whole splay costs at most 3 * log(n) + 1 amortized.

/// If `p` is the root, do nothing.
/// Otherwise, do one splay step upwards.
fn splay_step<K, V>(tree: &mut BalanceableTree<K, V>, p: Position) {
    let parent = match tree.parent(p) {
        None => return, // already the root
        Some(parent) => parent,
    };
    if tree.is_root(parent) {
        // zig
        tree.rotate(p);
    } else if tree.is_left_child(p) == tree.is_left_child(parent) {
        // zig-zig
        tree.rotate(parent);
        tree.rotate(p);
    } else {
        // zig-zag
        tree.rotate(p);
        tree.rotate(p);
    }
}

/// Splays `p` to the root of the tree.
pub fn splay<K, V>(tree: &mut BalanceableTree<K, V>, p: Position) {
    let mut steps = 0;
    while !tree.is_root(p) {
        splay_step(tree, p);
        steps += 1;
    }
    log::debug!("splayed {:?} to the root in {} steps", p, steps);
}

impl Balancer for SplayBalancer {
    fn after_insert<K, V>(&mut self, tree: &mut BalanceableTree<K, V>, p: Position) {
        splay(tree, p);
    }

    fn after_delete<K, V>(&mut self, tree: &mut BalanceableTree<K, V>, p: Position) {
        if let Some(parent) = tree.parent(p) {
            splay(tree, parent);
        }
    }

    /// A search that ended at a sentinel splays the last internal node it passed.
    fn after_access<K, V>(
        &mut self,
        tree: &mut BalanceableTree<K, V>,
        p: Position,
        _access: Access,
    ) {
        let target = if tree.is_external(p) { tree.parent(p) } else { Some(p) };
        if let Some(target) = target {
            splay(tree, target);
        }
    }
}
