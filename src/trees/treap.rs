//! Implementation of treaps
//!
//! A treap is a binary search tree in which every node also carries a random priority,
//! and the priorities are kept in max-heap order: no node has a child with a greater
//! priority. The shape of the tree is then the shape of a random binary search tree,
//! independently of the order of insertions.
//!
//! Its operations take `O(log n)` expected time, probabilistically.
//! Each operation may take up to linear time, but the probability of any operation
//! taking more than `O(log n)` time is extremely low.
//!
//! The priority of a node is stored in its [`Aux`] slot.

use super::*;
use crate::map::TreeMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration of a [`TreapBalancer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreapConfig {
    /// Seeds the priority generator, making the shape of the treap reproducible.
    /// If `None`, the generator is seeded from the operating system.
    pub seed: Option<u64>,
    /// If set, overwriting the value of an existing key draws a new priority for its node,
    /// and the node is moved to the place the new priority calls for.
    pub reprioritize_on_update: bool,
}

impl Default for TreapConfig {
    fn default() -> Self {
        TreapConfig {
            seed: None,
            reprioritize_on_update: true,
        }
    }
}

/// The treap balancing algorithm. `R` is the source of priorities.
#[derive(Clone, Debug)]
pub struct TreapBalancer<R = StdRng> {
    rng: R,
    reprioritize_on_update: bool,
}

impl TreapBalancer<StdRng> {
    pub fn new(config: TreapConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        TreapBalancer::with_rng(rng, config)
    }

    /// A treap whose priorities are drawn from a generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        TreapBalancer::new(TreapConfig {
            seed: Some(seed),
            ..TreapConfig::default()
        })
    }
}

impl Default for TreapBalancer<StdRng> {
    fn default() -> Self {
        TreapBalancer::new(TreapConfig::default())
    }
}

impl<R> TreapBalancer<R> {
    /// Uses `rng` for priorities. The `seed` of `config` is ignored.
    pub fn with_rng(rng: R, config: TreapConfig) -> Self {
        TreapBalancer {
            rng,
            reprioritize_on_update: config.reprioritize_on_update,
        }
    }

    /// Checks that no internal node has an internal child of greater priority.
    /// Every violation found is logged.
    pub fn check_heap<K, V>(&self, tree: &BalanceableTree<K, V>) -> bool {
        let mut ok = true;
        for p in tree.inorder().filter(|&p| tree.is_internal(p)) {
            let children = tree.left(p).into_iter().chain(tree.right(p));
            for child in children.filter(|&c| tree.is_internal(c)) {
                if tree.aux(child) > tree.aux(p) {
                    log::warn!(
                        "heap order violated at {:?}: child {:?} has priority {} > {}",
                        p,
                        child,
                        tree.aux(child),
                        tree.aux(p)
                    );
                    ok = false;
                }
            }
        }
        ok
    }
}

/// Rotates `p` up while its parent has a smaller priority.
/// Returns the number of rotations.
fn sift_up<K, V>(tree: &mut BalanceableTree<K, V>, p: Position) -> usize {
    let mut rotations = 0;
    while let Some(parent) = tree.parent(p) {
        if tree.aux(parent) >= tree.aux(p) {
            break;
        }
        tree.rotate(p);
        rotations += 1;
    }
    rotations
}

/// Rotates the higher priority child of `p` above it, while that child outranks `p`.
/// Returns the number of rotations.
fn sift_down<K, V>(tree: &mut BalanceableTree<K, V>, p: Position) -> usize {
    let mut rotations = 0;
    loop {
        let children = tree.left(p).into_iter().chain(tree.right(p));
        let top = children
            .filter(|&c| tree.is_internal(c))
            .max_by_key(|&c| tree.aux(c));
        match top {
            Some(child) if tree.aux(child) > tree.aux(p) => {
                tree.rotate(child);
                rotations += 1;
            }
            _ => break,
        }
    }
    rotations
}

impl<R: Rng> Balancer for TreapBalancer<R> {
    fn after_insert<K, V>(&mut self, tree: &mut BalanceableTree<K, V>, p: Position) {
        let priority: Aux = self.rng.gen();
        tree.set_aux(p, priority);
        let rotations = sift_up(tree, p);
        log::debug!("treap insert: priority {} rose {} levels", priority, rotations);
    }

    /// Deletion swaps entries but leaves priorities on their nodes, and unlinking a node
    /// whose other child is a sentinel keeps the heap order. This pass lifts the promoted
    /// node for as long as it outranks its parent.
    fn after_delete<K, V>(&mut self, tree: &mut BalanceableTree<K, V>, p: Position) {
        if tree.is_internal(p) {
            let rotations = sift_up(tree, p);
            if rotations > 0 {
                log::debug!("treap delete: promoted node rose {} levels", rotations);
            }
        }
    }

    fn after_access<K, V>(
        &mut self,
        tree: &mut BalanceableTree<K, V>,
        p: Position,
        access: Access,
    ) {
        if access != Access::Overwrite || !self.reprioritize_on_update {
            return;
        }
        let priority: Aux = self.rng.gen();
        tree.set_aux(p, priority);
        let up = sift_up(tree, p);
        let down = sift_down(tree, p);
        log::debug!(
            "treap update: new priority {}, rose {} and sank {} levels",
            priority,
            up,
            down
        );
    }
}

impl<K, V, R, C> TreeMap<K, V, TreapBalancer<R>, C> {
    /// Checks that the priorities are in max-heap order. See [`TreapBalancer::check_heap`].
    pub fn check_heap(&self) -> bool {
        self.balancer.check_heap(&self.tree)
    }
}
