//! The sorted map.
//!
//! [`TreeMap`] implements a sorted map on top of a [`BalanceableTree`]. Every search is a
//! plain binary search that ends either at the internal node holding the key or at the
//! sentinel leaf where the key would be inserted. After the structure changes, or after a
//! search, the map calls the matching hook of its [`Balancer`], so that the same search,
//! insertion and deletion code serves every balancing algorithm.

mod iterators;
mod navigation;

pub use iterators::{Entries, Keys, Values};

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{MapError, Result};
use crate::trees::{Access, BalanceableTree, Balancer, Position, Unbalanced};
use std::cmp::Ordering;
use std::fmt;

pub(crate) const PROPER_TREE: &str = "invariant violated: internal nodes have two children";

/// A sorted map over a binary search tree with a pluggable balancing algorithm.
///
/// `B` is the balancing algorithm and `C` the key order. The map always holds at least
/// one node: the empty map is a single sentinel leaf.
///
/// `get` takes `&mut self`, since some balancing algorithms reshape the tree on access.
///```
/// use arbor::TreapMap;
///
/// let mut map = TreapMap::new();
/// map.put(20, "B").unwrap();
/// map.put(10, "A").unwrap();
/// assert_eq!(map.put(20, "b").unwrap(), Some("B"));
/// assert_eq!(map.get(&20).unwrap(), Some(&"b"));
/// assert_eq!(map.first_entry(), Some((&10, &"A")));
/// assert!(map.check_heap());
///```
pub struct TreeMap<K, V, B = Unbalanced, C = NaturalOrder> {
    pub(crate) tree: BalanceableTree<K, V>,
    pub(crate) balancer: B,
    comparator: C,
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    B: Default,
    C: Default,
{
    /// Creates an empty map with the default balancer and comparator.
    pub fn new() -> Self {
        TreeMap::with_parts(B::default(), C::default())
    }
}

impl<K, V, B, C> Default for TreeMap<K, V, B, C>
where
    B: Default,
    C: Default,
{
    fn default() -> Self {
        TreeMap::new()
    }
}

impl<K, V, B: Default, C> TreeMap<K, V, B, C> {
    /// Creates an empty map ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        TreeMap::with_parts(B::default(), comparator)
    }
}

impl<K, V, B, C: Default> TreeMap<K, V, B, C> {
    /// Creates an empty map balanced by `balancer`.
    pub fn with_balancer(balancer: B) -> Self {
        TreeMap::with_parts(balancer, C::default())
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C> {
    pub fn with_parts(balancer: B, comparator: C) -> Self {
        let mut tree = BalanceableTree::new();
        tree.add_root(None);
        TreeMap {
            tree,
            balancer,
            comparator,
        }
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.entry_count()
    }

    /// Same as [`TreeMap::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries. The balancer keeps its state.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.tree.add_root(None);
    }

    /// The height of the tree, counting internal nodes. Takes `O(n)` time.
    pub fn height(&self) -> usize {
        self.tree.root().map_or(0, |root| self.tree.height(root))
    }

    /// Read only access to the underlying tree.
    pub fn tree(&self) -> &BalanceableTree<K, V> {
        &self.tree
    }

    pub fn balancer(&self) -> &B {
        &self.balancer
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn child(&self, p: Position, left: bool) -> Position {
        let child = if left { self.tree.left(p) } else { self.tree.right(p) };
        child.expect(PROPER_TREE)
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    C: Comparator<K>,
{
    pub(crate) fn compare(&self, a: &K, b: &K) -> Result<Ordering> {
        self.comparator.compare(a, b).ok_or_else(|| {
            log::debug!("comparator rejected a key");
            MapError::Incomparable
        })
    }

    /// Binary search in the subtree of `p`. Returns the internal node holding `key`,
    /// or the sentinel where `key` would be inserted.
    pub(crate) fn tree_search(&self, mut p: Position, key: &K) -> Result<Position> {
        while let Some(k) = self.tree.key(p) {
            p = match self.compare(key, k)? {
                Ordering::Equal => return Ok(p),
                Ordering::Less => self.child(p, true),
                Ordering::Greater => self.child(p, false),
            };
        }
        Ok(p)
    }

    /// Searches from the root. `None` only if the tree has no nodes at all.
    pub(crate) fn search(&self, key: &K) -> Result<Option<Position>> {
        match self.tree.root() {
            Some(root) => self.tree_search(root, key).map(Some),
            None => Ok(None),
        }
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    B: Balancer,
    C: Comparator<K>,
{
    /// Returns the value stored under `key`.
    ///
    /// The balancer's access hook runs on the position the search reached, whether the key
    /// was found or not.
    pub fn get(&mut self, key: &K) -> Result<Option<&V>> {
        let p = match self.search(key)? {
            Some(p) => p,
            None => return Ok(None),
        };
        let access = if self.tree.is_internal(p) {
            Access::Hit
        } else {
            Access::Miss
        };
        self.balancer.after_access(&mut self.tree, p, access);
        // rotations keep `p` naming the same node
        Ok(self.tree.entry(p).map(|(_, value)| value))
    }

    pub fn contains_key(&mut self, key: &K) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Associates `value` with `key`, and returns the value previously stored under `key`.
    ///
    /// A new key expands the sentinel the search ended at into an internal node, and then
    /// runs the insertion hook. An existing key keeps its node and its key; only the value
    /// is replaced, and the access hook runs with [`Access::Overwrite`].
    ///
    /// If the key cannot be compared, the map is left unchanged.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        let root = match self.tree.root() {
            Some(root) => root,
            None => self.tree.add_root(None).expect("a tree without a root accepts one"),
        };
        let p = self.tree_search(root, &key)?;
        if self.tree.is_external(p) {
            self.tree.expand_external(p, (key, value));
            self.balancer.after_insert(&mut self.tree, p);
            Ok(None)
        } else {
            let old = self
                .tree
                .value_mut(p)
                .map(|slot| std::mem::replace(slot, value));
            self.balancer.after_access(&mut self.tree, p, Access::Overwrite);
            Ok(old)
        }
    }

    /// Removes `key` from the map, and returns its value.
    ///
    /// A node with two internal children is not unlinked directly: its entry is exchanged
    /// with the entry of its in-order successor, and the successor's node is unlinked
    /// instead. The unlinked node always has a sentinel child, which is removed with it,
    /// and the other child takes its place. The deletion hook then runs on that child.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>> {
        let p = match self.search(key)? {
            Some(p) => p,
            None => return Ok(None),
        };
        if self.tree.is_external(p) {
            self.balancer.after_access(&mut self.tree, p, Access::Miss);
            return Ok(None);
        }

        let mut doomed = p;
        let right = self.child(p, false);
        if self.tree.is_internal(self.child(p, true)) && self.tree.is_internal(right) {
            let successor = self.tree.subtree_min(right);
            self.tree.swap_entries(p, successor);
            doomed = successor;
        }

        let left = self.child(doomed, true);
        let leaf = if self.tree.is_external(left) {
            left
        } else {
            self.child(doomed, false)
        };
        let promoted = self.tree.sibling(leaf).expect(PROPER_TREE);
        self.tree.remove(leaf);
        let (_, value) = self
            .tree
            .remove(doomed)
            .expect("invariant violated: the unlinked node holds the removed entry");
        self.balancer.after_delete(&mut self.tree, promoted);
        Ok(Some(value))
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    C: Comparator<K>,
{
    /// Checks that the tree is proper, that its links are consistent, and that the keys are
    /// in strictly increasing order. Panics otherwise.
    pub fn assert_correctness(&self) {
        self.tree.assert_structure();
        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(previous) = previous {
                assert_eq!(
                    self.comparator.compare(previous, key),
                    Some(Ordering::Less),
                    "keys out of order"
                );
            }
            previous = Some(key);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, B, C> TreeMap<K, V, B, C> {
    /// A structural dump of the tree. See [`BalanceableTree::dump`].
    pub fn dump(&self) -> String {
        self.tree.dump()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, B, C> fmt::Debug for TreeMap<K, V, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, B, C> fmt::Display for TreeMap<K, V, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
