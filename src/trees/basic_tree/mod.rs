//! The balanceable binary tree.
//!
//! This module implements a proper binary tree stored in an arena: every node is either
//! *internal*, holding a key-value entry and exactly two children, or *external*, a sentinel
//! leaf holding nothing. Balancing algorithms are built on top of it through the
//! [`Balancer`](crate::trees::Balancer) hooks, using [`BalanceableTree::rotate`] and
//! [`BalanceableTree::restructure`] to change the shape of the tree.
//!
//! Every node also carries an auxiliary integer, the [`Aux`] slot, whose meaning is
//! up to the balancing algorithm (a priority, a height, ...).

// these modules are private since they are merely separate files
// for some of the functions of this module
mod arena;
mod iterators;
mod rotations;

pub use arena::Position;
pub use iterators::Inorder;

use arena::Arena;
use std::fmt;

/// The type of the per-node metadata owned by the balancing algorithm.
pub type Aux = i64;

/// The content of a node. External nodes are sentinel leaves marking an empty
/// insertion point.
pub(crate) enum NodeKind<K, V> {
    Internal { key: K, value: V, aux: Aux },
    External,
}

pub(crate) struct Node<K, V> {
    kind: NodeKind<K, V>,
    parent: Option<Position>,
    left: Option<Position>,
    right: Option<Position>,
}

impl<K, V> Node<K, V> {
    fn new(entry: Option<(K, V)>, parent: Option<Position>) -> Self {
        let kind = match entry {
            Some((key, value)) => NodeKind::Internal { key, value, aux: 0 },
            None => NodeKind::External,
        };
        Node {
            kind,
            parent,
            left: None,
            right: None,
        }
    }
}

/// A proper binary tree whose nodes are addressed by [`Position`]s.
///
/// The tree itself knows nothing about key order. Rotations and restructures only permute
/// links, so they keep the in-order sequence of the nodes no matter what the nodes hold.
///
/// Precondition violations (adding a child into an occupied slot, removing a node with two
/// children, rotating the root, using a removed position) are bugs in the caller, and panic.
pub struct BalanceableTree<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<Position>,
}

impl<K, V> Default for BalanceableTree<K, V> {
    fn default() -> Self {
        BalanceableTree::new()
    }
}

impl<K, V> BalanceableTree<K, V> {
    /// Creates a tree with no nodes at all, not even a sentinel.
    pub const fn new() -> Self {
        BalanceableTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// The total number of nodes, internal and external.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    /// Note: a tree holding a single sentinel is not empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of internal nodes, assuming the tree is proper.
    pub fn entry_count(&self) -> usize {
        self.len().saturating_sub(1) / 2
    }

    pub fn root(&self) -> Option<Position> {
        self.root
    }

    /// Removes all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Creates the root node: a sentinel if `entry` is `None`, an internal node otherwise.
    /// Returns `None` if the tree already has a root.
    pub fn add_root(&mut self, entry: Option<(K, V)>) -> Option<Position> {
        if self.root.is_some() {
            return None;
        }
        let pos = self.nodes.alloc(Node::new(entry, None));
        self.root = Some(pos);
        Some(pos)
    }

    pub(crate) fn node(&self, p: Position) -> &Node<K, V> {
        self.nodes.get(p)
    }

    fn node_mut(&mut self, p: Position) -> &mut Node<K, V> {
        self.nodes.get_mut(p)
    }

    pub fn is_internal(&self, p: Position) -> bool {
        matches!(self.node(p).kind, NodeKind::Internal { .. })
    }

    pub fn is_external(&self, p: Position) -> bool {
        matches!(self.node(p).kind, NodeKind::External)
    }

    pub fn is_root(&self, p: Position) -> bool {
        self.root == Some(p)
    }

    pub fn parent(&self, p: Position) -> Option<Position> {
        self.node(p).parent
    }

    pub fn left(&self, p: Position) -> Option<Position> {
        self.node(p).left
    }

    pub fn right(&self, p: Position) -> Option<Position> {
        self.node(p).right
    }

    /// Returns the other child of `p`'s parent. `None` at the root.
    pub fn sibling(&self, p: Position) -> Option<Position> {
        let parent = self.parent(p)?;
        if self.left(parent) == Some(p) {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }

    /// Returns `true` if `p` is the left child of its parent.
    /// Returns `false` for right children and for the root.
    pub fn is_left_child(&self, p: Position) -> bool {
        match self.parent(p) {
            Some(parent) => self.left(parent) == Some(p),
            None => false,
        }
    }

    pub fn entry(&self, p: Position) -> Option<(&K, &V)> {
        match &self.node(p).kind {
            NodeKind::Internal { key, value, .. } => Some((key, value)),
            NodeKind::External => None,
        }
    }

    pub fn key(&self, p: Position) -> Option<&K> {
        self.entry(p).map(|(key, _)| key)
    }

    pub fn value_mut(&mut self, p: Position) -> Option<&mut V> {
        match &mut self.node_mut(p).kind {
            NodeKind::Internal { value, .. } => Some(value),
            NodeKind::External => None,
        }
    }

    /// Stores `entry` at `p` and returns the previous entry.
    ///
    /// On a sentinel this makes `p` an internal node with aux `0`; no children are added,
    /// that is up to the caller. On an internal node the aux is kept.
    pub fn set(&mut self, p: Position, entry: (K, V)) -> Option<(K, V)> {
        let node = self.node_mut(p);
        let (key, value) = entry;
        let aux = match node.kind {
            NodeKind::Internal { aux, .. } => aux,
            NodeKind::External => 0,
        };
        match std::mem::replace(&mut node.kind, NodeKind::Internal { key, value, aux }) {
            NodeKind::Internal { key, value, .. } => Some((key, value)),
            NodeKind::External => None,
        }
    }

    /// Exchanges the entries of two internal nodes. The aux of each node stays in place.
    pub fn swap_entries(&mut self, a: Position, b: Position) {
        if a == b {
            return;
        }
        let (na, nb) = self.nodes.get2_mut(a, b);
        match (&mut na.kind, &mut nb.kind) {
            (
                NodeKind::Internal { key: ka, value: va, .. },
                NodeKind::Internal { key: kb, value: vb, .. },
            ) => {
                std::mem::swap(ka, kb);
                std::mem::swap(va, vb);
            }
            _ => panic!("`swap_entries()` - both positions must be internal nodes"),
        }
    }

    /// The aux slot of `p`. Sentinels always read `0`.
    pub fn aux(&self, p: Position) -> Aux {
        match self.node(p).kind {
            NodeKind::Internal { aux, .. } => aux,
            NodeKind::External => 0,
        }
    }

    pub fn set_aux(&mut self, p: Position, new_aux: Aux) {
        match &mut self.node_mut(p).kind {
            NodeKind::Internal { aux, .. } => *aux = new_aux,
            NodeKind::External => panic!("`set_aux()` - sentinel leaves carry no metadata"),
        }
    }

    /// Attaches a new left child to `p`. Panics if `p` already has one.
    pub fn add_left(&mut self, p: Position, entry: Option<(K, V)>) -> Position {
        assert!(self.left(p).is_none(), "`add_left()` - {:?} already has a left child", p);
        let child = self.nodes.alloc(Node::new(entry, Some(p)));
        self.node_mut(p).left = Some(child);
        child
    }

    /// Attaches a new right child to `p`. Panics if `p` already has one.
    pub fn add_right(&mut self, p: Position, entry: Option<(K, V)>) -> Position {
        assert!(self.right(p).is_none(), "`add_right()` - {:?} already has a right child", p);
        let child = self.nodes.alloc(Node::new(entry, Some(p)));
        self.node_mut(p).right = Some(child);
        child
    }

    /// Turns the sentinel `p` into an internal node holding `entry`, with two fresh sentinels
    /// as children.
    pub fn expand_external(&mut self, p: Position, entry: (K, V)) {
        assert!(self.is_external(p), "`expand_external()` - {:?} is not a sentinel", p);
        self.set(p, entry);
        self.add_left(p, None);
        self.add_right(p, None);
    }

    /// Removes `p` and returns its entry. The single child of `p`, if any, takes its place.
    /// Panics if `p` has two children.
    pub fn remove(&mut self, p: Position) -> Option<(K, V)> {
        let (left, right) = (self.left(p), self.right(p));
        let child = match (left, right) {
            (Some(_), Some(_)) => panic!("`remove()` - {:?} has two children", p),
            (Some(c), None) | (None, Some(c)) => Some(c),
            (None, None) => None,
        };
        let parent = self.parent(p);
        if let Some(c) = child {
            self.node_mut(c).parent = parent;
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(p) {
                    parent_node.left = child;
                } else {
                    parent_node.right = child;
                }
            }
        }
        match self.nodes.take(p).kind {
            NodeKind::Internal { key, value, .. } => Some((key, value)),
            NodeKind::External => None,
        }
    }

    /// Returns the leftmost internal node of the subtree rooted at the internal node `p`.
    pub fn subtree_min(&self, mut p: Position) -> Position {
        while let Some(left) = self.left(p).filter(|&l| self.is_internal(l)) {
            p = left;
        }
        p
    }

    /// Returns the rightmost internal node of the subtree rooted at the internal node `p`.
    pub fn subtree_max(&self, mut p: Position) -> Position {
        while let Some(right) = self.right(p).filter(|&r| self.is_internal(r)) {
            p = right;
        }
        p
    }

    /// The height of the subtree rooted at `p`, counting internal nodes only.
    /// A sentinel has height `0`. Takes `O(size of subtree)` time.
    pub fn height(&self, p: Position) -> usize {
        // iterative, since unbalanced trees may be arbitrarily deep
        let mut max = 0;
        let mut stack = vec![(p, 0)];
        while let Some((q, depth)) = stack.pop() {
            if self.is_internal(q) {
                let depth = depth + 1;
                max = std::cmp::max(max, depth);
                stack.extend(self.left(q).map(|l| (l, depth)));
                stack.extend(self.right(q).map(|r| (r, depth)));
            }
        }
        max
    }

    /// Returns an iterator over all positions, internal and external, in in-order.
    pub fn inorder(&self) -> Inorder<'_, K, V> {
        Inorder::new(self, self.root)
    }

    /// Iterates over the positions of the subtree rooted at `p`, in in-order.
    pub fn inorder_from(&self, p: Position) -> Inorder<'_, K, V> {
        Inorder::new(self, Some(p))
    }

    /// Checks that the links are consistent and that the tree is proper.
    /// Panics otherwise.
    pub fn assert_structure(&self) {
        let root = match self.root {
            None => {
                assert_eq!(self.len(), 0, "a tree without a root has no nodes");
                return;
            }
            Some(root) => root,
        };
        assert!(self.parent(root).is_none(), "the root has a parent");
        let mut count = 0;
        let mut stack = vec![root];
        while let Some(p) = stack.pop() {
            count += 1;
            match (self.left(p), self.right(p)) {
                (Some(l), Some(r)) => {
                    assert!(self.is_internal(p), "{:?} is a sentinel with children", p);
                    assert_eq!(self.parent(l), Some(p), "broken parent link at {:?}", l);
                    assert_eq!(self.parent(r), Some(p), "broken parent link at {:?}", r);
                    stack.push(l);
                    stack.push(r);
                }
                (None, None) => {
                    // only the root of a tree under construction may be an internal leaf
                    assert!(
                        self.is_external(p) || self.is_root(p),
                        "{:?} is an internal node without children",
                        p
                    );
                }
                _ => panic!("{:?} has exactly one child", p),
            }
        }
        assert_eq!(count, self.len(), "unreachable nodes in the arena");
    }
}

impl<K: fmt::Debug, V: fmt::Debug> BalanceableTree<K, V> {
    /// A structural dump of the tree, one node per line, indented by depth.
    /// Sentinels are shown as `·`, internal nodes as `key => value [aux]`.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for BalanceableTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(Position, usize)> = self.root.into_iter().map(|r| (r, 0)).collect();
        // pre-order, left before right
        while let Some((p, depth)) = stack.pop() {
            write!(f, "{:width$}", "", width = 2 * depth)?;
            match &self.node(p).kind {
                NodeKind::Internal { key, value, aux } => {
                    writeln!(f, "{:?} => {:?} [{}]", key, value, aux)?
                }
                NodeKind::External => writeln!(f, "·")?,
            }
            stack.extend(self.right(p).map(|r| (r, depth + 1)));
            stack.extend(self.left(p).map(|l| (l, depth + 1)));
        }
        Ok(())
    }
}
