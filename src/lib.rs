//! Sorted maps over binary search trees with pluggable balancing.
//!
//! The crate is built in layers:
//! * [`trees::BalanceableTree`]: a proper binary tree stored in an arena, with sentinel
//!   leaves, rotations and trinode restructuring.
//! * [`trees::Balancer`]: the hooks a balancing algorithm implements. The crate provides
//!   [`Unbalanced`], [`TreapBalancer`], [`AvlBalancer`] and [`SplayBalancer`].
//! * [`TreeMap`]: the sorted map, generic over the balancer and over a [`Comparator`].
//!
//! ```
//! use arbor::{AvlMap, MapError};
//!
//! let mut map = AvlMap::new();
//! for k in 0..100 {
//!     map.put(k, k * k)?;
//! }
//! assert_eq!(map.get(&7)?, Some(&49));
//! assert_eq!(map.ceiling_entry(&-3)?, Some((&0, &0)));
//! assert!(map.height() <= 9);
//! # Ok::<(), MapError>(())
//! ```

pub mod comparator;
pub mod error;
pub mod map;
pub mod trees;

pub use comparator::{Comparator, FnOrder, NaturalOrder, PartialOrder};
pub use error::{MapError, Result};
pub use map::TreeMap;
pub use trees::avl::AvlBalancer;
pub use trees::splay::SplayBalancer;
pub use trees::treap::{TreapBalancer, TreapConfig};
pub use trees::{Access, Aux, BalanceableTree, Balancer, Position, Unbalanced};

/// A map over a plain binary search tree.
pub type BstMap<K, V> = TreeMap<K, V, Unbalanced>;
/// A map over a treap.
pub type TreapMap<K, V> = TreeMap<K, V, TreapBalancer>;
/// A map over an AVL tree.
pub type AvlMap<K, V> = TreeMap<K, V, AvlBalancer>;
/// A map over a splay tree.
pub type SplayMap<K, V> = TreeMap<K, V, SplayBalancer>;
