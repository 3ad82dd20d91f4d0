use super::*;
use crate::trees::Inorder;

/// Iterator over the entries of a [`TreeMap`] in key order.
/// Built on the in-order traversal of the tree, skipping sentinels.
pub struct Entries<'a, K, V> {
    tree: &'a BalanceableTree<K, V>,
    inorder: Inorder<'a, K, V>,
}

impl<'a, K, V> Clone for Entries<'a, K, V> {
    fn clone(&self) -> Self {
        Entries {
            tree: self.tree,
            inorder: self.inorder.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.inorder.find_map(|p| tree.entry(p))
    }
}

impl<'a, K, V> std::iter::FusedIterator for Entries<'a, K, V> {}

/// Iterator over the keys of a [`TreeMap`] in order.
pub struct Keys<'a, K, V>(Entries<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(key, _)| key)
    }
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys(self.0.clone())
    }
}

impl<'a, K, V> std::iter::FusedIterator for Keys<'a, K, V> {}

/// Iterator over the values of a [`TreeMap`] in key order.
pub struct Values<'a, K, V>(Entries<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|(_, value)| value)
    }
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self {
        Values(self.0.clone())
    }
}

impl<'a, K, V> std::iter::FusedIterator for Values<'a, K, V> {}

impl<K, V, B, C> TreeMap<K, V, B, C> {
    /// All entries, in key order. Lazy, and can be restarted by calling it again.
    pub fn entry_set(&self) -> Entries<'_, K, V> {
        Entries {
            tree: &self.tree,
            inorder: self.tree.inorder(),
        }
    }

    /// Same as [`TreeMap::entry_set`].
    pub fn iter(&self) -> Entries<'_, K, V> {
        self.entry_set()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.entry_set())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.entry_set())
    }
}

impl<'a, K, V, B, C> IntoIterator for &'a TreeMap<K, V, B, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entry_set()
    }
}

enum Step {
    // look at the subtree rooted here
    Visit(Position),
    // the node is known to be in range
    Emit(Position),
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    C: Comparator<K>,
{
    /// All entries with `from <= key < to`, in key order. Empty if `from >= to`.
    ///
    /// Subtrees that lie entirely outside the range are never visited: a node below `from`
    /// only leads to its right subtree, and a node at or above `to` only to its left.
    pub fn sub_map(&self, from: &K, to: &K) -> Result<Vec<(&K, &V)>> {
        let mut buffer = vec![];
        if self.compare(from, to)? != Ordering::Less {
            return Ok(buffer);
        }
        // an explicit stack instead of recursion, since unbalanced trees may be deep
        let mut stack: Vec<Step> = self.tree.root().map(Step::Visit).into_iter().collect();
        while let Some(step) = stack.pop() {
            let p = match step {
                Step::Emit(p) => {
                    buffer.extend(self.tree.entry(p));
                    continue;
                }
                Step::Visit(p) => p,
            };
            let key = match self.tree.key(p) {
                Some(key) => key,
                None => continue,
            };
            if self.compare(key, from)? == Ordering::Less {
                stack.push(Step::Visit(self.child(p, false)));
            } else {
                if self.compare(key, to)? == Ordering::Less {
                    stack.push(Step::Visit(self.child(p, false)));
                    stack.push(Step::Emit(p));
                }
                stack.push(Step::Visit(self.child(p, true)));
            }
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeMap<i32, i32> {
        let mut map = TreeMap::new();
        for k in [50, 20, 80, 10, 30, 70, 90, 60, 40] {
            map.put(k, -k).unwrap();
        }
        map
    }

    fn sub_keys(map: &TreeMap<i32, i32>, from: i32, to: i32) -> Vec<i32> {
        map.sub_map(&from, &to)
            .unwrap()
            .into_iter()
            .map(|(k, _)| *k)
            .collect()
    }

    #[test]
    fn entries_are_sorted() {
        let map = sample();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values[0], -10);
        assert_eq!((&map).into_iter().count(), 9);
    }

    #[test]
    fn entry_set_restarts() {
        let map = sample();
        let mut entries = map.entry_set();
        entries.next();
        entries.next();
        assert_eq!(entries.count(), 7);
        assert_eq!(map.entry_set().count(), 9);
    }

    #[test]
    fn keys_and_values_clone_and_fuse() {
        fn fused<I: std::iter::FusedIterator>(iter: I) -> I {
            iter
        }
        let map = sample();
        let mut keys = fused(map.keys());
        keys.next();
        let rest = keys.clone();
        assert_eq!(keys.count(), 8);
        assert_eq!(rest.copied().collect::<Vec<_>>()[0], 20);

        let mut values = fused(map.values());
        assert_eq!(values.clone().last(), Some(&-90));
        values.by_ref().for_each(drop);
        assert_eq!(values.next(), None);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn sub_map_bounds() {
        let map = sample();
        assert_eq!(sub_keys(&map, 20, 60), vec![20, 30, 40, 50]);
        assert_eq!(sub_keys(&map, 21, 61), vec![30, 40, 50, 60]);
        assert_eq!(sub_keys(&map, 0, 100), map.keys().copied().collect::<Vec<_>>());
        assert_eq!(sub_keys(&map, 40, 40), Vec::<i32>::new());
        assert_eq!(sub_keys(&map, 60, 20), Vec::<i32>::new());
        assert_eq!(sub_keys(&map, 91, 200), Vec::<i32>::new());
    }

    #[test]
    fn sub_map_on_a_deep_tree() {
        let mut map: TreeMap<u32, ()> = TreeMap::new();
        for k in 0..5000 {
            map.put(k, ()).unwrap();
        }
        assert_eq!(map.height(), 5000);
        let range = map.sub_map(&100, &4000).unwrap();
        assert_eq!(range.len(), 3900);
        assert_eq!(*range[0].0, 100);
    }
}
