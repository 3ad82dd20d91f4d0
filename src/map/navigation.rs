// Ordered queries of `TreeMap`. These take `O(height)` time and never run balancer hooks.

use super::*;

impl<K, V, B, C> TreeMap<K, V, B, C> {
    /// The entry with the least key.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let root = self.tree.root().filter(|&root| self.tree.is_internal(root))?;
        self.tree.entry(self.tree.subtree_min(root))
    }

    /// The entry with the greatest key.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let root = self.tree.root().filter(|&root| self.tree.is_internal(root))?;
        self.tree.entry(self.tree.subtree_max(root))
    }

    /// Walks up from `p` and returns the first ancestor whose left subtree contains `p`,
    /// i.e. the nearest entry after everything in `p`'s subtree.
    fn next_above(&self, mut p: Position) -> Option<(&K, &V)> {
        while let Some(parent) = self.tree.parent(p) {
            if self.tree.left(parent) == Some(p) {
                return self.tree.entry(parent);
            }
            p = parent;
        }
        None
    }

    /// Walks up from `p` and returns the first ancestor whose right subtree contains `p`,
    /// i.e. the nearest entry before everything in `p`'s subtree.
    fn previous_above(&self, mut p: Position) -> Option<(&K, &V)> {
        while let Some(parent) = self.tree.parent(p) {
            if self.tree.right(parent) == Some(p) {
                return self.tree.entry(parent);
            }
            p = parent;
        }
        None
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    C: Comparator<K>,
{
    /// The entry with the least key greater than or equal to `key`.
    pub fn ceiling_entry(&self, key: &K) -> Result<Option<(&K, &V)>> {
        let p = match self.search(key)? {
            Some(p) => p,
            None => return Ok(None),
        };
        if self.tree.is_internal(p) {
            return Ok(self.tree.entry(p));
        }
        Ok(self.next_above(p))
    }

    /// The entry with the greatest key less than or equal to `key`.
    pub fn floor_entry(&self, key: &K) -> Result<Option<(&K, &V)>> {
        let p = match self.search(key)? {
            Some(p) => p,
            None => return Ok(None),
        };
        if self.tree.is_internal(p) {
            return Ok(self.tree.entry(p));
        }
        Ok(self.previous_above(p))
    }

    /// The entry with the greatest key strictly less than `key`.
    /// `key` itself does not have to be in the map.
    pub fn lower_entry(&self, key: &K) -> Result<Option<(&K, &V)>> {
        let p = match self.search(key)? {
            Some(p) => p,
            None => return Ok(None),
        };
        if self.tree.is_internal(p) {
            let left = self.child(p, true);
            if self.tree.is_internal(left) {
                return Ok(self.tree.entry(self.tree.subtree_max(left)));
            }
        }
        Ok(self.previous_above(p))
    }

    /// The entry with the least key strictly greater than `key`.
    /// `key` itself does not have to be in the map.
    pub fn higher_entry(&self, key: &K) -> Result<Option<(&K, &V)>> {
        let p = match self.search(key)? {
            Some(p) => p,
            None => return Ok(None),
        };
        if self.tree.is_internal(p) {
            let right = self.child(p, false);
            if self.tree.is_internal(right) {
                return Ok(self.tree.entry(self.tree.subtree_min(right)));
            }
        }
        Ok(self.next_above(p))
    }
}
