// This is a private module, so no documentation for it directly.
// instead look for documentation of `BalanceableTree::rotate` and `BalanceableTree::restructure`.

use super::*;

impl<K, V> BalanceableTree<K, V> {
    /// Makes `child` the left or right child of `parent`, fixing both links.
    fn relink(&mut self, parent: Position, child: Position, make_left: bool) {
        self.node_mut(child).parent = Some(parent);
        let parent_node = self.node_mut(parent);
        if make_left {
            parent_node.left = Some(child);
        } else {
            parent_node.right = Some(child);
        }
    }

    /// Rotates `p` above its parent.
    ///
    /// The parent becomes a child of `p`, and the inner subtree of `p` moves over to the
    /// parent. The in-order sequence of the nodes does not change. Takes `O(1)` time.
    ///
    /// Panics if `p` is the root.
    pub fn rotate(&mut self, p: Position) {
        let x = p;
        let y = match self.parent(x) {
            Some(y) => y,
            None => panic!("`rotate()` - cannot rotate the root {:?}", x),
        };
        log::trace!("rotating {:?} above {:?}", x, y);
        match self.parent(y) {
            None => {
                self.root = Some(x);
                self.node_mut(x).parent = None;
            }
            Some(z) => {
                let y_was_left = self.left(z) == Some(y);
                self.relink(z, x, y_was_left);
            }
        }
        if self.left(y) == Some(x) {
            // x's right subtree becomes y's left subtree
            match self.right(x) {
                Some(inner) => self.relink(y, inner, true),
                None => self.node_mut(y).left = None,
            }
            self.relink(x, y, false);
        } else {
            match self.left(x) {
                Some(inner) => self.relink(y, inner, false),
                None => self.node_mut(y).right = None,
            }
            self.relink(x, y, true);
        }
    }

    /// Trinode restructuring of `x`, its parent and its grandparent.
    ///
    /// Of the three nodes, the one whose key is in the middle ends up on top with the
    /// other two as its children. In the zig-zig shape this is a single rotation of the
    /// parent, in the zig-zag shape a double rotation of `x`.
    /// Returns the position that ended up on top.
    ///
    /// Panics if `x` has no grandparent.
    pub fn restructure(&mut self, x: Position) -> Position {
        let y = self.parent(x);
        let z = y.and_then(|y| self.parent(y));
        let (y, _z) = match (y, z) {
            (Some(y), Some(z)) => (y, z),
            _ => panic!("`restructure()` - {:?} has no grandparent", x),
        };
        let zig_zig = self.is_left_child(x) == self.is_left_child(y);
        if zig_zig {
            log::trace!("restructure {:?}: single rotation of {:?}", x, y);
            self.rotate(y);
            y
        } else {
            log::trace!("restructure {:?}: double rotation", x);
            self.rotate(x);
            self.rotate(x);
            x
        }
    }
}
