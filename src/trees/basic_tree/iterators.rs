use super::*;

/// In-order iterator over the positions of a [`BalanceableTree`], sentinels included.
///
/// Stack based, so it works on trees of any depth. A clone continues independently from
/// the same point. To start over, call [`BalanceableTree::inorder`] again.
pub struct Inorder<'a, K, V> {
    tree: &'a BalanceableTree<K, V>,
    // the ancestors whose left subtree is being visited
    stack: Vec<Position>,
    // the root of the next subtree to descend into
    next: Option<Position>,
}

impl<'a, K, V> Clone for Inorder<'a, K, V> {
    fn clone(&self) -> Self {
        Inorder {
            tree: self.tree,
            stack: self.stack.clone(),
            next: self.next,
        }
    }
}

impl<'a, K, V> Inorder<'a, K, V> {
    pub(super) fn new(tree: &'a BalanceableTree<K, V>, start: Option<Position>) -> Self {
        Inorder {
            tree,
            stack: vec![],
            next: start,
        }
    }
}

impl<'a, K, V> Iterator for Inorder<'a, K, V> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(p) = self.next {
            self.stack.push(p);
            self.next = self.tree.left(p);
        }
        let p = self.stack.pop()?;
        self.next = self.tree.right(p);
        Some(p)
    }
}

impl<'a, K, V> std::iter::FusedIterator for Inorder<'a, K, V> {}
