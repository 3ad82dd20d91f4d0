// This is a private module, the types are re-exported from `basic_tree`.

use std::num::NonZeroU32;

/// A handle naming one node of a [`super::BalanceableTree`].
///
/// A position keeps naming the same node while the tree is rotated or restructured,
/// and becomes invalid once that node is removed. Its slot may then be reused by a
/// later node, so positions should not be held across removals.
///
/// `Option<Position>` has the same size as `Position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Position(NonZeroU32);

impl Position {
    pub(super) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    pub(super) fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Position::from_index()` - index {} is out of range", index);
        match NonZeroU32::new((index + 1) as u32) {
            Some(raw) => Position(raw),
            None => unreachable!("index + 1 is never zero"),
        }
    }

    #[inline]
    pub(super) fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Slot storage with a free list. Freed slots are handed out again by `alloc`.
#[derive(Clone)]
pub(super) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Position>,
}

impl<T> Arena<T> {
    pub(super) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live elements.
    pub(super) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(super) fn alloc(&mut self, element: T) -> Position {
        if let Some(pos) = self.free.pop() {
            self.slots[pos.to_index()] = Some(element);
            pos
        } else {
            assert!(
                self.slots.len() <= Position::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Position::MAX
            );
            self.slots.push(Some(element));
            Position::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(super) fn get(&self, pos: Position) -> &T {
        match self.slots.get(pos.to_index()) {
            Some(Some(element)) => element,
            _ => panic!("`Arena::get()` - {:?} does not name a live node", pos),
        }
    }

    #[inline]
    pub(super) fn get_mut(&mut self, pos: Position) -> &mut T {
        match self.slots.get_mut(pos.to_index()) {
            Some(Some(element)) => element,
            _ => panic!("`Arena::get_mut()` - {:?} does not name a live node", pos),
        }
    }

    /// Returns mutable references to two distinct elements.
    pub(super) fn get2_mut(&mut self, a: Position, b: Position) -> (&mut T, &mut T) {
        let (ia, ib) = (a.to_index(), b.to_index());
        assert_ne!(ia, ib, "`Arena::get2_mut()` - positions must differ");
        let (first, second) = if ia < ib {
            let (lo, hi) = self.slots.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        };
        match (first.as_mut(), second.as_mut()) {
            (Some(x), Some(y)) => (x, y),
            _ => panic!("`Arena::get2_mut()` - {:?} or {:?} does not name a live node", a, b),
        }
    }

    pub(super) fn take(&mut self, pos: Position) -> T {
        let element = match self.slots.get_mut(pos.to_index()).and_then(Option::take) {
            Some(element) => element,
            None => panic!("`Arena::take()` - {:?} does not name a live node", pos),
        };
        self.free.push(pos);
        element
    }

    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
