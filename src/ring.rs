// SPDX: CC0-1.0

use crate::Number;
use core::ops::Range;

/// Bounded history that overwrites its oldest element once full.
///
/// Elements are only ever observed oldest first; the physical layout stays
/// private. Storage grows with the elements pushed, not with the capacity.
#[derive(Clone, Debug)]
pub struct Ring<T> {
    slots: Vec<T>,
    capacity: usize,
    // index of the oldest element once full
    head: usize,
}

impl<T: Copy> Ring<T> {
    /// A capacity of 0 is bumped to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity: capacity.max(1),
            head: 0,
        }
    }

    pub fn push(&mut self, val: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(val);
        } else {
            self.slots[self.head] = val;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Held elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer).copied()
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl Ring<Number> {
    /// Smallest and largest held value, or `None` when empty.
    pub fn bounds(&self) -> Option<Range<Number>> {
        self.iter().fold(None, |acc, val| {
            Some(match acc {
                Some(Range { start, end }) => start.min(val)..end.max(val),
                None => val..val,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_fill_keeps_write_order() {
        let mut ring = Ring::new(4);
        assert_eq!(ring.snapshot(), Vec::<i32>::new());

        ring.push(1);
        ring.push(2);
        assert_eq!(ring.snapshot(), [1, 2]);
    }

    #[test]
    fn overwrites_oldest() {
        let mut ring = Ring::new(3);
        for i in 1..=7 {
            ring.push(i);
        }
        assert_eq!(ring.snapshot(), [5, 6, 7]);
    }

    #[test]
    fn exactly_full() {
        let mut ring = Ring::new(3);
        for i in 1..=3 {
            ring.push(i);
        }
        assert_eq!(ring.snapshot(), [1, 2, 3]);
        ring.push(4);
        assert_eq!(ring.snapshot(), [2, 3, 4]);
    }

    #[test]
    fn zero_capacity_becomes_one() {
        let mut ring = Ring::new(0);
        ring.push('a');
        assert_eq!(ring.snapshot(), ['a']);
        ring.push('b');
        assert_eq!(ring.snapshot(), ['b']);
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut ring = Ring::new(usize::MAX);
        for i in 1..=5 {
            ring.push(i);
        }
        assert_eq!(ring.snapshot(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn bounds_follow_window() {
        let mut ring = Ring::new(3);
        assert_eq!(ring.bounds(), None);
        for val in [10.0, 20.0, 30.0, 40.0, 50.0] {
            ring.push(val);
        }
        assert_eq!(ring.bounds(), Some(30.0..50.0));

        ring.push(-1.0);
        assert_eq!(ring.bounds(), Some(-1.0..50.0));
    }
}
