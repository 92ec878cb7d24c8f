//! Indexed binary min-heap.
//!
//! Besides the heap array the queue keeps a [`PositionIndex`] from every value
//! to the slots it occupies. The index makes `contains` O(1) and lets `remove`
//! find an arbitrary element without scanning, duplicates included. Each swap
//! of two slots goes through [`PriorityQueue::swap`], which updates the index
//! before the elements move.

mod index;

use std::collections::btree_set;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::slice;

use self::index::PositionIndex;
use crate::error::Error;
use crate::utils::vector;

fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

pub struct PriorityQueue<T> {
    heap: Vec<T>,
    index: PositionIndex<T>,
}

impl<T: Ord + Hash + Clone> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { heap: Vec::new(), index: PositionIndex::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: Vec::with_capacity(capacity), index: PositionIndex::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of slots allocated for the heap. Never shrinks on its own.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Drops every element. The allocation is kept.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn poll(&mut self) -> Option<T> {
        self.remove_at(0).ok()
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.index.contains(elem)
    }

    pub fn add(&mut self, elem: T) {
        let pos = self.heap.len();
        self.index.add(&elem, pos);
        self.heap.push(elem);
        self.swim(pos);
        debug_assert!(self.is_min_heap(0));
    }

    /// Removes one occurrence of `elem`, the one sitting in the highest slot.
    pub fn remove(&mut self, elem: &T) -> bool {
        match self.index.last(elem) {
            Some(pos) => self.remove_at(pos).is_ok(),
            None => false,
        }
    }

    /// Removes the element in slot `i`.
    ///
    /// The last element takes its place and is moved down, or up when it
    /// cannot go down. A single swap leaves at most one of the two directions
    /// violated.
    pub fn remove_at(&mut self, i: usize) -> Result<T, Error> {
        let len = self.heap.len();
        if i >= len {
            return Err(Error::IndexOutOfBounds { index: i, len });
        }

        let last = len - 1;
        self.swap(i, last);
        let removed = self.heap.pop().ok_or(Error::IndexOutOfBounds { index: i, len })?;
        self.index.remove(&removed, last);

        if i != last && self.sink(i) == i {
            self.swim(i);
        }

        debug_assert!(self.is_min_heap(0));
        Ok(removed)
    }

    /// Checks the heap property of the subtree rooted at `k`.
    pub fn is_min_heap(&self, k: usize) -> bool {
        vector::is_heap(&self.heap, k, &less)
    }

    /// Slots currently holding `elem`, ascending.
    pub fn positions(&self, elem: &T) -> Option<btree_set::Iter<'_, usize>> {
        self.index.get(elem).map(|set| set.iter())
    }

    /// Elements in heap order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }

    fn swim(&mut self, k: usize) -> usize {
        let index = &mut self.index;
        vector::swim(&mut self.heap, k, less, |data, i, j| swap(index, data, i, j))
    }

    fn sink(&mut self, k: usize) -> usize {
        let index = &mut self.index;
        vector::sink(&mut self.heap, k, less, |data, i, j| swap(index, data, i, j))
    }

    fn swap(&mut self, i: usize, j: usize) {
        swap(&mut self.index, &mut self.heap, i, j);
    }
}

fn swap<T: Hash + Eq + Clone>(index: &mut PositionIndex<T>, data: &mut [T], i: usize, j: usize) {
    if i == j {
        return;
    }
    index.swap(&data[i], &data[j], i, j);
    data.swap(i, j);
}

impl<T: Ord + Hash + Clone> From<Vec<T>> for PriorityQueue<T> {
    /// Heapifies `elems` in place.
    fn from(elems: Vec<T>) -> Self {
        let mut index = PositionIndex::with_capacity(elems.len());
        elems.iter().enumerate().for_each(|(pos, elem)| index.add(elem, pos));

        let mut queue = Self { heap: elems, index };
        for k in (0..queue.len() / 2).rev() {
            queue.sink(k);
        }

        debug_assert!(queue.is_min_heap(0));
        queue
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord + Hash + Clone> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}
