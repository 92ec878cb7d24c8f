use std::collections::BTreeSet;
use std::collections::HashMap;
use std::hash::Hash;

/// Back-reference index from a value to every heap slot holding it.
///
/// A value with no slots has no entry.
pub struct PositionIndex<T> {
    positions: HashMap<T, BTreeSet<usize>>,
}

impl<T: Hash + Eq + Clone> PositionIndex<T> {
    pub fn new() -> Self {
        Self { positions: HashMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { positions: HashMap::with_capacity(capacity) }
    }

    pub fn add(&mut self, value: &T, pos: usize) {
        match self.positions.get_mut(value) {
            Some(set) => {
                set.insert(pos);
            }
            None => {
                self.positions.insert(value.clone(), std::iter::once(pos).collect());
            }
        }
    }

    pub fn remove(&mut self, value: &T, pos: usize) {
        if let Some(set) = self.positions.get_mut(value) {
            set.remove(&pos);
            if set.is_empty() {
                self.positions.remove(value);
            }
        }
    }

    /// Highest slot holding `value`.
    pub fn last(&self, value: &T) -> Option<usize> {
        self.positions.get(value)?.iter().next_back().copied()
    }

    pub fn get(&self, value: &T) -> Option<&BTreeSet<usize>> {
        self.positions.get(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Records that `a` moves from `i` to `j` and `b` moves from `j` to `i`.
    pub fn swap(&mut self, a: &T, b: &T, i: usize, j: usize) {
        if a == b {
            return;
        }
        if let Some(set) = self.positions.get_mut(a) {
            set.remove(&i);
            set.insert(j);
        }
        if let Some(set) = self.positions.get_mut(b) {
            set.remove(&j);
            set.insert(i);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
