//! Unbalanced binary search tree holding distinct values.

mod node;
mod traverse;

use std::fmt;
use std::iter::FromIterator;

use self::node::Link;
pub use self::traverse::TraversalOrder;
pub use self::traverse::Traverse;
use crate::container::Stack;

pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path. Zero for an empty tree.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    pub fn min(&self) -> Option<&T> {
        node::min(&self.root)
    }

    pub fn max(&self) -> Option<&T> {
        node::max(&self.root)
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, T> {
        Traverse::new(self.root.as_deref(), self.len, order)
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Frees the nodes without recursion, degenerate trees can be deep.
    pub fn clear(&mut self) {
        let mut pending = Stack::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T: Ord> Tree<T> {
    /// Returns `false` if the value is already present.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }

        node::add(&mut self.root, value);
        self.len += 1;
        true
    }

    pub fn remove(&mut self, value: &T) -> bool {
        if !node::remove(&mut self.root, value) {
            return false;
        }

        self.len -= 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        node::contains(&self.root, value)
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| {
            self.add(x);
        });
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
