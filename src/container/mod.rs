pub mod bst;
pub mod hash;
pub mod heap;

use std::fmt;
use std::iter::FromIterator;

use crate::list::Iter;
use crate::list::List;

/// FIFO queue over the linked list.
pub struct Queue<T> {
    inner: List<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { inner: List::new() }
    }

    pub fn offer(&mut self, v: T) {
        self.inner.push_back(v);
    }

    pub fn poll(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.inner).finish()
    }
}

/// LIFO stack over the linked list.
pub struct Stack<T> {
    inner: List<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { inner: List::new() }
    }

    pub fn push(&mut self, v: T) {
        self.inner.push_back(v);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.back()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_fifo() {
        let mut queue = Queue::new();
        (0..10).for_each(|i| queue.offer(i));
        assert_eq!(queue.len(), 10);
        assert_eq!(queue.peek(), Some(&0));
        let polled: Vec<_> = std::iter::from_fn(|| queue.poll()).collect();
        assert_eq!(polled, (0..10).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_empty() {
        let mut queue: Queue<u8> = Queue::default();
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.poll(), None);
        queue.offer(1);
        assert_eq!(queue.poll(), Some(1));
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn queue_interleaved() {
        let mut queue: Queue<&str> = vec!["a", "b"].into_iter().collect();
        assert_eq!(queue.poll(), Some("a"));
        queue.offer("c");
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(format!("{:?}", queue), r#"Queue(["b", "c"])"#);
    }

    #[test]
    fn stack_lifo() {
        let mut stack = Stack::new();
        (0..10).for_each(|i| stack.push(i));
        assert_eq!(stack.len(), 10);
        assert_eq!(stack.peek(), Some(&9));
        let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(popped, (0..10).rev().collect::<Vec<_>>());
        assert!(stack.is_empty());
    }

    #[test]
    fn stack_empty() {
        let mut stack: Stack<u8> = Stack::default();
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn stack_iter_bottom_to_top() {
        let stack: Stack<u8> = (1..4).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(format!("{:?}", stack), "Stack([1, 2, 3])");
    }
}
