use super::node::Node;
use crate::container::Queue;
use crate::container::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
    LevelOrder,
}

enum State<'a, T> {
    Pre(Stack<&'a Node<T>>),
    In {
        stack: Stack<&'a Node<T>>,
        current: Option<&'a Node<T>>,
    },
    // The flag marks a node whose children are already scheduled.
    Post(Stack<(&'a Node<T>, bool)>),
    Level(Queue<&'a Node<T>>),
}

/// Lazy walk over a tree. The tree stays borrowed until the walk is dropped,
/// so it cannot change underneath.
pub struct Traverse<'a, T> {
    state: State<'a, T>,
    remaining: usize,
}

impl<'a, T> Traverse<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>, len: usize, order: TraversalOrder) -> Self {
        let state = match order {
            TraversalOrder::PreOrder => State::Pre(root.into_iter().collect()),
            TraversalOrder::InOrder => State::In { stack: Stack::new(), current: root },
            TraversalOrder::PostOrder => State::Post(root.map(|x| (x, false)).into_iter().collect()),
            TraversalOrder::LevelOrder => State::Level(root.into_iter().collect()),
        };

        Self { state, remaining: len }
    }

    fn step(&mut self) -> Option<&'a Node<T>> {
        match &mut self.state {
            State::Pre(stack) => {
                let node = stack.pop()?;
                if let Some(right) = node.right.as_deref() {
                    stack.push(right);
                }
                if let Some(left) = node.left.as_deref() {
                    stack.push(left);
                }
                Some(node)
            }
            State::In { stack, current } => {
                while let Some(node) = current.take() {
                    stack.push(node);
                    *current = node.left.as_deref();
                }
                let node = stack.pop()?;
                *current = node.right.as_deref();
                Some(node)
            }
            State::Post(stack) => loop {
                let (node, scheduled) = stack.pop()?;
                if scheduled {
                    return Some(node);
                }
                stack.push((node, true));
                if let Some(right) = node.right.as_deref() {
                    stack.push((right, false));
                }
                if let Some(left) = node.left.as_deref() {
                    stack.push((left, false));
                }
            },
            State::Level(queue) => {
                let node = queue.poll()?;
                if let Some(left) = node.left.as_deref() {
                    queue.offer(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.offer(right);
                }
                Some(node)
            }
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.step()?;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Traverse<'a, T> {}
