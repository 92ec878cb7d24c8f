use std::cmp::Ordering;

pub type Link<T> = Option<Box<Node<T>>>;

/// Each node owns its children.
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Box<Self> {
        Box::new(Self { value, left: None, right: None })
    }
}

/// Equal values go right. Duplicates are filtered out by the tree.
pub fn add<T: Ord>(link: &mut Link<T>, value: T) {
    match *link {
        None => *link = Some(Node::leaf(value)),
        Some(ref mut node) => {
            if value < node.value {
                add(&mut node.left, value)
            } else {
                add(&mut node.right, value)
            }
        }
    }
}

pub fn contains<T: Ord>(link: &Link<T>, value: &T) -> bool {
    match link {
        None => false,
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => contains(&node.left, value),
            Ordering::Greater => contains(&node.right, value),
            Ordering::Equal => true,
        },
    }
}

pub fn height<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => height(&node.left).max(height(&node.right)) + 1,
    }
}

/// Removes `value` from the subtree. A node with two children takes over the
/// value of its in-order successor, which is then cut out of the right subtree.
pub fn remove<T: Ord>(link: &mut Link<T>, value: &T) -> bool {
    let node = match link {
        None => return false,
        Some(node) => node,
    };

    match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                if let Some(successor) = take_min(&mut node.right) {
                    node.value = successor;
                }
            } else {
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
            }
            true
        }
    }
}

/// Cuts the leftmost node out of the subtree, its right child takes its place.
pub fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        return take_min(&mut link.as_mut()?.left);
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

pub fn min<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(&node.value)
}

pub fn max<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(&node.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(values: &[u8]) -> Link<u8> {
        let mut root = None;
        values.iter().for_each(|&x| add(&mut root, x));
        root
    }

    #[test]
    fn add_places_children() {
        let root = branch(&[2, 1, 3]);
        let node = root.as_ref().unwrap();
        assert_eq!(node.value, 2);
        assert_eq!(node.left.as_ref().unwrap().value, 1);
        assert_eq!(node.right.as_ref().unwrap().value, 3);
    }

    #[test]
    fn take_min_promotes_right_child() {
        //  5
        //   \
        //    9
        //   /
        //  6
        //   \
        //    7
        let mut root = branch(&[5, 9, 6, 7]);
        assert_eq!(take_min(&mut root.as_mut().unwrap().right), Some(6));
        let right = root.as_ref().unwrap().right.as_ref().unwrap();
        assert_eq!(right.value, 9);
        assert_eq!(right.left.as_ref().unwrap().value, 7);
        assert_eq!(take_min(&mut root), Some(5));
        assert_eq!(root.as_ref().unwrap().value, 9);
    }

    #[test]
    fn remove_leaf_and_single_child() {
        let mut root = branch(&[4, 2, 1]);
        assert!(remove(&mut root, &2));
        assert_eq!(root.as_ref().unwrap().left.as_ref().unwrap().value, 1);
        assert!(remove(&mut root, &1));
        assert!(root.as_ref().unwrap().left.is_none());
        assert!(!remove(&mut root, &1));
        assert!(remove(&mut root, &4));
        assert!(root.is_none());
    }

    #[test]
    fn height_and_bounds() {
        let root = branch(&[3, 1, 2, 5]);
        assert_eq!(height(&root), 3);
        assert_eq!(min(&root), Some(&1));
        assert_eq!(max(&root), Some(&5));
        assert_eq!(height::<u8>(&None), 0);
        assert_eq!(min::<u8>(&None), None);
    }
}
