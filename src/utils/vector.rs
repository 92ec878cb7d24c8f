//! Binary heap primitives over a slice.
//!
//! Parent of `k` is `(k - 1) / 2`, children are `2k + 1` and `2k + 2`.
//! `less(a, b)` is true when `a` must sit above `b`. Elements are moved only
//! through `swap`, which lets a caller keep side tables in step with the slice.

/// Moves the element at `pos` toward the root while it is `less` than its
/// parent. Returns the final position.
pub fn swim<T, L, S>(data: &mut [T], mut pos: usize, less: L, mut swap: S) -> usize
where
    L: Fn(&T, &T) -> bool,
    S: FnMut(&mut [T], usize, usize),
{
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if !less(&data[pos], &data[parent]) {
            break;
        }
        swap(data, parent, pos);
        pos = parent;
    }
    pos
}

/// Moves the element at `pos` toward the leaves while one of its children is
/// `less` than it. The right child is taken only if it is `less` than the left
/// one. Returns the final position.
pub fn sink<T, L, S>(data: &mut [T], mut pos: usize, less: L, mut swap: S) -> usize
where
    L: Fn(&T, &T) -> bool,
    S: FnMut(&mut [T], usize, usize),
{
    let len = data.len();
    loop {
        let left = 2 * pos + 1;
        let right = left + 1;
        if left >= len {
            break;
        }

        let child = if right < len && less(&data[right], &data[left]) { right } else { left };
        if !less(&data[child], &data[pos]) {
            break;
        }
        swap(data, child, pos);
        pos = child;
    }
    pos
}

/// Checks the heap property of the subtree rooted at `pos`.
pub fn is_heap<T, L>(data: &[T], pos: usize, less: &L) -> bool
where
    L: Fn(&T, &T) -> bool,
{
    if pos >= data.len() {
        return true;
    }

    let left = 2 * pos + 1;
    let right = left + 1;
    if left < data.len() && less(&data[left], &data[pos]) {
        return false;
    }
    if right < data.len() && less(&data[right], &data[pos]) {
        return false;
    }
    is_heap(data, left, less) && is_heap(data, right, less)
}
