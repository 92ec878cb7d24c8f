//! Doubly linked list.
//!
//! Items live on the heap and point at their neighbours through raw links.
//! The list owns every item; `head` and `tail` are links into the chain and
//! are updated by each structural change.

mod item;
mod iter;

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem::replace;

use self::item::Item;
use self::item::Link;
pub use self::iter::IntoIter;
pub use self::iter::Iter;
pub use self::iter::IterMut;
use crate::error::Error;

pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Item<T>>>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        List { head: Link::null(), tail: Link::null(), len: 0, marker: PhantomData }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_null()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.len)
    }

    fn create_first(&mut self, value: T) {
        self.head = Link::new(value, Link::null(), Link::null());
        self.tail = self.head;
    }

    pub fn push_back(&mut self, value: T) {
        if self.is_empty() {
            self.create_first(value);
        } else {
            let new = Link::new(value, self.tail, Link::null());
            // A non-empty list has a live tail.
            if let Some(tail) = unsafe { self.tail.get_mut() } {
                tail.next = new;
            }
            self.tail = new;
        }
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        if self.is_empty() {
            self.create_first(value);
        } else {
            let new = Link::new(value, Link::null(), self.head);
            if let Some(head) = unsafe { self.head.get_mut() } {
                head.prev = new;
            }
            self.head = new;
        }
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let old_tail = replace(&mut self.tail, Link::null());
        let prev = unsafe { old_tail.get()? }.prev;
        if prev.is_null() {
            self.head = Link::null();
        } else {
            self.tail = prev;
        }
        self.len -= 1;
        unsafe { old_tail.remove() }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let old_head = replace(&mut self.head, Link::null());
        let next = unsafe { old_head.get()? }.next;
        if next.is_null() {
            self.tail = Link::null();
        } else {
            self.head = next;
        }
        self.len -= 1;
        unsafe { old_head.remove() }
    }

    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.get_value() }
    }

    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.get_value() }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.get_mut() }.map(Item::get_mut)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.get_mut() }.map(Item::get_mut)
    }

    /// Detaches an item of this list and returns its value.
    ///
    /// # Safety
    /// `link` is a non-null link to an item owned by `self`.
    unsafe fn unlink(&mut self, link: Link<T>) -> Option<T> {
        let item = link.get()?;
        if link == self.head {
            self.head = item.next;
        }
        if link == self.tail {
            self.tail = item.prev;
        }
        self.len -= 1;
        link.remove()
    }

    /// Removes the first element matching `predicate`.
    pub fn remove_by<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while let Some(item) = unsafe { current.get() } {
            if predicate(item.get()) {
                return unsafe { self.unlink(current) };
            }
            current = item.next;
        }
        None
    }

    /// Removes the element at `index`, walking from whichever end is closer.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }

        let mut current;
        if index < self.len / 2 {
            current = self.head;
            for _ in 0..index {
                current = unsafe { current.get() }.map_or(Link::null(), |x| x.next);
            }
        } else {
            current = self.tail;
            for _ in index..self.len - 1 {
                current = unsafe { current.get() }.map_or(Link::null(), |x| x.prev);
            }
        }

        let len = self.len;
        unsafe { self.unlink(current) }.ok_or(Error::IndexOutOfBounds { index, len })
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        debug_assert_eq!(self.len, 0);
    }
}

impl<T: PartialEq> List<T> {
    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_by(|x| x == value).is_some()
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| self.push_back(x));
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
