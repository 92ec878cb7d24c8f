use std::marker::PhantomData;

use super::item::Link;
use super::List;

pub struct Iter<'a, T: 'a> {
    current: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(super) fn new(head: Link<T>, len: usize) -> Self {
        Self { current: head, remaining: len, marker: PhantomData }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // The list is borrowed for 'a, its items stay alive and unchanged.
        let item = unsafe { self.current.get()? };
        self.current = item.next;
        self.remaining -= 1;
        Some(item.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

pub struct IterMut<'a, T: 'a> {
    current: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut T>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(super) fn new(head: Link<T>, len: usize) -> Self {
        Self { current: head, remaining: len, marker: PhantomData }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Every item is handed out once, so the mutable borrows never overlap.
        let item = unsafe { self.current.get_mut()? };
        self.current = item.next;
        self.remaining -= 1;
        Some(item.get_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: List<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}
