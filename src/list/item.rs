use std::cmp::PartialEq;
use std::fmt;
use std::ptr::NonNull;

/// Non-owning pointer to an item of a list. The list is the only owner of the
/// items, links are freely copied between neighbours.
pub struct Link<T>(Option<NonNull<Item<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    pub fn new(value: T, prev: Link<T>, next: Link<T>) -> Self {
        let item = Box::new(Item { value, prev, next });
        Link(Some(NonNull::from(Box::leak(item))))
    }

    pub fn null() -> Self {
        Link(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// # Safety
    /// The link is null or points to a live item which is not mutably borrowed for `'a`.
    pub unsafe fn get<'a>(self) -> Option<&'a Item<T>> {
        self.0.map(|ptr| &*ptr.as_ptr())
    }

    /// # Safety
    /// The link is null or points to a live item which is not borrowed at all for `'a`.
    pub unsafe fn get_mut<'a>(self) -> Option<&'a mut Item<T>> {
        self.0.map(|ptr| &mut *ptr.as_ptr())
    }

    pub unsafe fn get_value<'a>(self) -> Option<&'a T> {
        self.get().map(Item::get)
    }

    /// Frees the item, joining its neighbours together.
    ///
    /// # Safety
    /// The link is null or points to a live item, and no other reference to
    /// that item is used afterwards.
    pub unsafe fn remove(self) -> Option<T> {
        let ptr = self.0?;
        Some(Box::from_raw(ptr.as_ptr()).remove())
    }
}

impl<T> PartialEq for Link<T> {
    fn eq(&self, other: &Link<T>) -> bool {
        self.0 == other.0
    }
}

impl<T> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ptr) => write!(f, "Link({:p})", ptr),
            None => f.write_str("Link(null)"),
        }
    }
}

pub struct Item<T> {
    value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> Item<T> {
    fn remove(self: Box<Self>) -> T {
        let Item { value, prev, next } = *self;
        unsafe {
            if let Some(x) = prev.get_mut() {
                x.next = next;
            }
            if let Some(x) = next.get_mut() {
                x.prev = prev;
            }
        }
        value
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}
