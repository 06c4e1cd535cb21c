use std::collections::{vec_deque, VecDeque};
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::ops::Range;

fn write_body<I, D>(f: &mut Formatter<'_>, tag: &str, parts: I) -> std::fmt::Result
where
    I: Iterator<Item = D>,
    D: Debug,
{
    write!(f, "[Queue {}] {{ ", tag)?;
    for (i, part) in parts.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}", part)?;
    }
    write!(f, " }}")
}

// Debug output lists the whole queue, not just what the cursor has left.

/// Element cursor returned by `iter()` and `values()`.
/// Index pair into the queue's storage; cursors never share state.
pub struct Iter<'a, T> {
    items: &'a VecDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a VecDeque<T>) -> Self {
        Self { items, front: 0, back: items.len() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { items: self.items, front: self.front, back: self.back }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.items.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.items.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_body(f, "Iterator", self.items.iter())
    }
}

/// `(index, element)` cursor returned by `entries()`
pub struct Entries<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(items: &'a VecDeque<T>) -> Self {
        Self { inner: Iter::new(items) }
    }
}

impl<T> Clone for Entries<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.inner.front;
        self.inner.next().map(|item| (index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        Some((self.inner.back, item))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
impl<T> FusedIterator for Entries<'_, T> {}

impl<T: Debug> Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        struct Pair<'p, T>(usize, &'p T);
        impl<T: Debug> Debug for Pair<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "[ {}, {:?} ]", self.0, self.1)
            }
        }
        write_body(f, "Entries", self.inner.items.iter().enumerate().map(|(i, item)| Pair(i, item)))
    }
}

/// Index cursor returned by `keys()`
#[derive(Clone)]
pub struct Keys {
    size: usize,
    range: Range<usize>,
}

impl Keys {
    pub(crate) fn new(size: usize) -> Self {
        Self { size, range: 0..size }
    }
}

impl Iterator for Keys {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.range.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Keys {
    fn next_back(&mut self) -> Option<usize> {
        self.range.next_back()
    }
}

impl ExactSizeIterator for Keys {}
impl FusedIterator for Keys {}

impl Debug for Keys {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_body(f, "Iterator", 0..self.size)
    }
}

/// Owning iterator, front to back
pub struct IntoIter<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: VecDeque<T>) -> Self {
        Self { inner: items.into_iter() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
