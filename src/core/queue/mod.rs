use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};
use serde::{Serialize, Deserialize};
use crate::core::iter::{Entries, IntoIter, Iter, Keys};

/// FIFO queue: elements leave in the order they were enqueued.
///
/// Emptiness is a normal state, so `dequeue` and `peek` on an empty queue
/// return `None` instead of failing. `Option` itself is a legal element type;
/// `Queue<Option<u8>>::dequeue` yields `Some(None)` for a stored `None`.
///
/// Iteration cursors (`iter`, `values`, `entries`, `keys`) borrow the queue.
/// The queue cannot be mutated while one of them is alive, so every cursor
/// observes the contents as they were when it was created.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Enqueue an item at the back
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.items.len();
        self.items.push_back(item);
        // -- post op assertion: exactly one element was added
        debug_assert_eq!(self.items.len(), len_before + 1, "Queue length should grow by 1");
    }

    /// Dequeue the front item, `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        match result {
            Some(_) => debug_assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => debug_assert_eq!(len_before, 0, "Only an empty queue yields nothing"),
        }
        result
    }

    /// Front item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every element. Safe to call on an empty queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether some element equals `value`. Linear scan.
    pub fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`Queue::size`]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Call `f` once per element, front to back.
    ///
    /// The element is passed twice (value and key are the same thing in a
    /// queue) followed by the queue itself. The queue is borrowed for the
    /// whole traversal, so `f` cannot mutate it.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, &T, &Queue<T>),
    {
        let mut i = 0;
        while let Some(value) = self.items.get(i) {
            f(value, value, self);
            i += 1;
        }
    }

    /// Default iteration: element references, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    /// Same sequence as [`Queue::iter`]
    pub fn values(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    /// `(index, element)` pairs, index 0 being the front
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(&self.items)
    }

    /// Positions `0..size`, size taken when the cursor is created
    pub fn keys(&self) -> Keys {
        Keys::new(self.items.len())
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items: VecDeque::from(items) }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(items: [T; N]) -> Self {
        Self { items: VecDeque::from(items) }
    }
}

impl<T: Clone> From<&[T]> for Queue<T> {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Queue({}) {{ ", self.items.len())?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", item)?;
        }
        write!(f, " }}")
    }
}

/// Thread-safe wrapper around the queue
pub type SafeQueue<T> = Arc<Mutex<Queue<T>>>;
