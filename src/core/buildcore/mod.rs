pub use crate::core::{
    queue::{Queue, SafeQueue},
    log::{append_logs, LogEntry, Logger, SafeLogger, State},
    event::{Event, EventOp},
    error::Result,
};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Named queue shared between threads, journaling every mutation
pub struct QueueSystem<T> {
    name: String,
    queue: SafeQueue<T>,
    logger: SafeLogger<T>,
}

fn lock<X>(m: &Mutex<X>) -> MutexGuard<'_, X> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone> QueueSystem<T> {
    /// Create a new, empty QueueSystem
    pub fn new(name: String) -> Self {
        Self::from_queue(name, Queue::new())
    }

    /// Create a QueueSystem pre-filled with `items`.
    /// The initial contents are not journaled.
    pub fn with_items<I: IntoIterator<Item = T>>(name: String, items: I) -> Self {
        Self::from_queue(name, items.into_iter().collect())
    }

    fn from_queue(name: String, queue: Queue<T>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(queue)),
            logger: Arc::new(Mutex::new(Logger::new(name.clone()))),
            name,
        }
    }

    /// Enqueue with logging
    pub fn enqueue(&self, item: T) -> Event<T> {
        let mut queue = lock(&self.queue);
        // every clone happens before the queue changes, so a panicking
        // `T::clone` leaves queue and journal in step
        let event = Event::new_enqueue(item.clone(), queue.len());
        let returned = event.clone();
        queue.enqueue(item);
        // logger taken while the queue is held so the journal matches queue order
        lock(&self.logger).log(event);
        returned
    }

    /// Dequeue an item
    pub fn dequeue(&self) -> (Option<T>, Event<T>) {
        let mut queue = lock(&self.queue);
        let event = Event::new_dequeue(queue.peek().cloned(), queue.len());
        let returned = event.clone();
        let item = queue.dequeue();
        lock(&self.logger).log(event);
        (item, returned)
    }

    /// Clone of the front item
    pub fn peek(&self) -> Option<T> {
        lock(&self.queue).peek().cloned()
    }

    pub fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        lock(&self.queue).has(item)
    }

    /// Remove everything
    pub fn clear(&self) -> Event<T> {
        let mut queue = lock(&self.queue);
        let event = Event::new_clear(queue.len());
        let returned = event.clone();
        queue.clear();
        lock(&self.logger).log(event);
        returned
    }

    pub fn len(&self) -> usize {
        lock(&self.queue).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.queue).is_empty()
    }

    /// Get current queue state
    pub fn queue_state(&self) -> (usize, bool) {
        let queue = lock(&self.queue);
        (queue.len(), queue.is_empty())
    }

    /// Copy of the contents, front to back
    pub fn snapshot(&self) -> Vec<T> {
        lock(&self.queue).iter().cloned().collect()
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<T>> {
        lock(&self.logger).entries.clone()
    }

    /// Append the journal to an NDJSON file
    pub fn export_logs(&self, path: impl AsRef<Path>) -> Result<()>
    where
        T: serde::Serialize,
    {
        let logger = lock(&self.logger);
        append_logs(logger.entries(), path)
    }

    /// Get queue name
    pub fn name(&self) -> &str {
        &self.name
    }
}
