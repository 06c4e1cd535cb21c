use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(1); // global counter for unique event IDs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOp {
    Enqueue,
    Dequeue,
    Clear,
}

impl EventOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventOp::Enqueue => "enqueue",
            EventOp::Dequeue => "dequeue",
            EventOp::Clear => "clear",
        }
    }
}

/// One mutating operation applied to a queue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event<T> {
    pub global_id: u64,           // unique event ID
    pub op: EventOp,
    pub item: Option<T>,          // enqueued or dequeued item, none for clear or empty dequeue
    pub size_before: usize,
    pub size_after: usize,
}

impl<T> Event<T> {

    fn next_id() -> u64 {
        EVENT_COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    pub fn new_enqueue(item: T, size_before: usize) -> Self {
        Self {
            global_id: Self::next_id(),
            op: EventOp::Enqueue,
            item: Some(item),
            size_before,
            size_after: size_before.saturating_add(1),
        }
    }

    pub fn new_dequeue(item: Option<T>, size_before: usize) -> Self {
        let size_after = if item.is_some() { size_before.saturating_sub(1) } else { size_before };
        Self {
            global_id: Self::next_id(),
            op: EventOp::Dequeue,
            item,
            size_before,
            size_after,
        }
    }

    pub fn new_clear(size_before: usize) -> Self {
        Self {
            global_id: Self::next_id(),
            op: EventOp::Clear,
            item: None,
            size_before,
            size_after: 0,
        }
    }

    /// Number of elements this operation removed
    pub fn removed(&self) -> usize {
        self.size_before.saturating_sub(self.size_after)
    }
}
