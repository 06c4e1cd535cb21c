use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::error::Result;
use crate::core::event::{Event, EventOp};
use serde::{Serialize, Deserialize};

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Outcome of a queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Committed,  // enqueue applied
    Delivered,  // dequeue returned an element
    Missed,     // dequeue on an empty queue
    Cleared,
}

impl State {
    fn of<T>(event: &Event<T>) -> Self {
        match (event.op, event.item.is_some()) {
            (EventOp::Enqueue, _) => State::Committed,
            (EventOp::Dequeue, true) => State::Delivered,
            (EventOp::Dequeue, false) => State::Missed,
            (EventOp::Clear, _) => State::Cleared,
        }
    }
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub queue_name: String,
    pub state: State,
    pub event: Event<T>,
}

impl<T: std::fmt::Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, queue_name: {}, op: {}, item: {:?}, state: {:?}, size: {} -> {} }}",
            self.local_log_id,
            self.queue_name,
            self.event.op.as_str(),
            self.event.item,
            self.state,
            self.event.size_before,
            self.event.size_after,
        )
    }
}

#[derive(Clone, Debug)]
/// Journal of every operation applied to one queue
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
    queue_name: String,
}

impl<T: Clone> Logger<T> {
    pub fn new(queue_name: String) -> Self {
        Self { entries: Vec::new(), queue_name }
    }

    /// Record an event, returning the id of the new entry.
    /// Panics if the sizes carried by `event` contradict its operation; events
    /// built with the `Event::new_*` constructors always agree.
    pub fn log(&mut self, event: Event<T>) -> u64 {
        // --- Negative-space assertion: sizes must match the operation ---
        match event.op {
            EventOp::Enqueue => assert_eq!(event.size_after, event.size_before.saturating_add(1), "Enqueue must grow the queue by one"),
            EventOp::Dequeue => assert!(event.size_after <= event.size_before, "Dequeue must never grow the queue"),
            EventOp::Clear => assert_eq!(event.size_after, 0, "Clear must leave the queue empty"),
        }

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
        let state = State::of(&event);

        tracing::debug!(
            queue = %self.queue_name,
            log_id = local_log_id,
            op = event.op.as_str(),
            size = event.size_after,
            "queue operation"
        );

        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            queue_name: self.queue_name.clone(),
            state,
            event,
        });

        // --- Negative-space assertion: log length increased exactly by 1 ---
        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
        local_log_id
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries recorded after `log_id`
    pub fn entries_since(&self, log_id: u64) -> Vec<LogEntry<T>> {
        self.entries
            .iter()
            .filter(|entry| entry.local_log_id > log_id)
            .cloned()
            .collect()
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }
}

/// Write entries as NDJSON, one object per line
pub fn write_ndjson<T: Serialize, W: Write>(log: &[LogEntry<T>], mut writer: W) -> Result<()> {
    for entry in log {
        serde_json::to_writer(&mut writer, entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Append entries to the NDJSON file at `path`, creating it if needed
pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .inspect_err(|e| tracing::warn!(path = %path.display(), "cannot open log file: {}", e))?;
    write_ndjson(log, BufWriter::new(file))
}

/// Thread-safe wrapper
pub type SafeLogger<T> = Arc<Mutex<Logger<T>>>;
