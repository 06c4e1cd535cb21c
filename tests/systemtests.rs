use fifo_queue::{EventOp, QueueSystem, State};
use std::sync::Arc;
use std::thread;

#[test]
fn test_operations_are_journaled() {
    let system = QueueSystem::new("orders".to_string());
    system.enqueue("a".to_string());
    system.enqueue("b".to_string());
    let (item, event) = system.dequeue();
    assert_eq!(item.as_deref(), Some("a"));
    assert_eq!(event.op, EventOp::Dequeue);
    assert_eq!((event.size_before, event.size_after), (2, 1));

    let clear = system.clear();
    assert_eq!(clear.removed(), 1);
    let (missing, _) = system.dequeue();
    assert_eq!(missing, None);

    let states: Vec<State> = system.logs().iter().map(|e| e.state).collect();
    assert_eq!(
        states,
        vec![State::Committed, State::Committed, State::Delivered, State::Cleared, State::Missed]
    );
    assert!(system.logs().iter().all(|e| e.queue_name == "orders"));
    assert_eq!(system.queue_state(), (0, true));
}

#[test]
fn test_with_items_is_not_journaled() {
    let system = QueueSystem::with_items("seed".to_string(), vec![1, 2, 3]);
    assert_eq!(system.len(), 3);
    assert_eq!(system.peek(), Some(1));
    assert!(system.has(&2));
    assert!(system.logs().is_empty());
    assert_eq!(system.snapshot(), vec![1, 2, 3]);
}

#[test]
fn test_log_ids_increase() {
    let system = QueueSystem::new("ids".to_string());
    for i in 0..4 {
        system.enqueue(i);
    }
    let logs = system.logs();
    assert!(logs.windows(2).all(|w| w[0].local_log_id < w[1].local_log_id));
    assert!(logs.windows(2).all(|w| w[0].event.global_id < w[1].event.global_id));
}

#[test]
fn test_concurrent_producers_keep_count() {
    let system = Arc::new(QueueSystem::new("shared".to_string()));
    let mut handles = vec![];
    for t in 0..4 {
        let system = system.clone();
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                system.enqueue(t * 100 + i);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(system.len(), 100);
    assert_eq!(system.logs().len(), 100);

    // per-producer order survives interleaving
    let items = system.snapshot();
    for t in 0..4 {
        let mine: Vec<_> = items.iter().filter(|v| **v / 100 == t).collect();
        assert!(mine.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_export_logs_writes_ndjson() {
    let system = QueueSystem::new("export".to_string());
    system.enqueue(7u32);
    system.dequeue();

    let path = std::env::temp_dir().join(format!("fifo-queue-export-{}.ndjson", std::process::id()));
    let _ = std::fs::remove_file(&path);
    system.export_logs(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"]["op"], "enqueue");
    assert_eq!(lines[0]["event"]["item"], 7);
    assert_eq!(lines[1]["state"], "Delivered");
}

#[test]
fn test_export_to_missing_directory_fails() {
    let system = QueueSystem::new("bad".to_string());
    system.enqueue(1);
    let path = std::env::temp_dir().join("fifo-queue-no-such-dir").join("x").join("log.ndjson");
    assert!(matches!(system.export_logs(&path), Err(fifo_queue::Error::Io(_))));
}

#[test]
fn test_logger_entries_since() {
    use fifo_queue::{Event, Logger};
    let mut logger: Logger<&str> = Logger::new("direct".to_string());
    assert!(logger.is_empty());
    let first = logger.log(Event::new_enqueue("a", 0));
    logger.log(Event::new_dequeue(Some("a"), 1));
    logger.log(Event::new_clear(0));

    assert_eq!(logger.len(), 3);
    assert_eq!(logger.queue_name(), "direct");
    let later = logger.entries_since(first);
    assert_eq!(later.len(), 2);
    assert_eq!(later[0].state, State::Delivered);
    assert_eq!(later[1].event.op, EventOp::Clear);
}

#[derive(Debug)]
struct Fragile(bool);

impl Clone for Fragile {
    fn clone(&self) -> Self {
        if self.0 {
            panic!("clone of fragile item");
        }
        Fragile(false)
    }
}

#[test]
fn test_panicking_clone_keeps_queue_and_journal_in_step() {
    let system = Arc::new(QueueSystem::with_items(
        "fragile".to_string(),
        vec![Fragile(true), Fragile(false)],
    ));

    let worker = system.clone();
    let result = thread::spawn(move || {
        worker.dequeue();
    })
    .join();
    assert!(result.is_err());

    // the front element is still there and nothing was journaled
    assert_eq!(system.len(), 2);
    assert!(system.logs().is_empty());

    // the poisoned lock is recovered and later operations still journal
    system.enqueue(Fragile(false));
    assert_eq!(system.len(), 3);
    assert_eq!(system.logs().len(), 1);
    assert_eq!(system.logs()[0].event.size_after, 3);
}

#[test]
fn test_dequeue_event_on_zero_size_does_not_underflow() {
    use fifo_queue::{Event, Logger};
    let event = Event::new_dequeue(Some(1u8), 0);
    assert_eq!((event.size_before, event.size_after), (0, 0));
    assert_eq!(event.removed(), 0);

    let mut logger = Logger::new("edge".to_string());
    logger.log(event);
    assert_eq!(logger.entries()[0].state, State::Delivered);
}
