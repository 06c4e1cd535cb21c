use fifo_queue::QueueSystem;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> fifo_queue::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "output.ndjson".to_string());

    let queues: Vec<Arc<QueueSystem<String>>> = (0..4)
        .map(|i| Arc::new(QueueSystem::new(format!("Q{}", i))))
        .collect();

    let mut handles = vec![];

    // Each producer feeds every queue, then drains one item from its own
    for (i, own) in queues.iter().enumerate() {
        let queues = queues.clone();
        let own = own.clone();
        handles.push(thread::spawn(move || {
            for (n, queue) in queues.iter().enumerate() {
                queue.enqueue(format!("P{}-Item {}", i, n));
                thread::sleep(Duration::from_millis(10));
            }
            own.dequeue();
        }));
    }

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("producer thread panicked");
        }
    }

    for queue in &queues {
        println!("{}: {:?}", queue.name(), queue.snapshot());
        queue.export_logs(&path)?;
    }
    Ok(())
}
