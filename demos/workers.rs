use std::sync::mpsc;
use std::thread;

use tinyflagset::{AtomicFlagSet, FlagSet};

const WORKERS: usize = 4;

fn main() {
    // Single owner: the coordinator collects reports over a channel.
    let (tx, rx) = mpsc::channel();
    for worker in 0..WORKERS {
        let tx = tx.clone();
        thread::spawn(move || tx.send((worker, worker % 3 != 0)).unwrap());
    }
    drop(tx);

    let mut reported: FlagSet = FlagSet::builder(WORKERS).latching(true).build().unwrap();
    for (worker, success) in rx {
        reported.set(worker, success).unwrap();
        println!(
            "Worker {} reported {} (all ok: {}, none ok: {})",
            worker,
            success,
            reported.all_true(),
            reported.all_false()
        );
    }

    // Shared: every worker marks its own flag.
    let finished = AtomicFlagSet::new(WORKERS).unwrap();
    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let finished = &finished;
            scope.spawn(move || finished.set(worker, true).unwrap());
        }
    });
    println!("All workers finished: {}", finished.all_true());
}
