use rand::{rng, Rng};
use snowdrift::{IdGenerator, Options};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One generator shared by every thread; it serialises calls internally
    let generator = Arc::new(IdGenerator::new(Options::new(1).unwrap()).unwrap());
    let mut handles = vec![];

    // Spawn multiple threads simulating concurrent callers
    for thread_id in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_id();
                let (tick, worker, seq) = generator.extract.decompose(id);

                println!(
                    "Thread {} generated ID {} (tick={}, worker={}, seq={})",
                    thread_id, i, tick, worker, seq
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let thread_ids = handle.join().unwrap();
        all_ids.extend(thread_ids);
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not unique!");
    }
    println!("All IDs are unique!");
}
