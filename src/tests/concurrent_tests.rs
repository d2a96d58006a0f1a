#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_unique_and_monotonic, assert_unique_ids};
    use crate::*;
    use rand::{rng, Rng};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_concurrent_generation() {
        let generator = Arc::new(IdGenerator::new(Options::new(1).unwrap()).unwrap());
        let num_threads = 8;
        let ids_per_thread = 2_000;
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let generator_clone = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                (0..ids_per_thread)
                    .map(|_| generator_clone.next_id())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for handle in handles {
            all_ids.extend(handle.join().expect("thread panicked"));
        }

        assert_unique_and_monotonic(all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_concurrent_generation_simple_method() {
        let options = Options::builder(5).method(Method::Simple).build().unwrap();
        let generator = Arc::new(IdGenerator::new(options).unwrap());
        let num_threads = 4;
        let ids_per_thread = 500;
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let generator_clone = Arc::clone(&generator);
            handles.push(thread::spawn(move || {
                let mut v = Vec::with_capacity(ids_per_thread);
                for _ in 0..ids_per_thread {
                    v.push(generator_clone.next_id());
                }
                v
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for h in handles {
            all_ids.extend(h.join().expect("thread panicked"));
        }

        assert_unique_ids(&all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_rapid_generation() {
        let generator = IdGenerator::new(Options::new(1).unwrap()).unwrap();
        let mut ids = HashSet::new();
        let iterations = 10_000;

        // Far more than 64 IDs per millisecond forces drift terms
        for _ in 0..iterations {
            let id = generator.next_id();
            assert!(ids.insert(id), "Duplicate ID generated: {id}");
        }

        assert_eq!(ids.len(), iterations);
    }

    #[test]
    fn test_distinct_workers_never_collide() {
        let workers: Vec<u16> = vec![1, 2, 3, 4];
        let mut handles = Vec::with_capacity(workers.len());

        for worker_id in workers.iter().copied() {
            handles.push(thread::spawn(move || {
                let generator = IdGenerator::new(Options::new(worker_id).unwrap()).unwrap();
                let mut rng = rng();
                let mut ids = Vec::with_capacity(300);
                for _ in 0..300 {
                    ids.push(generator.next_id());
                    if rng.random_bool(0.05) {
                        thread::sleep(Duration::from_micros(rng.random_range(0..=500)));
                    }
                }
                ids
            }));
        }

        let mut all_ids = Vec::new();
        for h in handles {
            all_ids.extend(h.join().expect("thread panicked"));
        }

        let count = all_ids.len();
        assert_unique_ids(&all_ids, count);
    }
}
