use std::sync::Arc;

use chrono::{TimeZone, Utc};
use snowdrift::{ActionEvent, IdGenerator, Options, WorkerObserver};

/// Prints every drift and turn-back transition
struct PrintingObserver;

impl WorkerObserver for PrintingObserver {
    fn action(&self, event: &ActionEvent) {
        println!(
            "  {:?} at tick {} (term {}, {} virtual ticks, {} IDs)",
            event.kind,
            event.time_tick,
            event.term_index,
            event.over_cost_count_in_term,
            event.gen_count_in_term
        );
    }
}

fn main() {
    // 10 worker bits = 1024 workers, 4 sequence bits = 11 IDs per tick after the reserved band
    let options = Options::builder(42)
        .base_time_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .worker_id_bits(10)
        .seq_bits(4)
        .min_seq(Options::RESERVED_SEQUENCES)
        .top_overcost_count(100)
        .build()
        .unwrap();

    let generator = IdGenerator::with_observer(options, Arc::new(PrintingObserver)).unwrap();

    println!("Generator options:");
    println!("  Worker ID: {} (of {})", options.worker_id(), options.max_worker_id());
    println!("  Sequence range: {}..={}", options.min_seq(), options.max_seq());
    println!("  Time bits: {}", options.timestamp_bits());

    println!("\nBurst of 50 IDs:");
    let ids: Vec<u64> = (0..50).map(|_| generator.next_id()).collect();

    let last = *ids.last().unwrap();
    let (tick, worker, seq) = generator.extract.decompose(last);
    println!("\nLast ID: {last}");
    println!("  Tick: {tick} ms since 2024-01-01");
    println!("  Worker ID: {worker}");
    println!("  Sequence: {seq}");
}
