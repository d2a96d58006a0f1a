use snowdrift::{IdGenerator, Options};

fn main() {
    // Create a generator for worker 1 with default options
    let generator = IdGenerator::new(Options::new(1).unwrap()).unwrap();

    // Generate some IDs
    let id1 = generator.next_id();
    let id2 = generator.next_id();
    let id3 = generator.next_id();

    println!("Generated IDs:");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    let tick = generator.extract.timestamp(id3);
    let worker = generator.extract.worker(id3);
    let seq = generator.extract.sequence(id3);
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Tick: {tick} ms since base time");
    println!("  Worker ID: {worker}");
    println!("  Sequence: {seq}");

    // The process-wide generator needs no setup
    println!("\nDefault generator ID: {}", snowdrift::next_id());
}

fn print_id(id: u64, generator: &IdGenerator) {
    let (tick, worker, sequence) = generator.extract.decompose(id);
    let datetime = generator.extract.datetime(id).unwrap();

    println!("  ID: {id}, Tick: {tick}, Human date: {datetime}, Worker ID: {worker}, Sequence: {sequence}");
}
