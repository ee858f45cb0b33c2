// Growth benchmark - measures push() cost and how often the buffer is reallocated

use std::time::Instant;

use growable::{profiling, Config, GrowableArray};

fn main() {
    let num_items = 1_000_000;

    for growth_factor in [2, 3, 4] {
        println!("\n=== push() with growth factor {} ===", growth_factor);
        profiling::reset();

        let config = Config::new().with_growth_factor(growth_factor);
        let mut array = GrowableArray::with_config(config);

        let start = Instant::now();
        for i in 0..num_items {
            array.push(i);
        }
        let push_time = start.elapsed();

        println!("  {} pushes: {:?}", num_items, push_time);
        println!("  per call: {:?}", push_time / num_items as u32);
        println!("  final capacity: {} ({} spare)", array.capacity(), array.capacity() - array.len());
        println!("  {}", profiling::report());
    }

    println!("\n=== reserve() up front ===");
    profiling::reset();
    let mut array = GrowableArray::new();
    let start = Instant::now();
    array.reserve(num_items);
    for i in 0..num_items {
        array.push(i);
    }
    let reserved_time = start.elapsed();
    println!("  {} pushes: {:?}", num_items, reserved_time);
    println!("  {}", profiling::report());
}
