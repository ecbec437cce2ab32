//! Fibonacci CLI
//!
//! Usage: fibonacci <n> [<n> ...]
//! Example: fibonacci 10 50 100
//!
//! All indices share one memo, so later indices reuse earlier work.

use sciutil::{FibonacciMemo, MAX_FIBONACCI_INDEX, SequenceOptions, fibonacci_sequence};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <n> [<n> ...]", args[0]);
        eprintln!("Supported indices: 0..={}", MAX_FIBONACCI_INDEX);
        std::process::exit(1);
    }

    let mut indices = Vec::with_capacity(args.len() - 1);
    for raw in &args[1..] {
        match raw.parse::<i64>() {
            Ok(n) => indices.push(n),
            Err(_) => {
                eprintln!("Error: Invalid index '{}'", raw);
                std::process::exit(1);
            }
        }
    }

    let mut memo = FibonacciMemo::new();
    let start = Instant::now();

    let values = match fibonacci_sequence(&mut memo, &indices, SequenceOptions::default()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let elapsed = start.elapsed();

    for (n, value) in indices.iter().zip(&values) {
        println!("F({}) = {}", n, value);
    }

    println!(
        "Computed {} value(s) in {:.3} ms ({} memoized indices).",
        values.len(),
        elapsed.as_secs_f64() * 1000.0,
        memo.len()
    );
}
