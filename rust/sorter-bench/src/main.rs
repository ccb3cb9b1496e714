//! Sorter Benchmark Runner
//!
//! Standalone binary that times every algorithm over generated inputs and
//! prints text, CSV, or JSON results.
//!
//! Usage: `sorter-bench [text|csv|json] [iterations]`

use serde::Serialize;
use sorter_bench::{generate, Pattern};
use sorter_core::{Algorithm, Sorter};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

/// Input sizes; the quadratic sorts stop at `QUADRATIC_LIMIT`.
const SIZES: [usize; 4] = [100, 1_000, 5_000, 20_000];
const QUADRATIC_LIMIT: usize = 5_000;

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub algorithm: Algorithm,
    pub pattern: &'static str,
    pub size: usize,
    pub duration_ms: f64,
    pub throughput_elems_per_sec: f64,
    pub iterations: u32,
}

fn is_quadratic(algorithm: Algorithm) -> bool {
    match algorithm {
        Algorithm::CountingComparison
        | Algorithm::SelectionSwapOnFind
        | Algorithm::SelectionFindMinimum
        | Algorithm::Insertion
        | Algorithm::Bubble => true,
        Algorithm::CountingHistogram | Algorithm::Radix | Algorithm::Merge => false,
    }
}

/// Time `iterations` sorts of `input`, after a short warm-up.
fn time_sort(sorter: &Sorter, input: &[i64], iterations: u32) -> Option<Duration> {
    for _ in 0..2 {
        sorter.sort(input).ok()?;
    }
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        let sorted = sorter.sort(input).ok()?;
        total += start.elapsed();
        std::hint::black_box(sorted);
    }
    Some(total)
}

fn run_bench(
    algorithm: Algorithm,
    pattern: Pattern,
    size: usize,
    iterations: u32,
) -> Option<BenchResult> {
    let input = generate(pattern, size, size as u64);
    let sorter = Sorter::with_algorithm(algorithm);
    let total = time_sort(&sorter, &input, iterations)?;

    let avg = total.as_secs_f64() / iterations as f64;
    Some(BenchResult {
        algorithm,
        pattern: pattern.name(),
        size,
        duration_ms: avg * 1000.0,
        throughput_elems_per_sec: if avg > 0.0 { size as f64 / avg } else { 0.0 },
        iterations,
    })
}

fn print_csv_header() {
    println!("algorithm,pattern,size,duration_ms,elems_per_sec,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{},{:.3},{:.0},{}",
        r.algorithm, r.pattern, r.size, r.duration_ms, r.throughput_elems_per_sec, r.iterations,
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let output_format = args.get(1).map(|s| s.as_str()).unwrap_or("text");
    let iterations: u32 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(5);

    let mut results: Vec<BenchResult> = Vec::new();
    for algorithm in Algorithm::iter() {
        for pattern in Pattern::ALL {
            for size in SIZES {
                if is_quadratic(algorithm) && size > QUADRATIC_LIMIT {
                    continue;
                }
                match run_bench(algorithm, pattern, size, iterations) {
                    Some(r) => results.push(r),
                    None => eprintln!(
                        "Warning: {} rejected {} input of size {}, skipping",
                        algorithm,
                        pattern.name(),
                        size
                    ),
                }
            }
        }
    }

    match output_format {
        "csv" => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        "json" => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: cannot encode results: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            println!("Sorter Benchmarks");
            println!("=================");
            println!();
            for r in &results {
                println!(
                    "[{}/{}/{}] {:.3}ms avg ({} iters) | {:.0} elems/s",
                    r.algorithm,
                    r.pattern,
                    r.size,
                    r.duration_ms,
                    r.iterations,
                    r.throughput_elems_per_sec,
                );
            }
        }
    }
}
