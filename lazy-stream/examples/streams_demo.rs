//! Lazy Streams Demonstration
//!
//! Walks through generators, combinators, windows, zips and the validating
//! façade. Set `RUST_LOG=lazy_stream=trace` to watch prefix validation.
//!
//! Run with: cargo run --example streams_demo

use lazy_stream::{LazySeq, ValidatedStream};
use stream_common::{Outcome, PositiveSize, StdoutConsole};

fn main() -> Outcome<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut console = StdoutConsole;
    let ten = PositiveSize::new(10)?;

    println!("=== Lazy Streams ===\n");

    // =========================================================================
    // Infinite Streams
    // =========================================================================
    println!("Infinite Streams");
    println!("{}", "=".repeat(60));

    print!("Integers from 1:   ");
    ValidatedStream::integers_from(1).print_prefix(&mut console, ten)?;

    print!("Fibonacci:         ");
    ValidatedStream::fibs().print_prefix(&mut console, PositiveSize::new(15)?)?;

    print!("Powers of 2:       ");
    ValidatedStream::iterate(1u64, |n| n * 2).print_prefix(&mut console, ten)?;

    // (define (sqrt-stream x) (cons-stream 1.0 (stream-map improve guesses)))
    print!("sqrt(2) guesses:   ");
    ValidatedStream::iterate(1.0f64, |guess| (guess + 2.0 / guess) / 2.0)
        .print_prefix(&mut console, PositiveSize::new(5)?)?;

    print!("Odd squares:       ");
    ValidatedStream::integers_from(0)
        .filter(|n| n % 2 == 1)
        .map(|n| n * n)
        .print_prefix(&mut console, PositiveSize::new(5)?)?;

    // =========================================================================
    // Windows and Zips
    // =========================================================================
    println!("\n\nWindows and Zips");
    println!("{}", "=".repeat(60));

    let one_to_five: ValidatedStream<i64> = ValidatedStream::from_lazy((1..=5).collect());
    let two = PositiveSize::new(2)?;

    print!("Fixed windows:     ");
    one_to_five.window_fixed(two).print_prefix(&mut console, ten)?;
    print!("At-most windows:   ");
    one_to_five.window_fixed_at_most(two).print_prefix(&mut console, ten)?;
    print!("Sliding windows:   ");
    one_to_five.window_sliding(two).print_prefix(&mut console, ten)?;

    print!("Zip with endless x: ");
    one_to_five
        .take_at_most(PositiveSize::new(3)?)
        .zip_as_possible(&ValidatedStream::repeat_with(|| "x"))
        .print_prefix(&mut console, ten)?;

    let sums: Vec<i64> = LazySeq::integers_from(1)
        .zip(&LazySeq::integers_from(10))
        .map(|(a, b)| a + b)
        .iter()
        .take(5)
        .collect();
    println!("Added streams:     {sums:?}");

    // =========================================================================
    // Eager Error Detection
    // =========================================================================
    println!("\n\nEager Error Detection");
    println!("{}", "=".repeat(60));

    // Panics from the callbacks below are caught; silence the default report.
    std::panic::set_hook(Box::new(|_| {}));

    let reciprocal = ValidatedStream::integers_from(0).map(|n| 1000 / n);
    println!("1000 / n from 0:    valid = {}", reciprocal.is_valid());
    print!("                    ");
    reciprocal.print_prefix(&mut console, ten)?;

    let late = ValidatedStream::integers_from(1).map(|n| 1000 / (n - 8));
    println!("1000 / (n - 8):     valid = {}", late.is_valid());
    print!("  first 5:          ");
    late.print_prefix(&mut console, PositiveSize::new(5)?)?;
    print!("  first 10:         ");
    late.print_prefix(&mut console, ten)?;

    let chained = reciprocal.filter(|n| *n > 0).append(&late);
    println!("Chained on failure: {:?}", chained.error());

    let _ = std::panic::take_hook();

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("{}", "=".repeat(60));
    println!("1. Closures stand in for delay/force; nothing runs until forced");
    println!("2. Every combinator is a lazy right fold or a bounded loop");
    println!("3. A short forced prefix catches most callback errors early");
    println!("4. Failure is sticky and never re-evaluates the lazy value");
    println!("{}", "=".repeat(60));

    Ok(())
}
