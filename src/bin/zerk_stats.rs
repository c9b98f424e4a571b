use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use zerkrand::ZerkRandom;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut seed: i32 = 0;
    let mut samples: u64 = 1_000_000;
    let mut buckets: usize = 10;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<i32>().ok()).unwrap_or(seed);
            }
            "--samples" => {
                i += 1;
                samples = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(samples);
            }
            "--buckets" => {
                i += 1;
                buckets = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(buckets).max(1);
            }
            _ => {
                eprintln!("Usage: {} [--seed N] [--samples N] [--buckets N]", args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut rng = ZerkRandom::new(seed);
    let mut histogram = vec![0u64; buckets];
    let mut sum = 0.0f64;

    let progress = ProgressBar::new(samples);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} samples")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let tick = (samples / 100).max(1);
    for n in 0..samples {
        let value = rng.next_decimal();
        sum += value;
        let bucket = ((value * buckets as f64) as usize).min(buckets - 1);
        histogram[bucket] += 1;
        if (n + 1) % tick == 0 {
            progress.inc(tick);
        }
    }
    progress.inc(samples % tick);
    progress.finish_and_clear();

    if samples == 0 {
        println!("No samples drawn.");
        return;
    }

    println!("Seed: {}, samples: {}", style(seed).bold(), samples);
    let expected = samples as f64 / buckets as f64;
    for (index, &hits) in histogram.iter().enumerate() {
        let lo = index as f64 / buckets as f64;
        let hi = (index + 1) as f64 / buckets as f64;
        let deviation = (hits as f64 - expected) / expected;
        let line = format!("[{:.3}, {:.3}): {:>10} ({:+.2}%)", lo, hi, hits, deviation * 100.0);
        if deviation.abs() > 0.05 {
            println!("{}", style(line).yellow());
        } else {
            println!("{}", line);
        }
    }
    println!("Mean: {:.6}", sum / samples as f64);
}
