// Copyright 2020 TwoCookingMice

use zerkrand::math::constants::Float;
use zerkrand::{LcgParameters, ZerkRandom};

use std::env;

const USAGE: &str = "<int|positive|decimal|range|shuffle> [--seed N] [--count N] [--min X] [--max X] \
[--multiplier A --modulus M --increment C] [items...]";

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} {}", args[0], USAGE);
        std::process::exit(1);
    }

    let mode = args[1].as_str();
    let mut seed: i32 = 0;
    let mut count: usize = 10;
    let mut min: Float = 0.0;
    let mut max: Float = 100.0;
    let mut params = LcgParameters::default();
    let mut custom_params = false;
    let mut items: Vec<String> = Vec::new();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<i32>().ok()).unwrap_or(seed);
            }
            "--count" => {
                i += 1;
                count = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(count);
            }
            "--min" => {
                i += 1;
                min = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(min);
            }
            "--max" => {
                i += 1;
                max = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(max);
            }
            "--multiplier" => {
                i += 1;
                params.multiplier = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(params.multiplier);
                custom_params = true;
            }
            "--modulus" => {
                i += 1;
                params.modulus = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(params.modulus);
                custom_params = true;
            }
            "--increment" => {
                i += 1;
                params.increment = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(params.increment);
                custom_params = true;
            }
            other => items.push(other.to_string()),
        }
        i += 1;
    }

    let mut rng = if custom_params {
        match ZerkRandom::with_parameters(seed, params) {
            Ok(rng) => rng,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        ZerkRandom::new(seed)
    };
    log::info!("Seed = {}, parameters = {:?}.", rng.seed(), rng.parameters());

    let output: Vec<String> = match mode {
        "int" => rng.ints().take(count).map(|v| v.to_string()).collect(),
        "positive" => rng.positive_ints().take(count).map(|v| v.to_string()).collect(),
        "decimal" => rng.generate_decimal_sequence(count).iter().map(|v| v.to_string()).collect(),
        "range" => match rng.generate_range_sequence(count, min, max) {
            Ok(values) => values.iter().map(|v| v.to_string()).collect(),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        "shuffle" => rng.shuffle(&items),
        _ => {
            eprintln!("Usage: {} {}", args[0], USAGE);
            std::process::exit(1);
        }
    };

    println!("{}", output.join(" "));
}
