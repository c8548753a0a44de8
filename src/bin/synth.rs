//! Synthetic shootout generation CLI.
//!
//! Generates complete random shootouts and writes them as a raw kick table
//! in the analyzer's input format.
//!
//! Usage:
//!   cargo run --release --bin synth -- [OPTIONS]
//!
//! Options:
//!   --matches N     Number of shootouts to generate (default: 10)
//!   --goal-prob P   Conversion probability per kick (default: 0.75)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   Output file path (default: stdout)

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};

use spotkick::synth::{generate, SynthConfig};
use spotkick::table::write_kicks;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SynthConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--matches" => {
                i += 1;
                config.matches = args[i].parse().expect("invalid --matches value");
            }
            "--goal-prob" => {
                i += 1;
                config.goal_prob = args[i].parse().expect("invalid --goal-prob value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let kicks = generate(&config);

    let result = match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            write_kicks(BufWriter::new(file), &kicks)
        }
        None => {
            let stdout = io::stdout();
            write_kicks(BufWriter::new(stdout.lock()), &kicks)
        }
    };

    if let Err(e) = result {
        eprintln!("failed to write kick table: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: synth [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --matches N     Number of shootouts to generate (default: 10)");
    println!("  --goal-prob P   Conversion probability per kick (default: 0.75)");
    println!("  --seed N        Random seed, 0 for entropy (default: 0)");
    println!("  --output FILE   Output file path (default: stdout)");
}
