//! Commission Fees CLI
//!
//! Reads a headerless CSV of operations and prints one fee per line.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `trace` to see per-row fee decisions

use commission_fees::{process_csv, write_output, FeeError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(FeeError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let fees = process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_output(&fees, handle)?;

    Ok(())
}
