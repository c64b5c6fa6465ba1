//! Command-line dataset generator.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;

use bjgen::{Generator, GeneratorOptions, output};

/// Simulate blackjack rounds and write one labeled row per player hand.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of 52-card decks per shoe.
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Number of tables swept per pass.
    #[arg(long, default_value_t = 10)]
    tables: u32,

    /// Minimum total number of rows to generate.
    #[arg(long, default_value_t = 10_000)]
    min_rows: usize,

    /// RNG seed; defaults to the current time when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path.
    #[arg(short, long, default_value = "blackjack_data.csv")]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(&Args::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GeneratorOptions::default()
        .with_decks(args.decks)
        .with_tables(args.tables)
        .with_min_rows(args.min_rows);

    let mut generator = Generator::new(options, seed)?;

    log::info!(
        "generating at least {} rows across {} tables (seed {seed})",
        args.min_rows,
        args.tables
    );

    let start = Instant::now();
    let records = generator.run()?;

    let file = File::create(&args.output)?;
    output::write_csv(BufWriter::new(file), &records)?;

    log::info!(
        "wrote {} rows to {} in {:.2?}",
        records.len(),
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}
