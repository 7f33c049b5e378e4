use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use keccak_bitcount::config::{DEFAULT_BITFIELD_SIZE, DEFAULT_NUM_TRIALS, DEFAULT_SEED};
use keccak_bitcount::io_utils::{bitcount_cli_error, io_cli_error};
use keccak_bitcount::{run_trials, Config, RawConfig, Report};

/// Analyze bit counts in Ethereum-style Keccak-256 hash chains
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Size of each bitfield in bits
    #[arg(short, long, default_value_t = DEFAULT_BITFIELD_SIZE, allow_negative_numbers = true)]
    bitfield_size: i64,
    /// Number of sequential trials
    #[arg(short, long, default_value_t = DEFAULT_NUM_TRIALS, allow_negative_numbers = true)]
    num_trials: i64,
    /// Initial seed, decimal or 0x-prefixed hex, in [0, 2^256 - 1]
    #[arg(short, long, default_value = DEFAULT_SEED, allow_hyphen_values = true)]
    seed: String,
    /// Also write the distribution as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Also write a JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,
    /// Print mean and expected bit count after the distribution
    #[arg(long)]
    summary: bool,
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let raw = RawConfig {
        bitfield_size: args.bitfield_size,
        num_trials: args.num_trials,
        seed: args.seed.clone(),
    };
    let config =
        Config::validate(&raw).map_err(|e| bitcount_cli_error("validating arguments", e))?;
    info!(
        "seed={} bitfield_size={} num_trials={}",
        config.seed_decimal(),
        config.bitfield_size,
        config.num_trials
    );

    let time_total = std::time::Instant::now();
    let hist = run_trials(&config.seed, config.bitfield_size, config.num_trials);
    info!("Done in {:.3} s", time_total.elapsed().as_secs_f64());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    hist.write_report(&mut out)
        .map_err(|e| bitcount_cli_error("writing report", e))?;
    if args.summary {
        if let Some(mean) = hist.mean() {
            writeln!(out, "mean: {mean:.3}")?;
        }
        writeln!(out, "expected: {:.3}", config.bitfield_size as f64 / 2.0)?;
    }
    out.flush()?;

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        hist.write_csv(BufWriter::new(f))
            .map_err(|e| bitcount_cli_error("writing csv", e))?;
        info!("wrote {}", path.display());
    }
    if let Some(path) = &args.json {
        let f = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        let report = Report::new(
            config.bitfield_size,
            config.num_trials,
            config.seed_decimal(),
            &hist,
        );
        report
            .write_json(BufWriter::new(f))
            .map_err(|e| bitcount_cli_error("writing json", e))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
