//! Far Horizons CLI
//!
//! Operator commands for the turn engine. The one command with teeth is
//! `update golden rng`, which rewrites the RNG golden fixture files —
//! run it only when a behavioral drift is intentional, since the test
//! suite treats those files as frozen.
//!
//! # Usage
//!
//! ```bash
//! fh version
//! fh version --verbose
//! fh update golden rng
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fh_engine::rng::{generate_golden_intn, generate_golden_uint64};

const VERSION: &str = "0.1.0";
const PRE_RELEASE: &str = "alpha";

/// Seed and draw counts are published alongside the fixtures; changing any
/// of them invalidates every downstream compatibility claim.
const GOLDEN_SEED: u64 = 0xDEADBEEF;
const GOLDEN_UINT64_COUNT: usize = 100;
const GOLDEN_INTN_BOUND: i64 = 8;
const GOLDEN_INTN_COUNT: usize = 1024;

#[derive(Parser)]
#[command(name = "fh")]
#[command(about = "Far Horizons turn engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the version number of fh
    Version {
        /// Include pre-release metadata
        #[arg(short, long)]
        verbose: bool,
    },

    /// Update various things
    Update {
        #[command(subcommand)]
        target: UpdateTarget,
    },
}

#[derive(Subcommand)]
enum UpdateTarget {
    /// Update golden test files
    Golden {
        #[command(subcommand)]
        what: GoldenTarget,
    },
}

#[derive(Subcommand)]
enum GoldenTarget {
    /// Update RNG golden files
    Rng,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Version { verbose } => {
            if verbose {
                println!("{}-{}", VERSION, PRE_RELEASE);
            } else {
                println!("{}", VERSION);
            }
            Ok(())
        }
        Command::Update {
            target: UpdateTarget::Golden { what: GoldenTarget::Rng },
        } => update_rng_golden(),
    }
}

/// Rewrite both RNG golden fixture files from the published seed.
fn update_rng_golden() -> Result<(), Box<dyn std::error::Error>> {
    let testdata = Path::new("engine").join("tests").join("testdata");
    fs::create_dir_all(&testdata)?;

    let numbers = generate_golden_uint64(GOLDEN_SEED, GOLDEN_UINT64_COUNT);
    let path = testdata.join("algorithm_m.golden");
    write_lines(&path, numbers.iter().map(|n| n.to_string()))?;
    tracing::info!(path = %path.display(), draws = GOLDEN_UINT64_COUNT, "updated golden file");

    let numbers = generate_golden_intn(GOLDEN_SEED, GOLDEN_INTN_BOUND, GOLDEN_INTN_COUNT);
    let path = testdata.join("algorithm_m_intn8.golden");
    write_lines(&path, numbers.iter().map(|n| n.to_string()))?;
    tracing::info!(path = %path.display(), draws = GOLDEN_INTN_COUNT, "updated golden file");

    println!("Updated RNG golden files");
    Ok(())
}

fn write_lines(
    path: &Path,
    lines: impl Iterator<Item = String>,
) -> Result<(), std::io::Error> {
    let mut body = String::new();
    for line in lines {
        body.push_str(&line);
        body.push('\n');
    }
    fs::write(path, body)
}
