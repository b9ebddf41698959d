//! MT19937 CLI - Reproduce and inspect random streams
//!
//! # Commands
//!
//! - `mt19937 draw --seed <n>` - Print variates from a seeded engine
//! - `mt19937 snapshot --seed <n> --output <file>` - Save engine state
//! - `mt19937 resume --input <file>` - Continue from a saved state
//! - `mt19937 pixels --seed <n> --stream <id>` - Summarise a pixel state table

use clap::{Args, Parser, Subcommand};
use mt19937_core_rs::{SeedConfig, Variate};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// MT19937 random stream tool
#[derive(Parser)]
#[command(name = "mt19937")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How to seed the engine (at most one; defaults to scalar 5489)
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Scalar seed
    #[arg(short, long, conflicts_with_all = ["key", "config"])]
    seed: Option<u32>,

    /// Seeding key, comma-separated words
    #[arg(short, long, value_delimiter = ',', conflicts_with = "config")]
    key: Option<Vec<u32>>,

    /// JSON seed config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl SeedArgs {
    pub fn resolve(&self) -> Result<SeedConfig> {
        if let Some(seed) = self.seed {
            return Ok(SeedConfig::Scalar { seed });
        }
        if let Some(key) = &self.key {
            let config = SeedConfig::Key { key: key.clone() };
            config.validate()?;
            return Ok(config);
        }
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            let json = std::fs::read_to_string(path)?;
            return Ok(SeedConfig::from_json(&json)?);
        }
        Ok(SeedConfig::default())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print variates from a freshly seeded engine
    Draw {
        #[command(flatten)]
        seed: SeedArgs,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output mapping (u32, int31, real1, real2, real3, res53)
        #[arg(short = 't', long, default_value = "u32")]
        variate: Variate,

        /// Raw words to discard before printing
        #[arg(long, default_value = "0")]
        skip: u64,
    },

    /// Save engine state as JSON
    Snapshot {
        #[command(flatten)]
        seed: SeedArgs,

        /// Raw words to discard before saving
        #[arg(long, default_value = "0")]
        skip: u64,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Continue drawing from a saved snapshot
    Resume {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of values to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output mapping (u32, int31, real1, real2, real3, res53)
        #[arg(short = 't', long, default_value = "u32")]
        variate: Variate,
    },

    /// Build a per-pixel state table for one stream and print its digest
    Pixels {
        /// Base seed shared by all streams
        #[arg(short, long, default_value = "5489")]
        seed: u32,

        /// Stream (camera) identifier
        #[arg(long, default_value = "0")]
        stream: u64,

        /// Table width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Table height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Draw {
            seed,
            count,
            variate,
            skip,
        } => commands::draw::run(&seed.resolve()?, count, variate, skip),
        Commands::Snapshot { seed, skip, output } => {
            commands::snapshot::run(&seed.resolve()?, skip, &output)
        }
        Commands::Resume {
            input,
            count,
            variate,
        } => commands::resume::run(&input, count, variate),
        Commands::Pixels {
            seed,
            stream,
            width,
            height,
        } => commands::pixels::run(seed, stream, width, height),
    }
}
