#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, InfoStrategy, InitInput, InitStrategy, ScanInput, ScanStrategy, SummaryInput,
    SummaryStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "fundtrace")]
#[command(about = "Extract candidate financial transactions from a text corpus", long_about = None)]
struct Cli {
    /// Config file (default: ~/fundtrace/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the corpus and write the transaction table
    Scan {
        /// Corpus CSV to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Transaction table to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scan only the first N documents
        #[arg(short, long)]
        limit: Option<usize>,

        /// Entity model file
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Process documents on one thread
        #[arg(long)]
        sequential: bool,
    },
    /// Summarize a transaction table by primary entity
    Summary {
        /// Transaction table to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Keep records whose entities contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Number of entities to show (5-100)
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// Initialize configuration
    Init {
        /// Install the default entity model instead
        #[arg(long)]
        model: bool,
    },
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Scan {
            input,
            output,
            limit,
            model,
            sequential,
        } => {
            ScanStrategy
                .execute(ScanInput {
                    config: cli.config,
                    input,
                    output,
                    limit,
                    model,
                    sequential,
                })
                .await?;
        }
        Commands::Summary { input, search, top } => {
            SummaryStrategy
                .execute(SummaryInput {
                    config: cli.config,
                    input,
                    search,
                    top,
                })
                .await?;
        }
        Commands::Init { model } => {
            InitStrategy
                .execute(InitInput {
                    config: cli.config,
                    model,
                })
                .await?;
        }
        Commands::Info => InfoStrategy.execute(cli.config).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
