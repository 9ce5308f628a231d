mod collect;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sellermail")]
#[command(about = "Seller contact enrichment for brand datasets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process every brand in an input file sequentially
    Batch {
        /// Input JSON: a brand array or a previous run's result file
        input: PathBuf,

        /// Override the pause between brands, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Override the number of brands between checkpoints
        #[arg(long)]
        batch_size: Option<usize>,

        /// Override the post-checkpoint rest, in milliseconds
        #[arg(long)]
        rest_ms: Option<u64>,
    },
    /// Enrich a single brand given by name
    Single {
        primary_name: String,

        /// Fallback name to search when the primary finds nothing
        alternate_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = sellermail_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Batch {
            input,
            delay_ms,
            batch_size,
            rest_ms,
        } => {
            if let Some(delay) = delay_ms {
                config.inter_item_delay_ms = delay;
            }
            if let Some(size) = batch_size {
                config.checkpoint_batch_size = size;
            }
            if let Some(rest) = rest_ms {
                config.rest_duration_ms = rest;
            }
            collect::run_batch_command(&config, &input).await
        }
        Commands::Single {
            primary_name,
            alternate_name,
        } => collect::run_single_command(&config, &primary_name, alternate_name.as_deref()).await,
    }
}
