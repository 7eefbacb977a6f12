use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// taste-tailor - Menu browsing and taste-based recommendations
#[derive(Parser)]
#[command(name = "taste-tailor")]
#[command(about = "Browse the menu catalog and rank past orders by taste", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort the menu catalog
    Browse(cli::BrowseArgs),
    /// Rank past orders by taste affinity
    Recommend {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Price a cart built from catalog items
    Checkout {
        /// Menu item to add, as ID or ID:QTY (repeatable)
        #[arg(long = "item", value_name = "ID[:QTY]")]
        items: Vec<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = taste_tailor::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    taste_tailor::observability::init_observability(
        "taste-tailor",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Browse(args) => cli::browse(config, args),
        Commands::Recommend { json } => cli::recommend(config, json),
        Commands::Checkout { items, json } => cli::checkout(config, items, json),
    }
}
