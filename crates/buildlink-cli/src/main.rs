mod args;
mod search;
mod sellers;

use buildlink_core::{Category, ALL_CATEGORIES_LABEL};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::args::{FilterArgs, LocationArgs, SourceArgs};

#[derive(Debug, Parser)]
#[command(name = "buildlink")]
#[command(about = "Browse the BuildLink building-materials marketplace")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search and filter the product catalog
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        source: SourceArgs,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the highest rated sellers
    Sellers {
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        source: SourceArgs,
        /// Maximum number of sellers to show; defaults to `BUILDLINK_TOP_SELLERS_LIMIT`
        #[arg(long)]
        limit: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show seller locations for the filtered catalog
    Map {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        location: LocationArgs,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List product categories
    Categories,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = buildlink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, catalog = %config.catalog_path.display(), "config loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            filters,
            location,
            source,
            json,
        }) => search::run_search(&config, &filters, &location, &source, json)?,
        Some(Commands::Sellers {
            location,
            source,
            limit,
            json,
        }) => sellers::run_sellers(&config, &location, &source, limit, json)?,
        Some(Commands::Map {
            filters,
            location,
            source,
        }) => search::run_map(&config, &filters, &location, &source)?,
        Some(Commands::Categories) => print_categories(),
        None => println!("buildlink: run with --help to see available commands"),
    }

    Ok(())
}

fn print_categories() {
    println!("{:<12}LABEL", "VALUE");
    println!("{:<12}{ALL_CATEGORIES_LABEL}", "\"\"");
    for category in Category::ALL {
        println!("{:<12}{}", category.as_str(), category.label());
    }
}
