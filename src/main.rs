use clap::{Parser, Subcommand};

mod api;
mod cli;
mod config;
mod core;
mod error;
mod services;
mod signal_handler;
mod utils;

use cli::*;
use config::Config;
use error::Result;
use services::SimpleServices;

#[derive(Parser)]
#[command(name = "lyricsdb")]
#[command(about = "Import plain-text lyrics files into a searchable SQLite library")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import every lyrics file in a directory
    Import(import::ImportArgs),

    /// Search lyrics by title or artist
    Search(search::SearchArgs),

    /// Show a single record with its lyrics
    Show(show::ShowArgs),

    /// List all records
    List(list::ListArgs),

    /// Run the HTTP API
    Serve(serve::ServeArgs),

    /// Show or change configuration
    Config(management::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;
    let services = SimpleServices::new(config);

    match cli.command {
        Commands::Import(args) => import::execute(args, &services).await,
        Commands::Search(args) => search::execute(args, &services).await,
        Commands::Show(args) => show::execute(args, &services).await,
        Commands::List(args) => list::execute(args, &services).await,
        Commands::Serve(args) => serve::execute(args, &services).await,
        Commands::Config(args) => {
            management::config::execute(args, &services.config(), cli.config.as_deref()).await
        }
    }
}
