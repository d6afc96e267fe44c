use clap::Args;
use tracing::info;

use crate::error::Result;
use crate::services::SimpleServices;

use super::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive substring)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Match against the artist instead of the title
    #[arg(short, long)]
    artist: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Limit number of results
    #[arg(long, default_value = "20")]
    limit: usize,
}

pub async fn execute(args: SearchArgs, services: &SimpleServices) -> Result<()> {
    let queries = services.create_query_service(services.create_repository()?);

    let mut results = if args.artist {
        queries.search_by_artist(&args.query).await?
    } else {
        queries.search_by_title(&args.query).await?
    };

    info!("Found {} result(s) matching '{}'", results.len(), args.query);

    if results.is_empty() && prints_empty_notice(args.format) {
        println!("No lyrics found matching '{}'", args.query);
        return Ok(());
    }

    results.truncate(args.limit);
    print_records(&results, args.format)
}

/// Machine-readable formats still print an (empty) document.
fn prints_empty_notice(format: OutputFormat) -> bool {
    format == OutputFormat::Table
}
