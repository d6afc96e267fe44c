use clap::Args;

use crate::error::Result;
use crate::services::SimpleServices;

use super::output::{print_records, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Limit number of results
    #[arg(long)]
    limit: Option<usize>,
}

pub async fn execute(args: ListArgs, services: &SimpleServices) -> Result<()> {
    let queries = services.create_query_service(services.create_repository()?);
    let mut records = queries.list_all().await?;

    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    print_records(&records, args.format)
}
