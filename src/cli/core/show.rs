use clap::{Args, ValueEnum};

use crate::error::{LyricsDbError, Result};
use crate::services::SimpleServices;

use super::output::{output_json, print_record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    id: i64,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: ShowFormat,
}

pub async fn execute(args: ShowArgs, services: &SimpleServices) -> Result<()> {
    let queries = services.create_query_service(services.create_repository()?);
    let record = queries.get(args.id).await?.ok_or(LyricsDbError::NotFound)?;

    match args.format {
        ShowFormat::Json => output_json(&record),
        ShowFormat::Text => {
            print_record(&record);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        show: ShowArgs,
    }

    #[test]
    fn test_format_defaults_to_text() {
        let parsed = Harness::try_parse_from(["show", "7"]).unwrap();
        assert_eq!(parsed.show.id, 7);
        assert_eq!(parsed.show.format, ShowFormat::Text);
    }

    #[test]
    fn test_format_accepts_json_and_rejects_unknown() {
        let parsed = Harness::try_parse_from(["show", "7", "--format", "json"]).unwrap();
        assert_eq!(parsed.show.format, ShowFormat::Json);
        assert!(Harness::try_parse_from(["show", "7", "--format", "yaml"]).is_err());
        assert!(Harness::try_parse_from(["show", "7", "--json"]).is_err());
    }
}
