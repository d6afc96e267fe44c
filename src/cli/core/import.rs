use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::core::files::{ImportStatus, ImportSummary};
use crate::error::Result;
use crate::services::SimpleServices;
use crate::utils::progress::{ProgressMessages, ProgressUtils};

use super::output::output_json;

#[derive(Args)]
pub struct ImportArgs {
    /// Directory containing lyrics files
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: ImportArgs, services: &SimpleServices) -> Result<()> {
    info!("Importing lyrics from: {}", args.directory.display());

    // The connection lives for this run only and is closed when `repository` drops
    let repository = services.create_repository()?;
    let importer = services.create_importer(repository);

    let pb = ProgressUtils::create_import_spinner();
    pb.set_message(ProgressMessages::importing_directory(&args.directory.display().to_string()));

    let summary = importer.import_directory(&args.directory).await;

    if summary.failures.is_empty() && summary.status == ImportStatus::Completed {
        pb.finish_with_message(ProgressMessages::COMPLETED);
    } else if summary.succeeded == 0 {
        pb.finish_with_message(ProgressMessages::FAILED);
    } else {
        pb.finish_and_clear();
    }

    if args.json {
        return output_json(&summary);
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &ImportSummary) {
    match summary.status {
        ImportStatus::DirectoryNotFound => {
            println!("⚠️  Directory not found: {}", summary.directory.display());
        }
        ImportStatus::NoFilesFound => {
            println!("⚠️  No lyrics files found in {}", summary.directory.display());
        }
        ImportStatus::Completed => {
            println!("\n🎵 Import Complete!");
            println!("  📁 Directory: {}", summary.directory.display());
            println!("  📄 Files found: {}", summary.total);
            println!("  ✅ Imported: {}/{}", summary.succeeded, summary.total);

            let failed = summary.failed_filenames();
            if !failed.is_empty() {
                println!("  ❌ Failed: {} ({})", failed.len(), failed.join(", "));
                for failure in &summary.failures {
                    println!("     • {}: {}", failure.filename, failure.reason);
                }
            }

            if summary.succeeded > 0 {
                println!("\n📋 Next steps:");
                println!("  • Run 'lyricsdb list' to browse the library");
                println!("  • Run 'lyricsdb search \"love\"' to search by title");
            }
        }
    }
}
