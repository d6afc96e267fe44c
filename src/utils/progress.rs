use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Centralized progress bar creation utilities
pub struct ProgressUtils;

impl ProgressUtils {
    /// Create a standard spinner for import operations
    pub fn create_import_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("valid spinner template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Common progress bar messages
pub struct ProgressMessages;

impl ProgressMessages {
    pub const COMPLETED: &'static str = "✅ Completed";
    pub const FAILED: &'static str = "❌ Failed";

    pub fn importing_directory(dir: &str) -> String {
        format!("📥 Importing: {}", dir)
    }
}
