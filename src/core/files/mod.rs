//! File operations and content processing
//!
//! This module contains functionality for working with lyrics files:
//! - Title/artist extraction from file content and names
//! - Directory import into a repository

pub mod importer;
pub mod metadata;

// Re-export main types
pub use importer::{ImportStatus, ImportSummary, Importer};
