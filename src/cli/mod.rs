//! Command Line Interface module
//!
//! This module contains all CLI commands organized into logical submodules:
//! - `core`: Essential operations (import, search, show, list)
//! - `operations`: Long-running operations (serve)
//! - `management`: Configuration

pub mod core;
pub mod management;
pub mod operations;

// Re-export all commands for convenience
pub use self::core::*;
pub use operations::*;
