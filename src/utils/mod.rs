//! Utility modules for common functionality
//!
//! This module contains utility functions and helpers used throughout the application:
//! - `logging`: Logging configuration and setup
//! - `progress`: Progress bar utilities for consistent UI feedback

pub mod logging;
pub mod progress;
