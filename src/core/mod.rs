//! Core functionality modules
//!
//! This module contains the business logic organized into logical layers:
//! - `record`: Domain types for stored lyrics
//! - `data`: SQLite persistence
//! - `files`: Lyrics file parsing and directory import

pub mod data;
pub mod files;
pub mod record;
