//! Data layer modules
//!
//! SQLite storage for the lyrics library.

pub mod database;

pub use database::Database;
