//! Core CLI commands for essential operations
//!
//! This module contains the commands users need day to day: importing lyrics
//! directories and looking records up again.

pub mod import;
pub mod list;
pub mod output;
pub mod search;
pub mod show;
