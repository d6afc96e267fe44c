//! Long-running operations
//!
//! - `serve`: the HTTP API over the library

pub mod serve;
