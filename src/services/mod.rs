//! Service layer for dependency injection
//!
//! - `LyricsRepository`: storage abstraction (SQLite in production, in-memory in tests)
//! - `QueryService`: read access layered over a repository
//! - `SimpleServices`: builds the services above from the loaded configuration

pub mod query;
pub mod repository;
pub mod simple_container;

pub use query::QueryService;
pub use repository::LyricsRepository;
pub use simple_container::SimpleServices;
