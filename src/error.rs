//! Error handling for the lyricsdb application
//!
//! Errors are grouped by the layer that raises them. Per-file import failures
//! (`ImportError`) are caught by the importer and recorded in the run summary;
//! everything else propagates to the CLI or the HTTP layer.

use rusqlite::ffi;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyricsDbError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Lyrics record not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Query failed: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("Database corruption detected")]
    Corruption,

    #[error("Database connection lock poisoned")]
    LockPoisoned,
}

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globwalk::GlobError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Failed to determine project directories")]
    NoProjectDirs,
}

/// Failure of a single file during an import run.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("file is not valid UTF-8: {0}")]
    Decode(#[source] std::string::FromUtf8Error),

    #[error("failed to store record: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, LyricsDbError>;

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ffi::Error { code: ffi::ErrorCode::DatabaseCorrupt, .. }, _) => {
                DatabaseError::Corruption
            }
            _ => DatabaseError::Query(err),
        }
    }
}

impl From<rusqlite::Error> for LyricsDbError {
    fn from(err: rusqlite::Error) -> Self {
        LyricsDbError::Database(err.into())
    }
}

impl From<std::io::Error> for LyricsDbError {
    fn from(err: std::io::Error) -> Self {
        LyricsDbError::FileSystem(FileSystemError::Io(err))
    }
}

impl From<toml::de::Error> for LyricsDbError {
    fn from(err: toml::de::Error) -> Self {
        LyricsDbError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<toml::ser::Error> for LyricsDbError {
    fn from(err: toml::ser::Error) -> Self {
        LyricsDbError::Config(ConfigError::Serialize(err))
    }
}

impl From<serde_json::Error> for LyricsDbError {
    fn from(err: serde_json::Error) -> Self {
        LyricsDbError::Internal(err.into())
    }
}

impl From<globwalk::GlobError> for LyricsDbError {
    fn from(err: globwalk::GlobError) -> Self {
        LyricsDbError::FileSystem(FileSystemError::Pattern(err))
    }
}
