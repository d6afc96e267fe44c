//! Domain types for stored lyrics.
//!
//! These are plain data carriers with no knowledge of how they are persisted;
//! the SQLite row mapping lives in `core::data::database`.

use serde::{Deserialize, Serialize};

use crate::error::{LyricsDbError, Result};

/// A persisted song entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricRecord {
    pub id: i64,
    pub title: String,
    pub artist: Option<String>,
    pub lyrics: String,
    pub source_filename: String,
}

/// Payload for creating or replacing a record. The repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLyricRecord {
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    pub lyrics: String,
    pub source_filename: String,
}

impl NewLyricRecord {
    pub fn new(
        title: impl Into<String>,
        artist: Option<String>,
        lyrics: impl Into<String>,
        source_filename: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist,
            lyrics: lyrics.into(),
            source_filename: source_filename.into(),
        }
    }

    /// Reject payloads that would break the non-empty title invariant.
    ///
    /// A whitespace-only title is allowed here: an import falls back to the
    /// filename stem verbatim, and `"   .txt"` has the stem `"   "`.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(LyricsDbError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Stricter check for records typed in by a client, where a blank title
    /// is always a mistake.
    pub fn validate_submitted(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(LyricsDbError::Validation("title must not be blank".to_string()));
        }
        self.validate()
    }

    pub fn with_id(self, id: i64) -> LyricRecord {
        LyricRecord {
            id,
            title: self.title,
            artist: self.artist,
            lyrics: self.lyrics,
            source_filename: self.source_filename,
        }
    }
}

impl LyricRecord {
    /// Display label in the `Artist - Title` form used by the CLI.
    pub fn display_name(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} - {}", artist, self.title),
            None => self.title.clone(),
        }
    }
}
