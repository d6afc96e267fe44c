//! SQLite storage for lyric records
//!
//! One table holds every record. Lowercased copies of `title` and `artist` are
//! stored alongside the originals so substring search can be case-insensitive
//! for non-ASCII text as well, which SQLite's built-in `lower()` is not.

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::core::record::{LyricRecord, NewLyricRecord};
use crate::error::{DatabaseError, Result};
use crate::services::repository::LyricsRepository;

const CURRENT_DB_VERSION: u32 = 1;

const SELECT_COLUMNS: &str = "SELECT id, title, artist, lyrics, source_filename FROM lyrics";

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        info!("Opening database at: {}", db_path.display());

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path).map_err(DatabaseError::Connection)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Self::from_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::Connection)?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        let existing_user_version: u32 =
            conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if existing_user_version < CURRENT_DB_VERSION {
            Self::create_schema(&mut conn, existing_user_version)?;
        }

        Ok(Database { conn: Mutex::new(conn) })
    }

    fn create_schema(conn: &mut Connection, existing_version: u32) -> Result<()> {
        debug!("Creating schema (user_version {} -> {})", existing_version, CURRENT_DB_VERSION);

        let tx = conn.transaction()?;
        tx.pragma_update(None, "user_version", CURRENT_DB_VERSION)?;
        tx.execute_batch(r#"
            CREATE TABLE IF NOT EXISTS lyrics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                title_lower TEXT NOT NULL,
                artist TEXT,
                artist_lower TEXT,
                lyrics TEXT NOT NULL,
                source_filename TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_lyrics_title_lower ON lyrics(title_lower);
            CREATE INDEX IF NOT EXISTS idx_lyrics_artist_lower ON lyrics(artist_lower);
        "#)?;
        tx.commit()?;

        info!("Database schema ready");
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DatabaseError::LockPoisoned.into())
    }

    fn query_records(&self, sql: &str, needle: Option<&str>) -> Result<Vec<LyricRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = match needle {
            Some(needle) => stmt.query_map(params![needle.to_lowercase()], map_row)?,
            None => stmt.query_map([], map_row)?,
        };
        let records = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<LyricRecord> {
    Ok(LyricRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        artist: row.get(2)?,
        lyrics: row.get(3)?,
        source_filename: row.get(4)?,
    })
}

#[async_trait::async_trait]
impl LyricsRepository for Database {
    async fn insert(&self, record: &NewLyricRecord) -> Result<i64> {
        record.validate()?;
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO lyrics (title, title_lower, artist, artist_lower, lyrics, source_filename)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.title,
                record.title.to_lowercase(),
                record.artist,
                record.artist.as_deref().map(str::to_lowercase),
                record.lyrics,
                record.source_filename,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<LyricRecord>> {
        let conn = self.lock()?;
        let record = conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![id], map_row)
            .optional()?;
        Ok(record)
    }

    async fn find_by_title(&self, query: &str) -> Result<Vec<LyricRecord>> {
        self.query_records(
            &format!("{} WHERE instr(title_lower, ?1) > 0 ORDER BY id", SELECT_COLUMNS),
            Some(query),
        )
    }

    async fn find_by_artist(&self, query: &str) -> Result<Vec<LyricRecord>> {
        self.query_records(
            &format!("{} WHERE instr(artist_lower, ?1) > 0 ORDER BY id", SELECT_COLUMNS),
            Some(query),
        )
    }

    async fn list_all(&self) -> Result<Vec<LyricRecord>> {
        self.query_records(&format!("{} ORDER BY id", SELECT_COLUMNS), None)
    }

    async fn update(&self, id: i64, record: &NewLyricRecord) -> Result<bool> {
        record.validate()?;
        let conn = self.lock()?;
        let changed = conn.execute(
            r#"
            UPDATE lyrics
            SET title = ?1, title_lower = ?2, artist = ?3, artist_lower = ?4,
                lyrics = ?5, source_filename = ?6, updated_at = CURRENT_TIMESTAMP
            WHERE id = ?7
            "#,
            params![
                record.title,
                record.title.to_lowercase(),
                record.artist,
                record.artist.as_deref().map(str::to_lowercase),
                record.lyrics,
                record.source_filename,
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM lyrics WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    async fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM lyrics", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
