use globwalk::{FileType, GlobWalkerBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::files::metadata::resolve_metadata;
use crate::core::record::{LyricRecord, NewLyricRecord};
use crate::error::{ImportError, Result};
use crate::services::repository::LyricsRepository;

pub const DEFAULT_EXTENSIONS: &[&str] = &["txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    Completed,
    DirectoryNotFound,
    NoFilesFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub filename: String,
    pub reason: String,
}

/// Outcome of one import run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub directory: PathBuf,
    pub status: ImportStatus,
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<FileFailure>,
}

impl ImportSummary {
    fn empty(directory: &Path, status: ImportStatus) -> Self {
        Self {
            directory: directory.to_path_buf(),
            status,
            total: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn failed_filenames(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.filename.as_str()).collect()
    }
}

pub struct Importer {
    repository: Arc<dyn LyricsRepository>,
    extensions: Vec<String>,
}

impl Importer {
    #[cfg(test)]
    pub fn new(repository: Arc<dyn LyricsRepository>) -> Self {
        Self::with_extensions(repository, DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }

    pub fn with_extensions(repository: Arc<dyn LyricsRepository>, extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { repository, extensions }
    }

    /// Import every lyrics file directly inside `directory`.
    ///
    /// Never fails: a missing directory, an empty directory and per-file
    /// errors all end up in the returned summary.
    pub async fn import_directory(&self, directory: &Path) -> ImportSummary {
        if !directory.is_dir() {
            warn!("Directory not found: {}", directory.display());
            return ImportSummary::empty(directory, ImportStatus::DirectoryNotFound);
        }

        let files = match self.find_lyrics_files(directory) {
            Ok(files) => files,
            Err(e) => {
                warn!("Failed to list {}: {}", directory.display(), e);
                return ImportSummary::empty(directory, ImportStatus::NoFilesFound);
            }
        };

        if files.is_empty() {
            info!("No lyrics files found in {}", directory.display());
            return ImportSummary::empty(directory, ImportStatus::NoFilesFound);
        }

        info!("Found {} files to import from {}", files.len(), directory.display());

        let mut summary = ImportSummary::empty(directory, ImportStatus::Completed);
        summary.total = files.len();

        for path in &files {
            let filename = file_name(path);
            match self.import_file(path).await {
                Ok(record) => {
                    debug!("Imported {} as #{}", record.display_name(), record.id);
                    summary.succeeded += 1;
                }
                Err(e) => {
                    warn!("Failed to import {}: {}", filename, e);
                    summary.failures.push(FileFailure {
                        filename,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Imported {}/{} files from {}",
            summary.succeeded,
            summary.total,
            directory.display()
        );
        summary
    }

    /// Read, parse and store a single file.
    pub async fn import_file(&self, path: &Path) -> std::result::Result<LyricRecord, ImportError> {
        let bytes = std::fs::read(path).map_err(ImportError::Read)?;
        let content = String::from_utf8(bytes).map_err(ImportError::Decode)?;

        let filename = file_name(path);
        let resolved = resolve_metadata(&content, &filename);
        let record = NewLyricRecord::new(resolved.title, resolved.artist, resolved.lyrics, filename);

        let id = self
            .repository
            .insert(&record)
            .await
            .map_err(|e| ImportError::Storage(e.to_string()))?;

        Ok(record.with_id(id))
    }

    fn find_lyrics_files(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let pattern = match self.extensions.as_slice() {
            [single] => format!("*.{}", single),
            many => format!("*.{{{}}}", many.join(",")),
        };
        debug!("Scanning {} for {}", directory.display(), pattern);

        let walker = GlobWalkerBuilder::from_patterns(directory, &[pattern.as_str()])
            .max_depth(1)
            .case_insensitive(true)
            .file_type(FileType::FILE)
            .build()?;

        let mut files: Vec<PathBuf> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.into_path()),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(files)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Database;
    use crate::error::LyricsDbError;
    use crate::services::repository::MemoryRepository;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn sample_library() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(&dir, "Queen - Bohemian Rhapsody.txt", b"Is this the real life?\nIs this just fantasy?\n");
        write(&dir, "love.txt", b"Title: Love Story\nArtist: Taylor Swift\n\nWe were both young\n");
        write(&dir, "Imagine.txt", b"Imagine there's no heaven\n");
        write(&dir, "Bohemian_Rhapsody.txt", b"Caught in a landslide\n");
        dir
    }

    struct FailingRepository;

    #[async_trait::async_trait]
    impl LyricsRepository for FailingRepository {
        async fn insert(&self, _record: &NewLyricRecord) -> Result<i64> {
            Err(LyricsDbError::Validation("storage offline".to_string()))
        }
        async fn get(&self, _id: i64) -> Result<Option<LyricRecord>> {
            Ok(None)
        }
        async fn find_by_title(&self, _query: &str) -> Result<Vec<LyricRecord>> {
            Ok(Vec::new())
        }
        async fn find_by_artist(&self, _query: &str) -> Result<Vec<LyricRecord>> {
            Ok(Vec::new())
        }
        async fn list_all(&self) -> Result<Vec<LyricRecord>> {
            Ok(Vec::new())
        }
        async fn update(&self, _id: i64, _record: &NewLyricRecord) -> Result<bool> {
            Ok(false)
        }
        async fn delete(&self, _id: i64) -> Result<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_import_all_valid_files() {
        let dir = sample_library();
        let repo = Arc::new(MemoryRepository::new());
        let importer = Importer::new(repo.clone());

        let summary = importer.import_directory(dir.path()).await;

        assert_eq!(summary.status, ImportStatus::Completed);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 4);
        assert!(summary.failures.is_empty());

        let mut stored: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.source_filename)
            .collect();
        stored.sort();
        let mut listed: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        listed.sort();
        assert_eq!(stored, listed);
    }

    #[tokio::test]
    async fn test_imported_fields_follow_resolution_rules() {
        let dir = sample_library();
        let repo = Arc::new(MemoryRepository::new());
        Importer::new(repo.clone()).import_directory(dir.path()).await;

        let love = &repo.find_by_title("love").await.unwrap()[0];
        assert_eq!(love.title, "Love Story");
        assert_eq!(love.artist.as_deref(), Some("Taylor Swift"));
        assert_eq!(love.lyrics, "We were both young");
        assert_eq!(love.source_filename, "love.txt");

        let queen = &repo.find_by_artist("queen").await.unwrap()[0];
        assert_eq!(queen.title, "Bohemian Rhapsody");
        assert_eq!(queen.lyrics, "Is this the real life?\nIs this just fantasy?\n");

        let split = &repo.find_by_artist("bohemian").await.unwrap()[0];
        assert_eq!(split.title, "Rhapsody");

        let imagine = &repo.find_by_title("imagine").await.unwrap()[0];
        assert_eq!(imagine.artist, None);
    }

    #[tokio::test]
    async fn test_reimport_creates_duplicates() {
        let dir = sample_library();
        let repo = Arc::new(MemoryRepository::new());
        let importer = Importer::new(repo.clone());

        importer.import_directory(dir.path()).await;
        let second = importer.import_directory(dir.path()).await;

        assert_eq!(second.succeeded, 4);
        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 8);
        let imagines: Vec<i64> = all
            .iter()
            .filter(|r| r.source_filename == "Imagine.txt")
            .map(|r| r.id)
            .collect();
        assert_eq!(imagines.len(), 2);
        assert_ne!(imagines[0], imagines[1]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_file_is_isolated() {
        let dir = sample_library();
        write(&dir, "corrupt.txt", &[0x66, 0x6f, 0xff, 0xfe, 0x6f]);
        let repo = Arc::new(MemoryRepository::new());

        let summary = Importer::new(repo.clone()).import_directory(dir.path()).await;

        assert_eq!(summary.total, 5);
        assert_eq!(summary.succeeded, 4);
        assert_eq!(summary.failed_filenames(), vec!["corrupt.txt"]);
        assert!(summary.failures[0].reason.contains("UTF-8"));
        assert_eq!(repo.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_failed_filenames_follow_processing_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "echo.txt", &[0xff, 0x00]);
        write(&dir, "delta.txt", b"fine");
        write(&dir, "alpha.txt", &[0xc3, 0x28]);
        write(&dir, "charlie.txt", &[0x80]);
        write(&dir, "bravo.txt", b"also fine");
        let repo = Arc::new(MemoryRepository::new());

        let summary = Importer::new(repo.clone()).import_directory(dir.path()).await;

        assert_eq!(summary.total, 5);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed_filenames(), vec!["alpha.txt", "charlie.txt", "echo.txt"]);
        let stored: Vec<String> = repo.list_all().await.unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(stored, vec!["bravo", "delta"]);
    }

    #[tokio::test]
    async fn test_whitespace_stem_is_kept_as_title() {
        let dir = TempDir::new().unwrap();
        write(&dir, "   .txt", b"just words");
        write(&dir, "Song.txt", b"Title:    \nla");
        let repo = Arc::new(MemoryRepository::new());

        let summary = Importer::new(repo.clone()).import_directory(dir.path()).await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);
        assert!(summary.failures.is_empty());

        let all = repo.list_all().await.unwrap();
        let blank = all.iter().find(|r| r.source_filename == "   .txt").unwrap();
        assert_eq!(blank.title, "   ");
        assert_eq!(blank.lyrics, "just words");
        let song = all.iter().find(|r| r.source_filename == "Song.txt").unwrap();
        assert_eq!(song.title, "Song");
        assert_eq!(song.lyrics, "Title:    \nla");
    }

    #[tokio::test]
    async fn test_storage_failures_do_not_abort_batch() {
        let dir = sample_library();
        let summary = Importer::new(Arc::new(FailingRepository)).import_directory(dir.path()).await;

        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failures.len(), 4);
        assert!(summary.failures.iter().all(|f| f.reason.contains("storage offline")));
    }

    #[tokio::test]
    async fn test_missing_directory_is_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let repo = Arc::new(MemoryRepository::new());

        let summary = Importer::new(repo.clone()).import_directory(&missing).await;

        assert_eq!(summary.status, ImportStatus::DirectoryNotFound);
        assert_eq!(summary.total, 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_file_path_is_not_a_directory() {
        let dir = sample_library();
        let file = dir.path().join("Imagine.txt");
        let summary = Importer::new(Arc::new(MemoryRepository::new())).import_directory(&file).await;
        assert_eq!(summary.status, ImportStatus::DirectoryNotFound);
    }

    #[tokio::test]
    async fn test_directory_without_lyrics_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "cover.jpg", b"not lyrics");
        write(&dir, "notes.md", b"# notes");

        let summary = Importer::new(Arc::new(MemoryRepository::new())).import_directory(dir.path()).await;

        assert_eq!(summary.status, ImportStatus::NoFilesFound);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.succeeded, 0);
    }

    #[tokio::test]
    async fn test_scan_is_not_recursive_and_ignores_case() {
        let dir = TempDir::new().unwrap();
        write(&dir, "LOUD.TXT", b"Title: Loud\nHEY");
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("hidden.txt"), b"deep").unwrap();

        let repo = Arc::new(MemoryRepository::new());
        let summary = Importer::new(repo.clone()).import_directory(dir.path()).await;

        assert_eq!(summary.total, 1);
        assert_eq!(repo.list_all().await.unwrap()[0].title, "Loud");
    }

    #[tokio::test]
    async fn test_custom_extensions() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.lyrics", b"one");
        write(&dir, "b.txt", b"two");
        write(&dir, "c.md", b"three");

        let importer = Importer::with_extensions(
            Arc::new(MemoryRepository::new()),
            vec![".lyrics".to_string(), "TXT".to_string()],
        );
        let summary = importer.import_directory(dir.path()).await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);
    }

    #[tokio::test]
    async fn test_import_into_sqlite() {
        let dir = sample_library();
        let db = Arc::new(Database::open_in_memory().unwrap());

        let summary = Importer::new(db.clone()).import_directory(dir.path()).await;

        assert_eq!(summary.succeeded, 4);
        assert_eq!(db.find_by_title("LOVE").await.unwrap().len(), 1);
    }
}
