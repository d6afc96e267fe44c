//! Title/artist extraction from lyrics files
//!
//! Two sources are consulted: `Title:` / `Artist:` header lines at the top of
//! the file, and the `Artist - Title` style naming of the file itself. Nothing
//! here touches the file system.

use std::path::Path;

/// Number of leading lines inspected for header lines.
pub const HEADER_SCAN_LINES: usize = 5;

const TITLE_KEY: &str = "title:";
const ARTIST_KEY: &str = "artist:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMetadata {
    pub title: String,
    pub artist: Option<String>,
}

/// Fields ready to be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub title: String,
    pub artist: Option<String>,
    pub lyrics: String,
}

/// Parse header lines out of the first few lines of `content`.
///
/// The body starts after the last matched header line and is trimmed. When a
/// key appears more than once the later line wins.
pub fn extract_from_content(content: &str) -> ContentMetadata {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut title = None;
    let mut artist = None;
    let mut lyrics_start = 0;

    for (i, line) in lines.iter().take(HEADER_SCAN_LINES).enumerate() {
        let line = line.trim();
        let folded = line.to_lowercase();

        if folded.starts_with(TITLE_KEY) {
            title = Some(header_value(line));
            lyrics_start = lyrics_start.max(i + 1);
        } else if folded.starts_with(ARTIST_KEY) {
            artist = Some(header_value(line));
            lyrics_start = lyrics_start.max(i + 1);
        }
    }

    let body = lines[lyrics_start..].join("\n").trim().to_string();

    ContentMetadata { title, artist, body }
}

fn header_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Derive title and artist from a file name.
///
/// `Artist - Title.txt` is tried first, then `Artist_Title.txt`; anything else
/// is taken as a bare title. Only the first separator splits, so
/// `A - B - C.txt` yields artist `A` and title `B - C`.
pub fn extract_from_filename(filename: &str) -> FilenameMetadata {
    let stem = file_stem(filename);

    if let Some((artist, title)) = stem.split_once(" - ") {
        return FilenameMetadata {
            title: title.trim().to_string(),
            artist: Some(artist.trim().to_string()),
        };
    }

    if let Some((artist, title)) = stem.split_once('_') {
        return FilenameMetadata {
            title: title.trim().to_string(),
            artist: Some(artist.trim().to_string()),
        };
    }

    FilenameMetadata {
        title: stem.trim().to_string(),
        artist: None,
    }
}

/// File name without its last extension, falling back to the input itself.
pub fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Combine content and filename metadata into the fields of one record.
///
/// Header metadata is used only when it supplies a title. Otherwise both title
/// and artist come from the file name and the raw content becomes the lyrics
/// untouched; a header artist alone never survives this fallback. If every
/// source comes up empty the file stem is the title.
pub fn resolve_metadata(content: &str, filename: &str) -> ResolvedMetadata {
    let parsed = extract_from_content(content);

    let (title, artist, lyrics) = match parsed.title.filter(|t| !t.is_empty()) {
        Some(title) => (title, parsed.artist, parsed.body),
        None => {
            let from_name = extract_from_filename(filename);
            (from_name.title, from_name.artist, content.to_string())
        }
    };

    let title = if title.is_empty() { file_stem(filename) } else { title };

    ResolvedMetadata {
        title,
        artist: artist.filter(|a| !a.is_empty()),
        lyrics,
    }
}
