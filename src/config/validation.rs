use std::path::Path;
use crate::error::{Result, LyricsDbError};

/// Centralized configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate numeric range
    pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(LyricsDbError::Validation(format!(
                "{} must be between {} and {}, got {}",
                field_name, min, max, value
            )));
        }
        Ok(())
    }

    /// Validate database file extension
    pub fn validate_db_path(path: &Path) -> Result<()> {
        if let Some(ext) = path.extension() {
            if ext != "db" && ext != "sqlite" && ext != "sqlite3" {
                return Err(LyricsDbError::Validation(format!(
                    "Database file should have .db, .sqlite, or .sqlite3 extension, got: {}",
                    path.display()
                )));
            }
        } else {
            return Err(LyricsDbError::Validation(format!(
                "Database file should have an extension (.db, .sqlite, .sqlite3), got: {}",
                path.display()
            )));
        }
        Ok(())
    }

    /// Validate the list of lyrics file extensions used by import
    pub fn validate_extensions(extensions: &[String]) -> Result<()> {
        if extensions.is_empty() {
            return Err(LyricsDbError::Validation(
                "At least one lyrics file extension is required".to_string(),
            ));
        }

        for ext in extensions {
            let bare = ext.trim_start_matches('.');
            if bare.is_empty() || bare.chars().any(|c| !c.is_ascii_alphanumeric()) {
                return Err(LyricsDbError::Validation(format!(
                    "Invalid lyrics file extension: '{}'",
                    ext
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_range() {
        assert!(ConfigValidator::validate_range(5u64, 1u64, 10u64, "test").is_ok());
        assert!(ConfigValidator::validate_range(15u64, 1u64, 10u64, "test").is_err());
        assert!(ConfigValidator::validate_range(0u16, 1u16, u16::MAX, "port").is_err());
    }

    #[test]
    fn test_validate_db_path() {
        assert!(ConfigValidator::validate_db_path(&PathBuf::from("test.db")).is_ok());
        assert!(ConfigValidator::validate_db_path(&PathBuf::from("test.sqlite")).is_ok());
        assert!(ConfigValidator::validate_db_path(&PathBuf::from("test.sqlite3")).is_ok());
        assert!(ConfigValidator::validate_db_path(&PathBuf::from("test.txt")).is_err());
        assert!(ConfigValidator::validate_db_path(&PathBuf::from("test")).is_err());
    }

    #[test]
    fn test_validate_extensions() {
        assert!(ConfigValidator::validate_extensions(&["txt".to_string(), ".lyrics".to_string()]).is_ok());
        assert!(ConfigValidator::validate_extensions(&[]).is_err());
        assert!(ConfigValidator::validate_extensions(&["t*t".to_string()]).is_err());
        assert!(ConfigValidator::validate_extensions(&[".".to_string()]).is_err());
    }
}
