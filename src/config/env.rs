use std::env;
use std::path::PathBuf;
use crate::error::{Result, LyricsDbError};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const DATABASE_PATH: &'static str = "LYRICSDB_DATABASE_PATH";
    pub const LYRICS_EXTENSIONS: &'static str = "LYRICSDB_LYRICS_EXTENSIONS";
    pub const SERVER_HOST: &'static str = "LYRICSDB_SERVER_HOST";
    pub const SERVER_PORT: &'static str = "LYRICSDB_SERVER_PORT";

    // Special environment variables
    pub const DOCKER: &'static str = "DOCKER";
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    /// Parse environment variable as string with validation
    pub fn parse_string(var_name: &str, validator: Option<fn(&str) -> Result<()>>) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    return Ok(None);
                }

                if let Some(validate_fn) = validator {
                    validate_fn(&trimmed)?;
                }

                Ok(Some(trimmed))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(LyricsDbError::Validation(format!(
                    "Environment variable {} contains invalid UTF-8",
                    var_name
                )))
            }
        }
    }

    /// Parse environment variable as PathBuf with validation
    pub fn parse_path(var_name: &str, should_exist: bool) -> Result<Option<PathBuf>> {
        if let Some(path_str) = Self::parse_string(var_name, None)? {
            let path = PathBuf::from(path_str);

            if should_exist && !path.exists() {
                return Err(LyricsDbError::Validation(format!(
                    "Path specified in {} does not exist: {}",
                    var_name,
                    path.display()
                )));
            }

            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Parse environment variable as u64 with range validation
    pub fn parse_u64(var_name: &str, min: u64, max: u64) -> Result<Option<u64>> {
        if let Some(value_str) = Self::parse_string(var_name, None)? {
            let value = value_str.parse::<u64>().map_err(|_| {
                LyricsDbError::Validation(format!(
                    "Invalid number in {}: '{}'. Must be a positive integer",
                    var_name, value_str
                ))
            })?;

            if value < min || value > max {
                return Err(LyricsDbError::Validation(format!(
                    "Value in {} must be between {} and {}, got {}",
                    var_name, min, max, value
                )));
            }

            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Parse a comma-separated environment variable
    pub fn parse_list(var_name: &str) -> Result<Option<Vec<String>>> {
        Ok(Self::parse_string(var_name, None)?.map(|value| Self::split_list(&value)))
    }

    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }

    /// Check if environment variable is present (for boolean flags)
    pub fn is_present(var_name: &str) -> bool {
        env::var(var_name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_u64() {
        env::set_var("TEST_LYRICSDB_U64_VALID", "42");
        env::set_var("TEST_LYRICSDB_U64_OUT_OF_RANGE", "150");
        env::set_var("TEST_LYRICSDB_U64_INVALID", "not_a_number");

        assert_eq!(EnvParser::parse_u64("TEST_LYRICSDB_U64_VALID", 1, 100).unwrap(), Some(42));
        assert!(EnvParser::parse_u64("TEST_LYRICSDB_U64_OUT_OF_RANGE", 1, 100).is_err());
        assert!(EnvParser::parse_u64("TEST_LYRICSDB_U64_INVALID", 1, 100).is_err());
        assert_eq!(EnvParser::parse_u64("TEST_LYRICSDB_U64_NOT_SET", 1, 100).unwrap(), None);

        env::remove_var("TEST_LYRICSDB_U64_VALID");
        env::remove_var("TEST_LYRICSDB_U64_OUT_OF_RANGE");
        env::remove_var("TEST_LYRICSDB_U64_INVALID");
    }

    #[test]
    fn test_parse_list() {
        env::set_var("TEST_LYRICSDB_LIST", " txt, lyrics ,,LRC ");
        env::set_var("TEST_LYRICSDB_LIST_BLANK", "   ");

        assert_eq!(
            EnvParser::parse_list("TEST_LYRICSDB_LIST").unwrap(),
            Some(vec!["txt".to_string(), "lyrics".to_string(), "LRC".to_string()])
        );
        assert_eq!(EnvParser::parse_list("TEST_LYRICSDB_LIST_BLANK").unwrap(), None);

        env::remove_var("TEST_LYRICSDB_LIST");
        env::remove_var("TEST_LYRICSDB_LIST_BLANK");
    }
}
