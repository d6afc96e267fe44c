use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::core::files::importer::DEFAULT_EXTENSIONS;
use crate::error::{ConfigError, Result};

pub mod env;
pub mod validation;

use self::env::{EnvParser, EnvVars};
use self::validation::ConfigValidator;

pub const CONFIG_KEYS: &[(&str, &str)] = &[
    ("database_path", "SQLite database file"),
    ("lyrics_extensions", "Comma-separated file extensions picked up by import"),
    ("server_host", "Address the HTTP API binds to"),
    ("server_port", "Port the HTTP API listens on"),
];

fn default_lyrics_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file path
    pub database_path: PathBuf,

    /// Extensions of files treated as lyrics during import
    #[serde(default = "default_lyrics_extensions")]
    pub lyrics_extensions: Vec<String>,

    /// HTTP API bind address
    #[serde(default = "default_server_host")]
    pub server_host: String,

    /// HTTP API port
    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        // Use /data only when explicitly running under Docker (DOCKER env var)
        let default_data_path = if EnvParser::is_present(EnvVars::DOCKER) {
            PathBuf::from("/data")
        } else {
            match ProjectDirs::from("net", "lyricsdb", "lyricsdb") {
                Some(project_dirs) => project_dirs.data_dir().to_path_buf(),
                None => {
                    warn!("ProjectDirs unavailable; falling back to current directory for data path");
                    PathBuf::from(".")
                }
            }
        };

        Self {
            database_path: default_data_path.join("lyrics.db"),
            lyrics_extensions: default_lyrics_extensions(),
            server_host: default_server_host(),
            server_port: default_server_port(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists (for Docker and development)
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        let config_file = Self::resolve_path(config_path)?;

        if config_file.exists() {
            debug!("Reading configuration from {}", config_file.display());
            let content = fs::read_to_string(&config_file)?;
            config = toml::from_str(&content)?;
        }

        // Environment variables have the highest priority
        config.load_from_env()?;
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    fn load_from_env(&mut self) -> Result<()> {
        if let Some(db_path) = EnvParser::parse_path(EnvVars::DATABASE_PATH, false)? {
            self.database_path = db_path;
        }

        if let Some(extensions) = EnvParser::parse_list(EnvVars::LYRICS_EXTENSIONS)? {
            self.lyrics_extensions = extensions;
        }

        if let Some(host) = EnvParser::parse_string(EnvVars::SERVER_HOST, None)? {
            self.server_host = host;
        }

        if let Some(port) = EnvParser::parse_u64(EnvVars::SERVER_PORT, 1, u16::MAX as u64)? {
            self.server_port = port as u16;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_db_path(&self.database_path)?;
        ConfigValidator::validate_extensions(&self.lyrics_extensions)?;
        ConfigValidator::validate_range(self.server_port, 1, u16::MAX, "server_port")?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("net", "lyricsdb", "lyricsdb")
            .ok_or(ConfigError::NoProjectDirs)?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Config file location: the explicit `--config` path, else the platform default.
    pub fn resolve_path(config_path: Option<&str>) -> Result<PathBuf> {
        match config_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match key {
            "database_path" => self.database_path.display().to_string(),
            "lyrics_extensions" => self.lyrics_extensions.join(","),
            "server_host" => self.server_host.clone(),
            "server_port" => self.server_port.to_string(),
            _ => return Err(ConfigError::UnknownKey { key: key.to_string() }.into()),
        };
        Ok(value)
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "database_path" => self.database_path = PathBuf::from(value),
            "lyrics_extensions" => self.lyrics_extensions = EnvParser::split_list(value),
            "server_host" => self.server_host = value.trim().to_string(),
            "server_port" => self.server_port = value.trim().parse().map_err(|_| invalid())?,
            _ => return Err(ConfigError::UnknownKey { key: key.to_string() }.into()),
        }

        self.validate()
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LyricsDbError;
    use tempfile::TempDir;

    fn sample() -> Config {
        Config {
            database_path: PathBuf::from("/tmp/lyricsdb-test/lyrics.db"),
            lyrics_extensions: default_lyrics_extensions(),
            server_host: default_server_host(),
            server_port: default_server_port(),
        }
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let dir = TempDir::new().unwrap();
        let config_file = dir.path().join("config.toml");
        let db_path = dir.path().join("data").join("library.db");
        fs::write(&config_file, format!("database_path = {:?}\n", db_path)).unwrap();

        let config = Config::load(config_file.to_str()).unwrap();

        assert_eq!(config.database_path, db_path);
        assert_eq!(config.lyrics_extensions, vec!["txt"]);
        assert_eq!(config.server_port, 8000);
        assert!(db_path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = sample();
        config.database_path = dir.path().join("lyrics.db");
        config.set_value("server_port", "9090").unwrap();
        config.save(&path).unwrap();

        let reloaded: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded.server_port, 9090);
        assert_eq!(reloaded.database_path, config.database_path);
    }

    #[test]
    fn test_get_and_set_values() {
        let mut config = sample();
        config.set_value("lyrics_extensions", "txt, lyrics").unwrap();
        assert_eq!(config.get_value("lyrics_extensions").unwrap(), "txt,lyrics");
        assert_eq!(config.server_address(), "127.0.0.1:8000");

        assert!(matches!(
            config.set_value("server_port", "not-a-port"),
            Err(LyricsDbError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(matches!(
            config.get_value("nope"),
            Err(LyricsDbError::Config(ConfigError::UnknownKey { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_database_extension() {
        let mut config = sample();
        config.database_path = PathBuf::from("lyrics.txt");
        assert!(config.validate().is_err());
    }
}
