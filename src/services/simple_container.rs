use std::sync::Arc;
use crate::config::Config;
use crate::core::data::Database;
use crate::core::files::Importer;
use crate::error::Result;
use crate::services::query::QueryService;
use crate::services::repository::LyricsRepository;

pub struct SimpleServices {
    config: Arc<Config>,
}

impl SimpleServices {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Open the configured database. The connection closes when the last
    /// handle is dropped.
    pub fn create_repository(&self) -> Result<Arc<dyn LyricsRepository>> {
        let db = Database::open(&self.config.database_path)?;
        Ok(Arc::new(db))
    }

    pub fn create_importer(&self, repository: Arc<dyn LyricsRepository>) -> Importer {
        Importer::with_extensions(repository, self.config.lyrics_extensions.clone())
    }

    pub fn create_query_service(&self, repository: Arc<dyn LyricsRepository>) -> QueryService {
        QueryService::new(repository)
    }
}
