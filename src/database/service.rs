//! Database service layer
//!
//! Bundles the PostgreSQL repositories behind one pool and wires them into
//! a `LocalizationService`.

use std::sync::Arc;
use crate::config::LocalizationConfig;
use crate::database::{DatabasePool, PgLanguageRepository, PgLocaleResourceRepository};
use crate::services::LocalizationService;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub languages: PgLanguageRepository,
    pub resources: PgLocaleResourceRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            languages: PgLanguageRepository::new(pool.clone()),
            resources: PgLocaleResourceRepository::new(pool),
        }
    }

    /// Build a localization service backed by these repositories
    pub fn localization_service(&self, config: LocalizationConfig) -> LocalizationService {
        LocalizationService::new(
            Arc::new(self.languages.clone()),
            Arc::new(self.resources.clone()),
            config,
        )
    }
}
