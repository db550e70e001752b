//! Services module
//!
//! This module contains business logic services

pub mod localization;

// Re-export commonly used services
pub use localization::{LanguageContext, LocalizationService};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::repositories::{InMemoryLocalizationStore, LanguageRepository, LocaleResourceRepository};
use crate::utils::errors::LocaleError;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub localization_service: LocalizationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory over the given repositories
    pub fn new(
        settings: &Settings,
        languages: Arc<dyn LanguageRepository>,
        resources: Arc<dyn LocaleResourceRepository>,
    ) -> Self {
        let localization_service = LocalizationService::new(languages, resources, settings.localization.clone());

        Self { localization_service }
    }

    /// Create a ServiceFactory backed by a fresh in-memory store
    pub fn in_memory(settings: &Settings) -> Self {
        let store = InMemoryLocalizationStore::new();
        Self::new(settings, Arc::new(store.clone()), Arc::new(store))
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let service = &self.localization_service;

        let default_language_installed = match service.default_language().await {
            Ok(_) => true,
            Err(LocaleError::DefaultLanguageMissing { .. }) => false,
            Err(e) => {
                tracing::error!(error = %e, "Default language check failed");
                false
            }
        };
        let language_count = service.all_languages().await.map(|l| l.len()).ok();
        let resource_key_count = service.all_resource_keys().await.map(|k| k.len()).ok();

        ServiceHealthStatus {
            default_language: service.config().default_language.clone(),
            default_language_installed,
            store_reachable: language_count.is_some() && resource_key_count.is_some(),
            language_count: language_count.unwrap_or(0),
            resource_key_count: resource_key_count.unwrap_or(0),
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub default_language: String,
    pub default_language_installed: bool,
    pub store_reachable: bool,
    pub language_count: usize,
    pub resource_key_count: usize,
}

impl ServiceHealthStatus {
    /// Check if the localization subsystem is usable
    pub fn is_healthy(&self) -> bool {
        self.store_reachable && self.default_language_installed
    }

    /// Get list of problems
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.store_reachable {
            issues.push("Resource store is not reachable".to_string());
        }
        if !self.default_language_installed {
            issues.push(format!("Default language {} is not installed", self.default_language));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_missing_default_language() {
        let factory = ServiceFactory::in_memory(&Settings::default());

        let status = factory.health_check().await;
        assert!(status.store_reachable);
        assert!(!status.is_healthy());
        assert_eq!(status.get_issues(), vec!["Default language en-GB is not installed".to_string()]);

        factory.localization_service.ensure_default_language().await.unwrap();
        let status = factory.health_check().await;
        assert!(status.is_healthy());
        assert_eq!(status.language_count, 1);
    }
}
