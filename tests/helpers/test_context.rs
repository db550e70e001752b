//! Test context for unified test setup
//!
//! Builds a `LocalizationService` over an in-memory store and keeps a
//! handle on the store so tests can inspect the value matrix directly.

use std::sync::{Arc, Once};
use forum_locale::config::{LocalizationConfig, Settings};
use forum_locale::models::{CreateLanguageRequest, Language, LocaleResourceKey};
use forum_locale::{InMemoryLocalizationStore, LocalizationService};

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

pub struct TestContext {
    pub store: InMemoryLocalizationStore,
    pub service: LocalizationService,
    pub settings: Settings,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(LocalizationConfig::default())
    }

    pub fn with_config(config: LocalizationConfig) -> Self {
        init_test_logging();

        let store = InMemoryLocalizationStore::new();
        let service = LocalizationService::new(Arc::new(store.clone()), Arc::new(store.clone()), config.clone());
        let settings = Settings {
            localization: config,
            ..Settings::default()
        };

        Self { store, service, settings }
    }

    /// Context with the default language (en-GB) installed
    pub async fn with_default_language() -> (Self, Language) {
        let ctx = Self::new();
        let language = ctx
            .service
            .ensure_default_language()
            .await
            .expect("Failed to install default language");
        (ctx, language)
    }

    pub async fn add_language(&self, name: &str, culture: &str) -> Language {
        self.service
            .add_language(CreateLanguageRequest {
                name: name.to_string(),
                language_culture: culture.to_string(),
            })
            .await
            .expect("Failed to add language")
    }

    pub async fn add_key(&self, name: &str) -> LocaleResourceKey {
        self.service
            .add_resource_key(name, None)
            .await
            .expect("Failed to add resource key")
    }

    pub async fn set(&self, language: &Language, key: &str, value: &str) {
        self.service
            .update_resource_value(language.id, key, value)
            .await
            .expect("Failed to set resource value");
    }

    /// Assert exactly one value row exists for every (language, key) pair
    pub async fn assert_matrix_complete(&self) {
        let languages = self.service.all_languages().await.expect("languages");
        let keys = self.service.all_resource_keys().await.expect("keys");
        for language in &languages {
            for key in &keys {
                assert_eq!(
                    self.store.pair_count(language.id, key.id),
                    1,
                    "expected one value for {} / {}",
                    language.language_culture,
                    key.name
                );
            }
        }
        assert_eq!(self.store.value_count(), languages.len() * keys.len());
    }
}
