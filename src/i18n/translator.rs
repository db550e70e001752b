//! Translation cache and message formatting
//!
//! `Translator` keeps every string of the loaded languages in memory so views
//! can resolve keys without a store round trip. Resolution order is the
//! requested culture, then the default culture, then the key itself. Empty
//! values count as untranslated.

use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::models::Language;
use crate::services::LocalizationService;
use crate::utils::errors::Result;

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// In-memory strings of loaded languages, keyed by lowercase culture code
#[derive(Debug, Clone)]
pub struct Translator {
    translations: HashMap<String, HashMap<String, String>>,
    default_culture: String,
}

impl Translator {
    pub fn new(default_culture: &str) -> Self {
        Self {
            translations: HashMap::new(),
            default_culture: default_culture.to_lowercase(),
        }
    }

    /// Load (or reload) one language from the service
    pub async fn load_language(&mut self, service: &LocalizationService, language: &Language) -> Result<()> {
        let strings = service.strings_for_language(language.id).await?;
        debug!(culture = %language.language_culture, keys = strings.len(), "Loaded language strings");
        self.insert_language(&language.language_culture, strings);
        Ok(())
    }

    /// Load every installed language
    pub async fn load_all(&mut self, service: &LocalizationService) -> Result<()> {
        self.translations.clear();
        let languages = service.all_languages().await?;
        for language in &languages {
            self.load_language(service, language).await?;
        }
        if !self.is_loaded(&self.default_culture) {
            warn!(culture = %self.default_culture, "Default language has no strings loaded");
        }
        info!(languages = languages.len(), "Translations loaded");
        Ok(())
    }

    pub fn insert_language(&mut self, culture: &str, strings: HashMap<String, String>) {
        self.translations.insert(culture.to_lowercase(), strings);
    }

    pub fn is_loaded(&self, culture: &str) -> bool {
        self.translations.contains_key(&culture.to_lowercase())
    }

    /// Get a translated message
    pub fn t(&self, key: &str, culture: &str, params: Option<&TranslationParams>) -> String {
        let text = self
            .lookup(key, &culture.to_lowercase())
            .or_else(|| self.lookup(key, &self.default_culture));

        match text {
            Some(text) => format_message(text, params),
            None => {
                debug!(key = key, culture = culture, "Translation missing, showing key");
                key.to_string()
            }
        }
    }

    fn lookup(&self, key: &str, culture: &str) -> Option<&str> {
        self.translations
            .get(culture)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let mut languages: Vec<LanguageStats> = self
            .translations
            .iter()
            .map(|(culture, strings)| LanguageStats {
                culture: culture.clone(),
                key_count: strings.len(),
                untranslated_count: strings.values().filter(|v| v.is_empty()).count(),
            })
            .collect();
        languages.sort_by(|a, b| a.culture.cmp(&b.culture));

        let total_keys = languages.iter().map(|l| l.key_count).max().unwrap_or(0);
        TranslationStats { languages, total_keys }
    }
}

/// Replace `{name}` placeholders with parameter values
pub fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    match params {
        Some(params) => {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        }
        None => template.to_string(),
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub culture: String,
    pub key_count: usize,
    pub untranslated_count: usize,
}
