//! Localization service implementation
//!
//! This service is the single authority over languages, resource keys and
//! resource values. It keeps the (language x key) value matrix complete:
//! adding a language seeds an empty value for every key, adding a key seeds
//! an empty value for every language. It also owns the default-language
//! policy and the CSV export/import routines.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use crate::config::LocalizationConfig;
use crate::database::repositories::{LanguageRepository, LocaleResourceRepository};
use crate::i18n::csv::{self, CsvErrorWarningType, CsvReport};
use crate::i18n::culture::{CultureCatalog, CultureInfo};
use crate::models::{
    CreateLanguageRequest, Language, LocaleResourceKey, LocaleStringResource, LocalizedResource, PageRequest,
    PagedList, UpdateResourceKeyRequest,
};
use crate::utils::errors::{LocaleError, Result};
use crate::utils::logging::{log_admin_action, log_import_report};

/// Request or session scoped language choice, passed in by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageContext {
    /// Preferred culture; `None` means the default language
    pub culture: Option<String>,
}

impl LanguageContext {
    pub fn new(culture: impl Into<String>) -> Self {
        Self { culture: Some(culture.into()) }
    }
}

/// Localization service for languages, resource keys and values
#[derive(Clone)]
pub struct LocalizationService {
    languages: Arc<dyn LanguageRepository>,
    resources: Arc<dyn LocaleResourceRepository>,
    config: LocalizationConfig,
}

impl LocalizationService {
    /// Create a new LocalizationService instance
    pub fn new(
        languages: Arc<dyn LanguageRepository>,
        resources: Arc<dyn LocaleResourceRepository>,
        config: LocalizationConfig,
    ) -> Self {
        Self {
            languages,
            resources,
            config,
        }
    }

    pub fn config(&self) -> &LocalizationConfig {
        &self.config
    }

    /// Page `page_index` with the configured page size
    pub fn page(&self, page_index: u32) -> PageRequest {
        PageRequest::new(page_index, self.config.page_size)
    }

    // Languages

    pub async fn all_languages(&self) -> Result<Vec<Language>> {
        self.languages.get_all().await
    }

    pub async fn language_by_id(&self, id: Uuid) -> Result<Option<Language>> {
        self.languages.get_by_id(id).await
    }

    pub async fn language_by_culture(&self, culture: &str) -> Result<Option<Language>> {
        self.languages.get_by_culture(culture).await
    }

    /// The configured default language; an error here means misconfiguration
    pub async fn default_language(&self) -> Result<Language> {
        self.languages
            .get_by_culture(&self.config.default_language)
            .await?
            .ok_or_else(|| LocaleError::DefaultLanguageMissing {
                culture: self.config.default_language.clone(),
            })
    }

    /// Install the default language if it is missing
    pub async fn ensure_default_language(&self) -> Result<Language> {
        match self.default_language().await {
            Err(LocaleError::DefaultLanguageMissing { culture }) => {
                let info = CultureCatalog::get()
                    .resolve(&culture)
                    .ok_or_else(|| LocaleError::UnknownCulture(culture.clone()))?;
                info!(culture = %culture, "Installing missing default language");
                self.add_language_for_culture(info).await
            }
            other => other,
        }
    }

    /// The context's language when installed, otherwise the default language
    pub async fn current_language(&self, context: &LanguageContext) -> Result<Language> {
        if let Some(culture) = context.culture.as_deref() {
            if let Some(language) = self.languages.get_by_culture(culture).await? {
                return Ok(language);
            }
            debug!(culture = culture, "Requested language not installed, using default");
        }
        self.default_language().await
    }

    /// Add a language and seed an empty value for every existing key
    pub async fn add_language(&self, request: CreateLanguageRequest) -> Result<Language> {
        let culture = request.language_culture.trim();
        let name = request.name.trim();
        if culture.is_empty() || name.is_empty() {
            return Err(LocaleError::InvalidInput(
                "A language needs both a name and a culture code".to_string(),
            ));
        }

        if self.languages.get_by_culture(culture).await?.is_some() {
            warn!(culture = culture, "Language already exists");
            return Err(LocaleError::LanguageAlreadyExists {
                culture: culture.to_string(),
            });
        }

        let language = Language::new(name, culture);
        let seed: Vec<LocaleStringResource> = self
            .resources
            .get_all_keys()
            .await?
            .iter()
            .map(|key| LocaleStringResource::placeholder(language.id, key.id))
            .collect();

        self.languages.add(&language, &seed).await?;
        log_admin_action("add_language", &language.language_culture, Some(format!("{} values seeded", seed.len()).as_str()));

        Ok(language)
    }

    /// Add a language named after a catalog culture
    pub async fn add_language_for_culture(&self, culture: &CultureInfo) -> Result<Language> {
        self.add_language(CreateLanguageRequest {
            name: culture.english_name.to_string(),
            language_culture: culture.code.to_string(),
        })
        .await
    }

    pub async fn rename_language(&self, id: Uuid, name: &str) -> Result<Language> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LocaleError::InvalidInput("Language name cannot be empty".to_string()));
        }

        let mut language = self
            .languages
            .get_by_id(id)
            .await?
            .ok_or_else(|| LocaleError::LanguageNotFound(id.to_string()))?;
        language.name = name.to_string();
        self.languages.update(&language).await?;

        Ok(language)
    }

    /// Delete a language and its values. The default language is refused.
    pub async fn delete_language(&self, language: &Language) -> Result<()> {
        if language
            .language_culture
            .eq_ignore_ascii_case(&self.config.default_language)
        {
            warn!(culture = %language.language_culture, "Refusing to delete the default language");
            return Err(LocaleError::DefaultLanguageDelete {
                culture: language.language_culture.clone(),
            });
        }

        self.languages.delete(language.id).await.map_err(|e| {
            error!(culture = %language.language_culture, error = %e, "Failed to delete language");
            LocaleError::delete_failed(format!("language {}", language.language_culture), e)
        })?;
        log_admin_action("delete_language", &language.language_culture, None);

        Ok(())
    }

    /// Catalog cultures that are not installed yet
    pub async fn available_cultures(&self) -> Result<Vec<&'static CultureInfo>> {
        let installed = self.languages.get_all().await?;
        Ok(CultureCatalog::get()
            .all()
            .iter()
            .filter(|culture| {
                !installed
                    .iter()
                    .any(|language| language.language_culture.eq_ignore_ascii_case(culture.code))
            })
            .collect())
    }

    // Resource keys

    pub async fn all_resource_keys(&self) -> Result<Vec<LocaleResourceKey>> {
        self.resources.get_all_keys().await
    }

    pub async fn resource_keys_page(&self, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        self.resources.get_keys_page(page).await
    }

    pub async fn search_resource_keys(&self, search: &str, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        self.resources.search_keys(search.trim(), page).await
    }

    pub async fn resource_key_by_id(&self, id: Uuid) -> Result<Option<LocaleResourceKey>> {
        self.resources.get_key_by_id(id).await
    }

    pub async fn resource_key_by_name(&self, name: &str) -> Result<Option<LocaleResourceKey>> {
        self.resources.get_key_by_name(name).await
    }

    /// Add a resource key and seed an empty value for every language
    pub async fn add_resource_key(&self, name: &str, notes: Option<String>) -> Result<LocaleResourceKey> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LocaleError::InvalidInput("Resource key name cannot be empty".to_string()));
        }

        if self.resources.get_key_by_name(name).await?.is_some() {
            warn!(key = name, "Resource key already exists");
            return Err(LocaleError::ResourceKeyAlreadyExists {
                name: name.to_string(),
            });
        }

        let key = LocaleResourceKey::new(name, notes);
        let seed: Vec<LocaleStringResource> = self
            .languages
            .get_all()
            .await?
            .iter()
            .map(|language| LocaleStringResource::placeholder(language.id, key.id))
            .collect();

        self.resources.add_key(&key, &seed).await?;
        log_admin_action("add_resource_key", &key.name, Some(format!("{} values seeded", seed.len()).as_str()));

        Ok(key)
    }

    /// Rename a key or change its notes
    pub async fn update_resource_key(&self, id: Uuid, request: UpdateResourceKeyRequest) -> Result<LocaleResourceKey> {
        let mut key = self
            .resources
            .get_key_by_id(id)
            .await?
            .ok_or_else(|| LocaleError::ResourceKeyNotFound(id.to_string()))?;

        if let Some(name) = request.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(LocaleError::InvalidInput("Resource key name cannot be empty".to_string()));
            }
            if name != key.name {
                if self.resources.get_key_by_name(name).await?.is_some() {
                    return Err(LocaleError::ResourceKeyAlreadyExists {
                        name: name.to_string(),
                    });
                }
                key.name = name.to_string();
            }
        }
        if let Some(notes) = request.notes {
            key.notes = Some(notes).filter(|n| !n.trim().is_empty());
        }

        self.resources.update_key(&key).await?;
        log_admin_action("update_resource_key", &key.name, None);

        Ok(key)
    }

    /// Delete a key together with its values in every language
    pub async fn delete_resource_key(&self, key: &LocaleResourceKey) -> Result<()> {
        self.resources.delete_key(key.id).await.map_err(|e| {
            error!(key = %key.name, error = %e, "Failed to delete resource key");
            LocaleError::delete_failed(format!("resource key {}", key.name), e)
        })?;
        log_admin_action("delete_resource_key", &key.name, None);

        Ok(())
    }

    // Resource values

    /// Look up a value row. Store failures are logged and read as not found.
    pub async fn resource(&self, language_id: Uuid, key: &str) -> Option<LocaleStringResource> {
        match self.resources.get_value(language_id, key).await {
            Ok(resource) => resource,
            Err(e) => {
                error!(language_id = %language_id, key = key, error = %e, "Resource lookup failed");
                None
            }
        }
    }

    /// The stored text, or the key itself when missing or empty
    pub async fn resource_string(&self, language_id: Uuid, key: &str) -> String {
        self.resource(language_id, key)
            .await
            .map(|resource| resource.resource_value)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| key.to_string())
    }

    /// `resource_string` in the context's current language
    pub async fn resource_string_for(&self, context: &LanguageContext, key: &str) -> Result<String> {
        let language = self.current_language(context).await?;
        Ok(self.resource_string(language.id, key).await)
    }

    /// Overwrite the value of an existing (language, key) row
    pub async fn update_resource_value(&self, language_id: Uuid, key: &str, value: &str) -> Result<LocaleStringResource> {
        let mut resource = self
            .resources
            .get_value(language_id, key)
            .await?
            .ok_or_else(|| LocaleError::ResourceNotFound {
                language_id,
                key: key.to_string(),
            })?;

        self.resources.update_value(resource.id, value).await?;
        debug!(language_id = %language_id, key = key, "Resource value updated");

        resource.resource_value = value.to_string();
        Ok(resource)
    }

    pub async fn values_for_language(&self, language_id: Uuid) -> Result<Vec<LocalizedResource>> {
        self.resources.get_values_for_language(language_id).await
    }

    pub async fn values_page(&self, language_id: Uuid, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.resources.get_values_page(language_id, page).await
    }

    pub async fn search_values(&self, language_id: Uuid, search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.resources.search_values(language_id, search.trim(), page).await
    }

    pub async fn search_values_by_key(&self, language_id: Uuid, key_search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.resources.search_values_by_key(language_id, key_search.trim(), page).await
    }

    /// Every key of a language mapped to its text, empty values included
    pub async fn strings_for_language(&self, language_id: Uuid) -> Result<HashMap<String, String>> {
        Ok(self
            .resources
            .get_values_for_language(language_id)
            .await?
            .into_iter()
            .map(|resource| (resource.key_name, resource.resource_value))
            .collect())
    }

    // CSV

    /// One `key,value` line per resource key, in store order
    pub async fn export_to_csv(&self, language: &Language) -> Result<String> {
        let values = self.resources.get_values_for_language(language.id).await?;
        let csv = values
            .iter()
            .map(|resource| csv::format_line(&resource.key_name, &resource.resource_value))
            .collect::<String>();

        info!(culture = %language.language_culture, lines = values.len(), "Exported language to CSV");
        Ok(csv)
    }

    /// Create the language `culture` and fill it from `key,value` lines.
    ///
    /// Setup problems (no lines, unknown culture, language creation) stop the
    /// import with a single error. Line problems are reported per line and
    /// processing continues. An unexpected failure inside the loop records a
    /// general error and stops; lines already imported keep their effects.
    pub async fn import_from_csv<S>(&self, culture: &str, lines: &[S]) -> CsvReport
    where
        S: AsRef<str> + Sync,
    {
        let mut report = CsvReport::new();

        if lines.is_empty() {
            report.error(CsvErrorWarningType::BadDataFormat, "No data to import");
            log_import_report(culture, &report);
            return report;
        }

        let Some(info) = CultureCatalog::get().resolve(culture) else {
            report.error(
                CsvErrorWarningType::DoesNotExist,
                format!("The language culture '{}' does not exist", culture),
            );
            log_import_report(culture, &report);
            return report;
        };

        let language = match self.add_language_for_culture(info).await {
            Ok(language) => language,
            Err(LocaleError::LanguageAlreadyExists { culture }) => {
                report.error(
                    CsvErrorWarningType::AlreadyExists,
                    format!("The language culture '{}' already exists", culture),
                );
                log_import_report(info.code, &report);
                return report;
            }
            Err(e) => {
                report.error(
                    CsvErrorWarningType::ItemBad,
                    format!("Unable to create language '{}': {}", info.code, e),
                );
                log_import_report(info.code, &report);
                return report;
            }
        };

        if let Err(e) = self.import_lines(&language, lines, &mut report).await {
            error!(culture = info.code, error = %e, "CSV import aborted");
            report.error(
                CsvErrorWarningType::GeneralError,
                format!("Import aborted: {}", e),
            );
        }

        log_import_report(info.code, &report);
        report
    }

    /// `import_from_csv` over a whole text, one entry per line
    pub async fn import_from_csv_str(&self, culture: &str, text: &str) -> CsvReport {
        let lines: Vec<&str> = text.lines().collect();
        self.import_from_csv(culture, &lines).await
    }

    async fn import_lines<S>(&self, language: &Language, lines: &[S], report: &mut CsvReport) -> Result<()>
    where
        S: AsRef<str> + Sync,
    {
        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let Some(entry) = csv::parse_line(line.as_ref()) else {
                report.error(
                    CsvErrorWarningType::MissingKeyOrValue,
                    format!("Line {}: a key and a value are required", line_number),
                );
                continue;
            };

            if entry.key.is_empty() {
                continue;
            }

            if self.resources.get_key_by_name(entry.key).await?.is_none() {
                self.add_resource_key(entry.key, None).await?;
                report.warning(
                    CsvErrorWarningType::NewKeyCreated,
                    format!(
                        "A new key named '{}' has been created, and will require a value in all languages",
                        entry.key
                    ),
                );
            }

            self.update_resource_value(language.id, entry.key, entry.value).await?;
        }

        Ok(())
    }
}
