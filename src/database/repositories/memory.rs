//! In-memory repository implementation
//!
//! Implements both repository traits over one shared state, so a single
//! store can back a `LocalizationService` without a database. Orders and
//! uniqueness rules follow the PostgreSQL schema.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use uuid::Uuid;
use crate::database::repositories::{LanguageRepository, LocaleResourceRepository};
use crate::models::{Language, LocaleResourceKey, LocaleStringResource, LocalizedResource, PageRequest, PagedList};
use crate::utils::errors::{LocaleError, Result};

#[derive(Debug, Default)]
struct MemoryState {
    languages: Vec<Language>,
    keys: Vec<LocaleResourceKey>,
    values: Vec<LocaleStringResource>,
}

impl MemoryState {
    fn has_pair(&self, language_id: Uuid, resource_key_id: Uuid) -> bool {
        self.values
            .iter()
            .any(|v| v.language_id == language_id && v.resource_key_id == resource_key_id)
    }

    /// Reject seed rows that duplicate each other or an existing pair
    fn check_seed(&self, seed: &[LocaleStringResource]) -> Result<()> {
        for (index, resource) in seed.iter().enumerate() {
            let repeated = seed[..index].iter().any(|other| {
                other.language_id == resource.language_id && other.resource_key_id == resource.resource_key_id
            });
            if repeated || self.has_pair(resource.language_id, resource.resource_key_id) {
                return Err(LocaleError::Store(format!(
                    "Duplicate resource for language {} and key {}",
                    resource.language_id, resource.resource_key_id
                )));
            }
        }
        Ok(())
    }

    fn localized(&self, language_id: Uuid) -> Vec<LocalizedResource> {
        let mut rows: Vec<LocalizedResource> = self
            .values
            .iter()
            .filter(|v| v.language_id == language_id)
            .filter_map(|v| {
                self.keys.iter().find(|k| k.id == v.resource_key_id).map(|k| LocalizedResource {
                    resource_id: v.id,
                    resource_key_id: k.id,
                    key_name: k.name.clone(),
                    resource_value: v.resource_value.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| a.key_name.cmp(&b.key_name));
        rows
    }

    fn sorted_keys(&self) -> Vec<LocaleResourceKey> {
        let mut keys = self.keys.clone();
        keys.sort_by(|a, b| a.name.cmp(&b.name));
        keys
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryLocalizationStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryLocalizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of value rows across all languages
    pub fn value_count(&self) -> usize {
        self.read().map(|state| state.values.len()).unwrap_or(0)
    }

    /// Number of value rows for one (language, key) pair
    pub fn pair_count(&self, language_id: Uuid, resource_key_id: Uuid) -> usize {
        self.read()
            .map(|state| {
                state
                    .values
                    .iter()
                    .filter(|v| v.language_id == language_id && v.resource_key_id == resource_key_id)
                    .count()
            })
            .unwrap_or(0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| LocaleError::Store("In-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| LocaleError::Store("In-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl LanguageRepository for InMemoryLocalizationStore {
    async fn get_all(&self) -> Result<Vec<Language>> {
        let mut languages = self.read()?.languages.clone();
        languages.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(languages)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Language>> {
        Ok(self.read()?.languages.iter().find(|l| l.id == id).cloned())
    }

    async fn get_by_culture(&self, culture: &str) -> Result<Option<Language>> {
        Ok(self
            .read()?
            .languages
            .iter()
            .find(|l| l.language_culture.eq_ignore_ascii_case(culture))
            .cloned())
    }

    async fn add(&self, language: &Language, seed: &[LocaleStringResource]) -> Result<()> {
        let mut state = self.write()?;
        if state
            .languages
            .iter()
            .any(|l| l.id == language.id || l.language_culture.eq_ignore_ascii_case(&language.language_culture))
        {
            return Err(LocaleError::Store(format!("Duplicate language {}", language.language_culture)));
        }
        state.check_seed(seed)?;

        state.languages.push(language.clone());
        state.values.extend(seed.iter().cloned());
        Ok(())
    }

    async fn update(&self, language: &Language) -> Result<()> {
        let mut state = self.write()?;
        let existing = state
            .languages
            .iter_mut()
            .find(|l| l.id == language.id)
            .ok_or_else(|| LocaleError::LanguageNotFound(language.id.to_string()))?;
        existing.name = language.name.clone();
        existing.language_culture = language.language_culture.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.write()?;
        state.languages.retain(|l| l.id != id);
        state.values.retain(|v| v.language_id != id);
        Ok(())
    }
}

#[async_trait]
impl LocaleResourceRepository for InMemoryLocalizationStore {
    async fn get_all_keys(&self) -> Result<Vec<LocaleResourceKey>> {
        Ok(self.read()?.sorted_keys())
    }

    async fn get_keys_page(&self, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        Ok(page.paginate(&self.read()?.sorted_keys()))
    }

    async fn search_keys(&self, search: &str, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        let keys: Vec<_> = self
            .read()?
            .sorted_keys()
            .into_iter()
            .filter(|k| contains_ignore_case(&k.name, search))
            .collect();
        Ok(page.paginate(&keys))
    }

    async fn get_key_by_id(&self, id: Uuid) -> Result<Option<LocaleResourceKey>> {
        Ok(self.read()?.keys.iter().find(|k| k.id == id).cloned())
    }

    async fn get_key_by_name(&self, name: &str) -> Result<Option<LocaleResourceKey>> {
        Ok(self.read()?.keys.iter().find(|k| k.name == name).cloned())
    }

    async fn add_key(&self, key: &LocaleResourceKey, seed: &[LocaleStringResource]) -> Result<()> {
        let mut state = self.write()?;
        if state.keys.iter().any(|k| k.id == key.id || k.name == key.name) {
            return Err(LocaleError::Store(format!("Duplicate resource key {}", key.name)));
        }
        state.check_seed(seed)?;

        state.keys.push(key.clone());
        state.values.extend(seed.iter().cloned());
        Ok(())
    }

    async fn update_key(&self, key: &LocaleResourceKey) -> Result<()> {
        let mut state = self.write()?;
        if state.keys.iter().any(|k| k.id != key.id && k.name == key.name) {
            return Err(LocaleError::Store(format!("Duplicate resource key {}", key.name)));
        }
        let existing = state
            .keys
            .iter_mut()
            .find(|k| k.id == key.id)
            .ok_or_else(|| LocaleError::ResourceKeyNotFound(key.name.clone()))?;
        existing.name = key.name.clone();
        existing.notes = key.notes.clone();
        Ok(())
    }

    async fn delete_key(&self, id: Uuid) -> Result<()> {
        let mut state = self.write()?;
        state.keys.retain(|k| k.id != id);
        state.values.retain(|v| v.resource_key_id != id);
        Ok(())
    }

    async fn get_value(&self, language_id: Uuid, key_name: &str) -> Result<Option<LocaleStringResource>> {
        let state = self.read()?;
        let Some(key) = state.keys.iter().find(|k| k.name == key_name) else {
            return Ok(None);
        };
        Ok(state
            .values
            .iter()
            .find(|v| v.language_id == language_id && v.resource_key_id == key.id)
            .cloned())
    }

    async fn get_values_for_language(&self, language_id: Uuid) -> Result<Vec<LocalizedResource>> {
        Ok(self.read()?.localized(language_id))
    }

    async fn get_values_page(&self, language_id: Uuid, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        Ok(page.paginate(&self.read()?.localized(language_id)))
    }

    async fn search_values(&self, language_id: Uuid, search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        let rows: Vec<_> = self
            .read()?
            .localized(language_id)
            .into_iter()
            .filter(|r| contains_ignore_case(&r.key_name, search) || contains_ignore_case(&r.resource_value, search))
            .collect();
        Ok(page.paginate(&rows))
    }

    async fn search_values_by_key(&self, language_id: Uuid, key_search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        let rows: Vec<_> = self
            .read()?
            .localized(language_id)
            .into_iter()
            .filter(|r| contains_ignore_case(&r.key_name, key_search))
            .collect();
        Ok(page.paginate(&rows))
    }

    async fn update_value(&self, resource_id: Uuid, value: &str) -> Result<()> {
        let mut state = self.write()?;
        let resource = state
            .values
            .iter_mut()
            .find(|v| v.id == resource_id)
            .ok_or_else(|| LocaleError::Store(format!("Resource row {} vanished before update", resource_id)))?;
        resource.resource_value = value.to_string();
        Ok(())
    }
}
