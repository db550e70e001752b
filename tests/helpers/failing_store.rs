//! Store double that injects failures into an in-memory store

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use uuid::Uuid;
use forum_locale::config::LocalizationConfig;
use forum_locale::database::{LanguageRepository, LocaleResourceRepository};
use forum_locale::models::{Language, LocaleResourceKey, LocaleStringResource, LocalizedResource, PageRequest, PagedList};
use forum_locale::{InMemoryLocalizationStore, LocaleError, LocalizationService, Result};

/// Delegates to an in-memory store, failing the operations it is told to
#[derive(Clone, Default)]
pub struct FailingStore {
    pub inner: InMemoryLocalizationStore,
    fail_deletes: Arc<AtomicBool>,
    fail_language_adds: Arc<AtomicBool>,
    poisoned_key: Arc<Mutex<Option<String>>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&self) -> LocalizationService {
        LocalizationService::new(Arc::new(self.clone()), Arc::new(self.clone()), LocalizationConfig::default())
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn fail_language_adds(&self) {
        self.fail_language_adds.store(true, Ordering::SeqCst);
    }

    /// Any lookup of this key name fails
    pub fn poison_key(&self, name: &str) {
        *self.poisoned_key.lock().unwrap() = Some(name.to_string());
    }

    fn check_key(&self, name: &str) -> Result<()> {
        if self.poisoned_key.lock().unwrap().as_deref() == Some(name) {
            return Err(LocaleError::Store(format!("injected failure for key {}", name)));
        }
        Ok(())
    }

    fn check_delete(&self) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(LocaleError::Store("injected delete failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LanguageRepository for FailingStore {
    async fn get_all(&self) -> Result<Vec<Language>> {
        LanguageRepository::get_all(&self.inner).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Language>> {
        self.inner.get_by_id(id).await
    }

    async fn get_by_culture(&self, culture: &str) -> Result<Option<Language>> {
        self.inner.get_by_culture(culture).await
    }

    async fn add(&self, language: &Language, seed: &[LocaleStringResource]) -> Result<()> {
        if self.fail_language_adds.load(Ordering::SeqCst) {
            return Err(LocaleError::Store("injected add failure".to_string()));
        }
        self.inner.add(language, seed).await
    }

    async fn update(&self, language: &Language) -> Result<()> {
        self.inner.update(language).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.check_delete()?;
        self.inner.delete(id).await
    }
}

#[async_trait]
impl LocaleResourceRepository for FailingStore {
    async fn get_all_keys(&self) -> Result<Vec<LocaleResourceKey>> {
        self.inner.get_all_keys().await
    }

    async fn get_keys_page(&self, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        self.inner.get_keys_page(page).await
    }

    async fn search_keys(&self, search: &str, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        self.inner.search_keys(search, page).await
    }

    async fn get_key_by_id(&self, id: Uuid) -> Result<Option<LocaleResourceKey>> {
        self.inner.get_key_by_id(id).await
    }

    async fn get_key_by_name(&self, name: &str) -> Result<Option<LocaleResourceKey>> {
        self.check_key(name)?;
        self.inner.get_key_by_name(name).await
    }

    async fn add_key(&self, key: &LocaleResourceKey, seed: &[LocaleStringResource]) -> Result<()> {
        self.inner.add_key(key, seed).await
    }

    async fn update_key(&self, key: &LocaleResourceKey) -> Result<()> {
        self.inner.update_key(key).await
    }

    async fn delete_key(&self, id: Uuid) -> Result<()> {
        self.check_delete()?;
        self.inner.delete_key(id).await
    }

    async fn get_value(&self, language_id: Uuid, key_name: &str) -> Result<Option<LocaleStringResource>> {
        self.check_key(key_name)?;
        self.inner.get_value(language_id, key_name).await
    }

    async fn get_values_for_language(&self, language_id: Uuid) -> Result<Vec<LocalizedResource>> {
        self.inner.get_values_for_language(language_id).await
    }

    async fn get_values_page(&self, language_id: Uuid, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.inner.get_values_page(language_id, page).await
    }

    async fn search_values(&self, language_id: Uuid, search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.inner.search_values(language_id, search, page).await
    }

    async fn search_values_by_key(&self, language_id: Uuid, key_search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.inner.search_values_by_key(language_id, key_search, page).await
    }

    async fn update_value(&self, resource_id: Uuid, value: &str) -> Result<()> {
        self.inner.update_value(resource_id, value).await
    }
}
