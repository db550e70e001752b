//! Database repositories module
//!
//! The localization service talks to storage only through the two traits
//! below. `language` and `resource` hold the PostgreSQL implementations,
//! `memory` an in-process one sharing state across both traits.
//!
//! Contract shared by every implementation:
//! - `add` calls persist the entity together with its seed rows in one step;
//!   a failed add leaves nothing behind.
//! - Deleting a language or key removes every value row that references it.
//! - Uniqueness of culture codes, key names and (language, key) pairs is
//!   reported as an error by the store; the service checks first.

pub mod language;
pub mod memory;
pub mod resource;

use async_trait::async_trait;
use uuid::Uuid;
use crate::models::{Language, LocaleResourceKey, LocaleStringResource, LocalizedResource, PageRequest, PagedList};
use crate::utils::errors::Result;

// Re-export repositories
pub use language::PgLanguageRepository;
pub use memory::InMemoryLocalizationStore;
pub use resource::PgLocaleResourceRepository;

/// Storage for languages
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// All languages ordered by name
    async fn get_all(&self) -> Result<Vec<Language>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Language>>;

    /// Case-insensitive lookup by culture code
    async fn get_by_culture(&self, culture: &str) -> Result<Option<Language>>;

    /// Insert a language together with its placeholder values
    async fn add(&self, language: &Language, seed: &[LocaleStringResource]) -> Result<()>;

    async fn update(&self, language: &Language) -> Result<()>;

    /// Delete a language and all of its values
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Storage for resource keys and the per-language values
#[async_trait]
pub trait LocaleResourceRepository: Send + Sync {
    /// All keys in natural order (by name)
    async fn get_all_keys(&self) -> Result<Vec<LocaleResourceKey>>;

    async fn get_keys_page(&self, page: PageRequest) -> Result<PagedList<LocaleResourceKey>>;

    /// Keys whose name contains `search`, case-insensitively
    async fn search_keys(&self, search: &str, page: PageRequest) -> Result<PagedList<LocaleResourceKey>>;

    async fn get_key_by_id(&self, id: Uuid) -> Result<Option<LocaleResourceKey>>;

    async fn get_key_by_name(&self, name: &str) -> Result<Option<LocaleResourceKey>>;

    /// Insert a key together with its placeholder values
    async fn add_key(&self, key: &LocaleResourceKey, seed: &[LocaleStringResource]) -> Result<()>;

    async fn update_key(&self, key: &LocaleResourceKey) -> Result<()>;

    /// Delete a key and its values in every language
    async fn delete_key(&self, id: Uuid) -> Result<()>;

    async fn get_value(&self, language_id: Uuid, key_name: &str) -> Result<Option<LocaleStringResource>>;

    /// Every value of a language, ordered like `get_all_keys`
    async fn get_values_for_language(&self, language_id: Uuid) -> Result<Vec<LocalizedResource>>;

    async fn get_values_page(&self, language_id: Uuid, page: PageRequest) -> Result<PagedList<LocalizedResource>>;

    /// Values whose key name or text contains `search`, case-insensitively
    async fn search_values(&self, language_id: Uuid, search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>>;

    /// Values whose key name contains `key_search`, case-insensitively
    async fn search_values_by_key(&self, language_id: Uuid, key_search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>>;

    async fn update_value(&self, resource_id: Uuid, value: &str) -> Result<()>;
}
