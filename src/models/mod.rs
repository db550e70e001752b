//! Data models module
//!
//! This module contains the language, resource key and resource value
//! entities plus paging primitives.

pub mod language;
pub mod page;
pub mod resource;

// Re-export commonly used models
pub use language::{Language, CreateLanguageRequest};
pub use page::{PageRequest, PagedList};
pub use resource::{LocaleResourceKey, LocaleStringResource, LocalizedResource, UpdateResourceKeyRequest};
