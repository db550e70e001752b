//! Resource key and resource value models

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A unique, dotted lookup name for a piece of translatable text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LocaleResourceKey {
    pub id: Uuid,
    pub name: String,
    pub notes: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl LocaleResourceKey {
    pub fn new(name: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            notes,
            date_added: Utc::now(),
        }
    }
}

/// The translated text for one (language, resource key) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LocaleStringResource {
    pub id: Uuid,
    pub language_id: Uuid,
    pub resource_key_id: Uuid,
    pub resource_value: String,
}

impl LocaleStringResource {
    /// Empty placeholder row used to complete the language x key matrix
    pub fn placeholder(language_id: Uuid, resource_key_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            language_id,
            resource_key_id,
            resource_value: String::new(),
        }
    }
}

/// A resource value joined with its key name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LocalizedResource {
    pub resource_id: Uuid,
    pub resource_key_id: Uuid,
    pub key_name: String,
    pub resource_value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResourceKeyRequest {
    pub name: Option<String>,
    pub notes: Option<String>,
}
