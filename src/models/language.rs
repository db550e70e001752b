//! Language model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    /// Culture code such as `en-GB`, unique across languages
    pub language_culture: String,
    pub created_at: DateTime<Utc>,
}

impl Language {
    pub fn new(name: impl Into<String>, language_culture: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            language_culture: language_culture.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLanguageRequest {
    pub name: String,
    pub language_culture: String,
}
