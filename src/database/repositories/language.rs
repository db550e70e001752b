//! Language repository implementation

use std::time::Instant;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::database::repositories::LanguageRepository;
use crate::models::{Language, LocaleStringResource};
use crate::utils::errors::{LocaleError, Result};
use crate::utils::logging::log_database_operation;

#[derive(Clone, Debug)]
pub struct PgLanguageRepository {
    pool: PgPool,
}

impl PgLanguageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the row and its seed values in one transaction
    async fn insert_with_seed(&self, language: &Language, seed: &[LocaleStringResource]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO languages (id, name, language_culture, created_at)
            VALUES ($1, $2, $3, $4)
            "#
        )
        .bind(language.id)
        .bind(&language.name)
        .bind(&language.language_culture)
        .bind(language.created_at)
        .execute(&mut *tx)
        .await?;

        for resource in seed {
            sqlx::query(
                r#"
                INSERT INTO locale_string_resources (id, language_id, resource_key_id, resource_value)
                VALUES ($1, $2, $3, $4)
                "#
            )
            .bind(resource.id)
            .bind(resource.language_id)
            .bind(resource.resource_key_id)
            .bind(&resource.resource_value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl LanguageRepository for PgLanguageRepository {
    async fn get_all(&self) -> Result<Vec<Language>> {
        let languages = sqlx::query_as::<_, Language>(
            "SELECT id, name, language_culture, created_at FROM languages ORDER BY name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(languages)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Language>> {
        let language = sqlx::query_as::<_, Language>(
            "SELECT id, name, language_culture, created_at FROM languages WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(language)
    }

    async fn get_by_culture(&self, culture: &str) -> Result<Option<Language>> {
        let language = sqlx::query_as::<_, Language>(
            "SELECT id, name, language_culture, created_at FROM languages WHERE LOWER(language_culture) = LOWER($1)"
        )
        .bind(culture)
        .fetch_optional(&self.pool)
        .await?;

        Ok(language)
    }

    async fn add(&self, language: &Language, seed: &[LocaleStringResource]) -> Result<()> {
        let started = Instant::now();
        let result = self.insert_with_seed(language, seed).await;
        log_database_operation("insert", "languages", started.elapsed().as_millis() as u64, result.is_ok());

        result
    }

    async fn update(&self, language: &Language) -> Result<()> {
        let result = sqlx::query(
            "UPDATE languages SET name = $2, language_culture = $3 WHERE id = $1"
        )
        .bind(language.id)
        .bind(&language.name)
        .bind(&language.language_culture)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(LocaleError::LanguageNotFound(language.id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        log_database_operation("delete", "languages", started.elapsed().as_millis() as u64, result.is_ok());
        result?;

        Ok(())
    }
}
