//! Resource key and resource value repository implementation

use std::time::Instant;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::database::repositories::LocaleResourceRepository;
use crate::models::{LocaleResourceKey, LocaleStringResource, LocalizedResource, PageRequest, PagedList};
use crate::utils::errors::{LocaleError, Result};
use crate::utils::logging::log_database_operation;

const KEY_COLUMNS: &str = "id, name, notes, date_added";

const VALUE_SELECT: &str = r#"
    SELECT r.id AS resource_id, k.id AS resource_key_id, k.name AS key_name, r.resource_value
    FROM locale_string_resources r
    JOIN locale_resource_keys k ON k.id = r.resource_key_id
"#;

const VALUE_COUNT: &str = r#"
    SELECT COUNT(*)
    FROM locale_string_resources r
    JOIN locale_resource_keys k ON k.id = r.resource_key_id
"#;

/// Extra filter applied to a language's values
#[derive(Clone, Copy)]
enum ValueFilter<'a> {
    All,
    KeyOrValue(&'a str),
    Key(&'a str),
}

impl ValueFilter<'_> {
    fn clause(&self) -> &'static str {
        match self {
            ValueFilter::All => "WHERE r.language_id = $1",
            ValueFilter::KeyOrValue(_) => "WHERE r.language_id = $1 AND (k.name ILIKE $2 OR r.resource_value ILIKE $2)",
            ValueFilter::Key(_) => "WHERE r.language_id = $1 AND k.name ILIKE $2",
        }
    }

    fn pattern(&self) -> Option<String> {
        match self {
            ValueFilter::All => None,
            ValueFilter::KeyOrValue(term) | ValueFilter::Key(term) => Some(like_pattern(term)),
        }
    }
}

/// `%term%` with LIKE wildcards in the term escaped
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(Clone, Debug)]
pub struct PgLocaleResourceRepository {
    pool: PgPool,
}

impl PgLocaleResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the row and its seed values in one transaction
    async fn insert_with_seed(&self, key: &LocaleResourceKey, seed: &[LocaleStringResource]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO locale_resource_keys (id, name, notes, date_added)
            VALUES ($1, $2, $3, $4)
            "#
        )
        .bind(key.id)
        .bind(&key.name)
        .bind(&key.notes)
        .bind(key.date_added)
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

    async fn values_page(
        &self,
        language_id: Uuid,
        filter: ValueFilter<'_>,
        page: PageRequest,
    ) -> Result<PagedList<LocalizedResource>> {
        let pattern = filter.pattern();

        let count_sql = format!("{} {}", VALUE_COUNT, filter.clause());
        let mut count_query = sqlx::query_as::<_, (i64,)>(&count_sql).bind(language_id);
        if let Some(pattern) = &pattern {
            count_query = count_query.bind(pattern);
        }
        let total: (i64,) = count_query.fetch_one(&self.pool).await?;

        let (limit_param, offset_param) = if pattern.is_some() { (3, 4) } else { (2, 3) };
        let page_sql = format!(
            "{} {} ORDER BY k.name ASC LIMIT ${} OFFSET ${}",
            VALUE_SELECT,
            filter.clause(),
            limit_param,
            offset_param
        );
        let mut page_query = sqlx::query_as::<_, LocalizedResource>(&page_sql).bind(language_id);
        if let Some(pattern) = &pattern {
            page_query = page_query.bind(pattern);
        }
        let items = page_query
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(PagedList {
            items,
            page_index: page.page_index,
            page_size: page.page_size,
            total_count: total.0,
        })
    }
}

#[async_trait]
impl LocaleResourceRepository for PgLocaleResourceRepository {
    async fn get_all_keys(&self) -> Result<Vec<LocaleResourceKey>> {
        let keys = sqlx::query_as::<_, LocaleResourceKey>(
            &format!("SELECT {} FROM locale_resource_keys ORDER BY name ASC", KEY_COLUMNS)
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(keys)
    }

    async fn get_keys_page(&self, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locale_resource_keys")
            .fetch_one(&self.pool)
            .await?;

        let items = sqlx::query_as::<_, LocaleResourceKey>(
            &format!("SELECT {} FROM locale_resource_keys ORDER BY name ASC LIMIT $1 OFFSET $2", KEY_COLUMNS)
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(PagedList {
            items,
            page_index: page.page_index,
            page_size: page.page_size,
            total_count: total.0,
        })
    }

    async fn search_keys(&self, search: &str, page: PageRequest) -> Result<PagedList<LocaleResourceKey>> {
        let pattern = like_pattern(search);

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locale_resource_keys WHERE name ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await?;

        let items = sqlx::query_as::<_, LocaleResourceKey>(
            &format!("SELECT {} FROM locale_resource_keys WHERE name ILIKE $1 ORDER BY name ASC LIMIT $2 OFFSET $3", KEY_COLUMNS)
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(PagedList {
            items,
            page_index: page.page_index,
            page_size: page.page_size,
            total_count: total.0,
        })
    }

    async fn get_key_by_id(&self, id: Uuid) -> Result<Option<LocaleResourceKey>> {
        let key = sqlx::query_as::<_, LocaleResourceKey>(
            &format!("SELECT {} FROM locale_resource_keys WHERE id = $1", KEY_COLUMNS)
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(key)
    }

    async fn get_key_by_name(&self, name: &str) -> Result<Option<LocaleResourceKey>> {
        let key = sqlx::query_as::<_, LocaleResourceKey>(
            &format!("SELECT {} FROM locale_resource_keys WHERE name = $1", KEY_COLUMNS)
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(key)
    }

    async fn add_key(&self, key: &LocaleResourceKey, seed: &[LocaleStringResource]) -> Result<()> {
        let started = Instant::now();
        let result = self.insert_with_seed(key, seed).await;
        log_database_operation("insert", "locale_resource_keys", started.elapsed().as_millis() as u64, result.is_ok());

        result
    }

    async fn update_key(&self, key: &LocaleResourceKey) -> Result<()> {
        let result = sqlx::query(
            "UPDATE locale_resource_keys SET name = $2, notes = $3 WHERE id = $1"
        )
        .bind(key.id)
        .bind(&key.name)
        .bind(&key.notes)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(LocaleError::ResourceKeyNotFound(key.name.clone()));
        }

        Ok(())
    }

    async fn delete_key(&self, id: Uuid) -> Result<()> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM locale_resource_keys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        log_database_operation("delete", "locale_resource_keys", started.elapsed().as_millis() as u64, result.is_ok());
        result?;

        Ok(())
    }

    async fn get_value(&self, language_id: Uuid, key_name: &str) -> Result<Option<LocaleStringResource>> {
        let resource = sqlx::query_as::<_, LocaleStringResource>(
            r#"
            SELECT r.id, r.language_id, r.resource_key_id, r.resource_value
            FROM locale_string_resources r
            JOIN locale_resource_keys k ON k.id = r.resource_key_id
            WHERE r.language_id = $1 AND k.name = $2
            "#
        )
        .bind(language_id)
        .bind(key_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resource)
    }

    async fn get_values_for_language(&self, language_id: Uuid) -> Result<Vec<LocalizedResource>> {
        let sql = format!("{} {} ORDER BY k.name ASC", VALUE_SELECT, ValueFilter::All.clause());
        let values = sqlx::query_as::<_, LocalizedResource>(&sql)
            .bind(language_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(values)
    }

    async fn get_values_page(&self, language_id: Uuid, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.values_page(language_id, ValueFilter::All, page).await
    }

    async fn search_values(&self, language_id: Uuid, search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.values_page(language_id, ValueFilter::KeyOrValue(search), page).await
    }

    async fn search_values_by_key(&self, language_id: Uuid, key_search: &str, page: PageRequest) -> Result<PagedList<LocalizedResource>> {
        self.values_page(language_id, ValueFilter::Key(key_search), page).await
    }

    async fn update_value(&self, resource_id: Uuid, value: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE locale_string_resources SET resource_value = $2 WHERE id = $1"
        )
        .bind(resource_id)
        .bind(value)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(LocaleError::Store(format!("Resource row {} vanished before update", resource_id)));
        }

        Ok(())
    }
}
