use crate::db::DbPool;
use crate::models::contact::COLUMNS;
use crate::models::{Contact, ContactDraft};
use crate::query::{ContactFilter, ContactQuery, Page};
use crate::repositories::traits::{ContactRepository, StoreResult};
use async_trait::async_trait;
use chrono::Utc;

/// Contact repository backed by the shared SQLite pool.
///
/// Writes return the stored row from the same statement, so responses always
/// reflect exactly what was persisted. Every statement filters on both id
/// and owner, keeping other users' rows unreachable.
pub struct SqliteContactRepository {
    pool: DbPool,
}

impl SqliteContactRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn create(&self, owner_id: i64, draft: &ContactDraft) -> StoreResult<Contact> {
        let sql = format!(
            "INSERT INTO contacts \
             (user_id, name, phone, email, company, tags, notes, is_favorite, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        sqlx::query_as::<_, Contact>(&sql)
            .bind(owner_id)
            .bind(draft.name.as_str())
            .bind(draft.phone.as_str())
            .bind(draft.email.as_str())
            .bind(draft.company.as_deref())
            .bind(draft.tags.as_deref())
            .bind(draft.notes.as_deref())
            .bind(draft.favorite())
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    async fn find(&self, id: i64, owner_id: i64) -> StoreResult<Option<Contact>> {
        let sql = format!(
            "SELECT {} FROM contacts WHERE id = ? AND user_id = ?",
            COLUMNS
        );
        sqlx::query_as::<_, Contact>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(
        &self,
        owner_id: i64,
        filter: &ContactFilter,
        page: &Page,
    ) -> StoreResult<(Vec<Contact>, i64)> {
        let query = ContactQuery::new(owner_id, filter);
        let mut select = query.select(page);
        let mut count = query.count();

        let rows = select.build_query_as::<Contact>().fetch_all(&self.pool);
        let total = count.build_query_scalar::<i64>().fetch_one(&self.pool);
        futures::try_join!(rows, total)
    }

    async fn update(
        &self,
        id: i64,
        owner_id: i64,
        draft: &ContactDraft,
    ) -> StoreResult<Option<Contact>> {
        // created_at is deliberately left out of the SET list
        let sql = format!(
            "UPDATE contacts SET name = ?, phone = ?, email = ?, company = ?, \
             tags = ?, notes = ?, is_favorite = ? \
             WHERE id = ? AND user_id = ? RETURNING {}",
            COLUMNS
        );
        sqlx::query_as::<_, Contact>(&sql)
            .bind(draft.name.as_str())
            .bind(draft.phone.as_str())
            .bind(draft.email.as_str())
            .bind(draft.company.as_deref())
            .bind(draft.tags.as_deref())
            .bind(draft.notes.as_deref())
            .bind(draft.favorite())
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: i64, owner_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn toggle_favorite(&self, id: i64, owner_id: i64) -> StoreResult<Option<bool>> {
        // Single statement, so concurrent toggles cannot lose a flip
        let row: Option<(bool,)> = sqlx::query_as(
            "UPDATE contacts SET is_favorite = NOT is_favorite \
             WHERE id = ? AND user_id = ? RETURNING is_favorite",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn tag_strings(&self, owner_id: i64) -> StoreResult<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT tags FROM contacts WHERE user_id = ? AND tags IS NOT NULL AND tags != ''",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|(tags,)| tags).collect())
    }
}
