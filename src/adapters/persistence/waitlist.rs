use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        email: row.get("email"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let row = sqlx::query(
            "SELECT id, email, created_at FROM waitlist_entries WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_entry))
    }

    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry> {
        // created_at comes from the column default so the stored timestamp
        // and the returned entry always agree
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist_entries (id, email)
            VALUES ($1, $2)
            RETURNING id, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row_to_entry(row))
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(count)
    }
}
