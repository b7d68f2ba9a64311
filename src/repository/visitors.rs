//! Visitors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::visitor::{RegisterVisitor, Visitor},
};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new visitor record. Photo and signature are stored verbatim,
    /// as the empty string when absent. The store assigns the id.
    pub async fn insert(&self, data: &RegisterVisitor) -> AppResult<Visitor> {
        let row = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitors (name, reason, photo, signature)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.reason)
        .bind(data.photo.as_deref().unwrap_or(""))
        .bind(data.signature.as_deref().unwrap_or(""))
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
