//! PostgreSQL quote store
//!
//! The production adapter for the `QuoteStore` port. Every mutation is a
//! single statement, so per-request commit-or-rollback atomicity is
//! inherited directly from PostgreSQL statement atomicity.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DatabaseError;
use crate::store::{NewQuoteRecord, QuoteRecord, QuoteStore};

const QUOTE_COLUMNS: &str = "id, purchaser_name, insured_name, first_name, last_name, \
     email, phone, insurance_type, coverage_amount, age, premium, status, created_at";

/// Quote store backed by a PostgreSQL connection pool
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::PostgresQuoteStore;
///
/// let store = PostgresQuoteStore::new(pool);
/// let quotes = store.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostgresQuoteStore {
    pool: PgPool,
}

impl PostgresQuoteStore {
    /// Creates a new store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for PostgresQuoteStore {
    async fn create(&self, quote: NewQuoteRecord) -> Result<QuoteRecord, DatabaseError> {
        // id, status, and created_at come from the column defaults
        let sql = format!(
            "INSERT INTO quotes (
                purchaser_name, insured_name, first_name, last_name,
                email, phone, insurance_type, coverage_amount, age, premium
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {QUOTE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, QuoteRecord>(&sql)
            .bind(quote.purchaser_name)
            .bind(quote.insured_name)
            .bind(quote.first_name)
            .bind(quote.last_name)
            .bind(quote.email)
            .bind(quote.phone)
            .bind(quote.insurance_type)
            .bind(quote.coverage_amount)
            .bind(quote.age)
            .bind(quote.premium)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<QuoteRecord>, DatabaseError> {
        let sql = format!(
            "SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY created_at DESC, id DESC"
        );

        let quotes = sqlx::query_as::<_, QuoteRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(quotes)
    }

    async fn get(&self, id: i64) -> Result<QuoteRecord, DatabaseError> {
        let sql = format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = $1");

        sqlx::query_as::<_, QuoteRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Quote", id))
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<QuoteRecord, DatabaseError> {
        let sql = format!(
            "UPDATE quotes SET status = $2 WHERE id = $1 RETURNING {QUOTE_COLUMNS}"
        );

        sqlx::query_as::<_, QuoteRecord>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Quote", id))
    }

    async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Quote", id));
        }

        Ok(())
    }
}
