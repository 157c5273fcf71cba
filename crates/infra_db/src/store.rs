//! Quote store port
//!
//! `QuoteStore` is the seam the HTTP handlers are written against. Adapters
//! implement it for PostgreSQL (production) and in-memory (tests), so request
//! handling never depends on a concrete database handle.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_quote::ValidatedApplication;
use rust_decimal::Decimal;

use crate::error::DatabaseError;

/// Storage operations over quote records
///
/// Each mutating operation is atomic: it either fully applies or leaves the
/// store untouched. There is no cross-call locking; concurrent updates to
/// the same id are last-write-wins at the store's native isolation.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persists a new quote, assigning its id and creation timestamp.
    /// Both are set exactly once and never change afterwards.
    async fn create(&self, quote: NewQuoteRecord) -> Result<QuoteRecord, DatabaseError>;

    /// Returns all quotes, newest first (created_at descending, id
    /// descending as tiebreak). An empty store yields an empty vec.
    async fn list(&self) -> Result<Vec<QuoteRecord>, DatabaseError>;

    /// Returns the quote with the given id.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` when no quote has that id.
    async fn get(&self, id: i64) -> Result<QuoteRecord, DatabaseError>;

    /// Overwrites the status with the caller-supplied value verbatim and
    /// returns the updated record. No allowed-value check is performed;
    /// status carries no state machine.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` when no quote has that id.
    async fn update_status(&self, id: i64, status: &str) -> Result<QuoteRecord, DatabaseError>;

    /// Permanently removes the quote. Hard delete, no tombstone, so a
    /// second delete of the same id reports not-found.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` when no quote has that id.
    async fn delete(&self, id: i64) -> Result<(), DatabaseError>;
}

/// A persisted quote
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct QuoteRecord {
    pub id: i64,
    pub purchaser_name: Option<String>,
    pub insured_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub coverage_amount: String,
    pub age: i32,
    pub premium: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new quote
///
/// Carries no id, created_at, or status: the store assigns all three. The
/// premium is the server-computed amount; there is no path for a
/// client-supplied premium to reach this type.
#[derive(Debug, Clone)]
pub struct NewQuoteRecord {
    pub purchaser_name: Option<String>,
    pub insured_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub coverage_amount: String,
    pub age: i32,
    pub premium: Decimal,
}

impl NewQuoteRecord {
    /// Builds a record from a validated application and its computed premium
    pub fn from_application(application: ValidatedApplication, premium: Decimal) -> Self {
        Self {
            purchaser_name: application.purchaser_name,
            insured_name: application.insured_name,
            first_name: application.first_name,
            last_name: application.last_name,
            email: application.email,
            phone: application.phone,
            insurance_type: application.insurance_type,
            coverage_amount: application.coverage_amount,
            age: application.age,
            premium,
        }
    }
}
