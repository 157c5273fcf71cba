//! PostgreSQL claim store
//!
//! The production adapter for the `ClaimStore` port. Same single-statement
//! atomicity as the quote adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::claim_store::{ClaimRecord, ClaimStore, NewClaimRecord};
use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str = "id, policyholder_name, policy_number, contact_number, email, \
     incident_date, incident_time, incident_location, incident_description, claim_type, \
     estimated_cost, items_affected, police_report_filed, police_report_number, \
     bank_name, account_holder_name, account_number, swift_code, \
     information_confirmed, signature, status, created_at";

/// Claim store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    pool: PgPool,
}

impl PostgresClaimStore {
    /// Creates a new store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaimStore for PostgresClaimStore {
    async fn create(&self, claim: NewClaimRecord) -> Result<ClaimRecord, DatabaseError> {
        // id, status, and created_at come from the column defaults
        let sql = format!(
            "INSERT INTO claims (
                policyholder_name, policy_number, contact_number, email,
                incident_date, incident_time, incident_location, incident_description,
                claim_type, estimated_cost, items_affected,
                police_report_filed, police_report_number,
                bank_name, account_holder_name, account_number, swift_code,
                information_confirmed, signature
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                      $14, $15, $16, $17, $18, $19)
            RETURNING {CLAIM_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ClaimRecord>(&sql)
            .bind(claim.policyholder_name)
            .bind(claim.policy_number)
            .bind(claim.contact_number)
            .bind(claim.email)
            .bind(claim.incident_date)
            .bind(claim.incident_time)
            .bind(claim.incident_location)
            .bind(claim.incident_description)
            .bind(claim.claim_type)
            .bind(claim.estimated_cost)
            .bind(claim.items_affected)
            .bind(claim.police_report_filed)
            .bind(claim.police_report_number)
            .bind(claim.bank_name)
            .bind(claim.account_holder_name)
            .bind(claim.account_number)
            .bind(claim.swift_code)
            .bind(claim.information_confirmed)
            .bind(claim.signature)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ClaimRecord>, DatabaseError> {
        let sql = format!(
            "SELECT {CLAIM_COLUMNS} FROM claims ORDER BY created_at DESC, id DESC"
        );

        let claims = sqlx::query_as::<_, ClaimRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(claims)
    }

    async fn get(&self, id: i64) -> Result<ClaimRecord, DatabaseError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE id = $1");

        sqlx::query_as::<_, ClaimRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Claim", id))
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<ClaimRecord, DatabaseError> {
        let sql = format!(
            "UPDATE claims SET status = $2 WHERE id = $1 RETURNING {CLAIM_COLUMNS}"
        );

        sqlx::query_as::<_, ClaimRecord>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Claim", id))
    }
}
