//! Claim store port
//!
//! `ClaimStore` mirrors the `QuoteStore` seam for claim records. Claims have
//! no delete operation: the intake workflow only files, reviews, and updates
//! status.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use domain_claim::ValidatedSubmission;
use rust_decimal::Decimal;

use crate::error::DatabaseError;

/// Storage operations over claim records
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Persists a new claim, assigning its id and creation timestamp.
    async fn create(&self, claim: NewClaimRecord) -> Result<ClaimRecord, DatabaseError>;

    /// Returns all claims, newest first (created_at descending, id
    /// descending as tiebreak). An empty store yields an empty vec.
    async fn list(&self) -> Result<Vec<ClaimRecord>, DatabaseError>;

    /// Returns the claim with the given id.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` when no claim has that id.
    async fn get(&self, id: i64) -> Result<ClaimRecord, DatabaseError>;

    /// Overwrites the status with the caller-supplied value verbatim and
    /// returns the updated record. Like quote status, claim status carries
    /// no state machine.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` when no claim has that id.
    async fn update_status(&self, id: i64, status: &str) -> Result<ClaimRecord, DatabaseError>;
}

/// A persisted claim
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClaimRecord {
    pub id: i64,
    pub policyholder_name: String,
    pub policy_number: String,
    pub contact_number: String,
    pub email: String,
    pub incident_date: NaiveDate,
    pub incident_time: NaiveTime,
    pub incident_location: String,
    pub incident_description: String,
    pub claim_type: String,
    pub estimated_cost: Decimal,
    pub items_affected: String,
    pub police_report_filed: bool,
    pub police_report_number: Option<String>,
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub swift_code: Option<String>,
    pub information_confirmed: bool,
    pub signature: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Data for filing a new claim
///
/// Carries no id, created_at, or status: the store assigns all three.
#[derive(Debug, Clone)]
pub struct NewClaimRecord {
    pub policyholder_name: String,
    pub policy_number: String,
    pub contact_number: String,
    pub email: String,
    pub incident_date: NaiveDate,
    pub incident_time: NaiveTime,
    pub incident_location: String,
    pub incident_description: String,
    pub claim_type: String,
    pub estimated_cost: Decimal,
    pub items_affected: String,
    pub police_report_filed: bool,
    pub police_report_number: Option<String>,
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub swift_code: Option<String>,
    pub information_confirmed: bool,
    pub signature: String,
}

impl NewClaimRecord {
    /// Builds a record from a validated claim submission
    pub fn from_submission(submission: ValidatedSubmission) -> Self {
        Self {
            policyholder_name: submission.policyholder_name,
            policy_number: submission.policy_number,
            contact_number: submission.contact_number,
            email: submission.email,
            incident_date: submission.incident_date,
            incident_time: submission.incident_time,
            incident_location: submission.incident_location,
            incident_description: submission.incident_description,
            claim_type: submission.claim_type,
            estimated_cost: submission.estimated_cost,
            items_affected: submission.items_affected,
            police_report_filed: submission.police_report_filed,
            police_report_number: submission.police_report_number,
            bank_name: submission.bank_name,
            account_holder_name: submission.account_holder_name,
            account_number: submission.account_number,
            swift_code: submission.swift_code,
            information_confirmed: submission.information_confirmed,
            signature: submission.signature,
        }
    }
}
