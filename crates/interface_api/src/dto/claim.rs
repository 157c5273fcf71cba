//! Claim DTOs
//!
//! Wire field names are camelCase. The incident date and time travel as
//! strings ("YYYY-MM-DD" and "HH:MM" or "HH:MM:SS") and are parsed during
//! domain validation; `estimatedCost` is accepted as a JSON number or a
//! string-encoded decimal.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use domain_claim::ClaimSubmission;
use infra_db::ClaimRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub policyholder_name: Option<String>,
    pub policy_number: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub incident_date: Option<String>,
    pub incident_time: Option<String>,
    pub incident_location: Option<String>,
    pub incident_description: Option<String>,
    pub claim_type: Option<String>,
    pub estimated_cost: Option<Decimal>,
    pub items_affected: Option<String>,
    pub police_report_filed: Option<bool>,
    pub police_report_number: Option<String>,
    pub bank_name: Option<String>,
    pub account_holder_name: Option<String>,
    pub account_number: Option<String>,
    pub swift_code: Option<String>,
    pub information_confirmed: Option<bool>,
    pub signature: Option<String>,
}

impl From<CreateClaimRequest> for ClaimSubmission {
    fn from(request: CreateClaimRequest) -> Self {
        ClaimSubmission {
            policyholder_name: request.policyholder_name,
            policy_number: request.policy_number,
            contact_number: request.contact_number,
            email: request.email,
            incident_date: request.incident_date,
            incident_time: request.incident_time,
            incident_location: request.incident_location,
            incident_description: request.incident_description,
            claim_type: request.claim_type,
            estimated_cost: request.estimated_cost,
            items_affected: request.items_affected,
            police_report_filed: request.police_report_filed,
            police_report_number: request.police_report_number,
            bank_name: request.bank_name,
            account_holder_name: request.account_holder_name,
            account_number: request.account_number,
            swift_code: request.swift_code,
            information_confirmed: request.information_confirmed,
            signature: request.signature,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
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

impl From<ClaimRecord> for ClaimResponse {
    fn from(record: ClaimRecord) -> Self {
        Self {
            id: record.id,
            policyholder_name: record.policyholder_name,
            policy_number: record.policy_number,
            contact_number: record.contact_number,
            email: record.email,
            incident_date: record.incident_date,
            incident_time: record.incident_time,
            incident_location: record.incident_location,
            incident_description: record.incident_description,
            claim_type: record.claim_type,
            estimated_cost: record.estimated_cost,
            items_affected: record.items_affected,
            police_report_filed: record.police_report_filed,
            police_report_number: record.police_report_number,
            bank_name: record.bank_name,
            account_holder_name: record.account_holder_name,
            account_number: record.account_number,
            swift_code: record.swift_code,
            information_confirmed: record.information_confirmed,
            signature: record.signature,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateClaimResponse {
    pub message: String,
    pub claim: ClaimResponse,
}

/// Reduced body returned by the status-update route, mirroring the intake
/// service's original contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatusResponse {
    pub id: i64,
    pub policyholder_name: String,
    pub policy_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ClaimRecord> for ClaimStatusResponse {
    fn from(record: ClaimRecord) -> Self {
        Self {
            id: record.id,
            policyholder_name: record.policyholder_name,
            policy_number: record.policy_number,
            status: record.status,
            created_at: record.created_at,
        }
    }
}
