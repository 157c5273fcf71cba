//! Claim submissions
//!
//! A `ClaimSubmission` carries the raw fields of the claim intake form.
//! Everything is optional at this stage so the wire layer can accept partial
//! bodies and report which required field is missing. `validate()` is the
//! single place the required-field and parse rules live.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::ClaimError;

/// Status assigned to every newly filed claim
pub const DEFAULT_CLAIM_STATUS: &str = "submitted";

/// Raw claim submission as received from the wire layer
///
/// The incident date and time travel as strings and are parsed during
/// validation; the declaration booleans default to false when absent, the
/// same treatment the intake form gives unchecked boxes.
#[derive(Debug, Clone, Default)]
pub struct ClaimSubmission {
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

impl ClaimSubmission {
    /// Validates required-field presence, parses the incident date and time,
    /// and unwraps into a `ValidatedSubmission`.
    ///
    /// Required: every field except `policeReportNumber`, `swiftCode`, and
    /// the two booleans (which default to false). The first missing field is
    /// reported; empty strings count as missing.
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::MissingField` naming the wire-format field, or
    /// `ClaimError::ParseError` when the incident date or time does not
    /// parse.
    pub fn validate(self) -> Result<ValidatedSubmission, ClaimError> {
        let policyholder_name = require(self.policyholder_name, "policyholderName")?;
        let policy_number = require(self.policy_number, "policyNumber")?;
        let contact_number = require(self.contact_number, "contactNumber")?;
        let email = require(self.email, "email")?;
        let incident_date = parse_date(require(self.incident_date, "incidentDate")?)?;
        let incident_time = parse_time(require(self.incident_time, "incidentTime")?)?;
        let incident_location = require(self.incident_location, "incidentLocation")?;
        let incident_description = require(self.incident_description, "incidentDescription")?;
        let claim_type = require(self.claim_type, "claimType")?;
        let estimated_cost = self
            .estimated_cost
            .ok_or_else(|| ClaimError::missing("estimatedCost"))?;
        let items_affected = require(self.items_affected, "itemsAffected")?;
        let bank_name = require(self.bank_name, "bankName")?;
        let account_holder_name = require(self.account_holder_name, "accountHolderName")?;
        let account_number = require(self.account_number, "accountNumber")?;
        let signature = require(self.signature, "signature")?;

        Ok(ValidatedSubmission {
            policyholder_name,
            policy_number,
            contact_number,
            email,
            incident_date,
            incident_time,
            incident_location,
            incident_description,
            claim_type,
            estimated_cost,
            items_affected,
            police_report_filed: self.police_report_filed.unwrap_or(false),
            police_report_number: self.police_report_number,
            bank_name,
            account_holder_name,
            account_number,
            swift_code: self.swift_code,
            information_confirmed: self.information_confirmed.unwrap_or(false),
            signature,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, ClaimError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ClaimError::missing(field)),
    }
}

fn parse_date(value: String) -> Result<NaiveDate, ClaimError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ClaimError::parse("incidentDate", value))
}

/// HTML time inputs send "HH:MM"; other clients include seconds.
fn parse_time(value: String) -> Result<NaiveTime, ClaimError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ClaimError::parse("incidentTime", value))
}

/// A claim submission with all required fields present and parsed
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
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
