//! Quote DTOs
//!
//! Wire field names are camelCase regardless of internal naming.
//! `coverageAmount` and `age` are accepted as either JSON integers or
//! string-encoded integers, because the legacy frontends disagree on which
//! they send; coverage is stored in its string form.

use chrono::{DateTime, Utc};
use domain_quote::{QuoteApplication, QuoteError};
use infra_db::QuoteRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub purchaser_name: Option<String>,
    pub insured_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub insurance_type: Option<String>,
    pub coverage_amount: Option<CoverageValue>,
    pub age: Option<AgeValue>,
}

/// Coverage as transmitted on the wire: string-encoded integer or a bare
/// JSON integer, normalized to the stored string form
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CoverageValue {
    Number(i64),
    Text(String),
}

impl CoverageValue {
    fn into_string(self) -> String {
        match self {
            CoverageValue::Number(n) => n.to_string(),
            CoverageValue::Text(s) => s,
        }
    }
}

/// Age as transmitted on the wire: integer or string-encoded integer
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Text(String),
}

impl AgeValue {
    fn parse(&self) -> Result<i32, QuoteError> {
        match self {
            AgeValue::Number(n) => {
                i32::try_from(*n).map_err(|_| QuoteError::parse("age", n.to_string()))
            }
            AgeValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| QuoteError::parse("age", s.clone())),
        }
    }
}

impl TryFrom<CreateQuoteRequest> for QuoteApplication {
    type Error = QuoteError;

    fn try_from(request: CreateQuoteRequest) -> Result<Self, Self::Error> {
        let age = request.age.map(|a| a.parse()).transpose()?;

        Ok(QuoteApplication {
            purchaser_name: request.purchaser_name,
            insured_name: request.insured_name,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            insurance_type: request.insurance_type,
            coverage_amount: request.coverage_amount.map(CoverageValue::into_string),
            age,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
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

impl From<QuoteRecord> for QuoteResponse {
    fn from(record: QuoteRecord) -> Self {
        Self {
            id: record.id,
            purchaser_name: record.purchaser_name,
            insured_name: record.insured_name,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            insurance_type: record.insurance_type,
            coverage_amount: record.coverage_amount,
            age: record.age,
            premium: record.premium,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateQuoteResponse {
    pub message: String,
    pub quote: QuoteResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
