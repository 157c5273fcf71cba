//! In-memory stores
//!
//! Test doubles for the `QuoteStore` and `ClaimStore` ports. Ids are
//! assigned from a monotonic counter and listing matches the PostgreSQL
//! ordering (created_at descending, id descending), so tests exercise the
//! same observable contract as the production adapters.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use domain_claim::DEFAULT_CLAIM_STATUS;
use domain_quote::DEFAULT_STATUS;

use crate::claim_store::{ClaimRecord, ClaimStore, NewClaimRecord};
use crate::error::DatabaseError;
use crate::store::{NewQuoteRecord, QuoteRecord, QuoteStore};

/// Quote store held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    quotes: BTreeMap<i64, QuoteRecord>,
}

impl InMemoryQuoteStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-write; the map
        // itself is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn create(&self, quote: NewQuoteRecord) -> Result<QuoteRecord, DatabaseError> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;

        let record = QuoteRecord {
            id,
            purchaser_name: quote.purchaser_name,
            insured_name: quote.insured_name,
            first_name: quote.first_name,
            last_name: quote.last_name,
            email: quote.email,
            phone: quote.phone,
            insurance_type: quote.insurance_type,
            coverage_amount: quote.coverage_amount,
            age: quote.age,
            premium: quote.premium,
            status: DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
        };

        inner.quotes.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<QuoteRecord>, DatabaseError> {
        let inner = self.lock();
        let mut quotes: Vec<QuoteRecord> = inner.quotes.values().cloned().collect();
        quotes.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(quotes)
    }

    async fn get(&self, id: i64) -> Result<QuoteRecord, DatabaseError> {
        self.lock()
            .quotes
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found("Quote", id))
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<QuoteRecord, DatabaseError> {
        let mut inner = self.lock();
        let record = inner
            .quotes
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found("Quote", id))?;
        record.status = status.to_string();
        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        self.lock()
            .quotes
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::not_found("Quote", id))
    }
}

/// Claim store held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryClaimStore {
    inner: Mutex<ClaimInner>,
}

#[derive(Debug, Default)]
struct ClaimInner {
    next_id: i64,
    claims: BTreeMap<i64, ClaimRecord>,
}

impl InMemoryClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ClaimInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn create(&self, claim: NewClaimRecord) -> Result<ClaimRecord, DatabaseError> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;

        let record = ClaimRecord {
            id,
            policyholder_name: claim.policyholder_name,
            policy_number: claim.policy_number,
            contact_number: claim.contact_number,
            email: claim.email,
            incident_date: claim.incident_date,
            incident_time: claim.incident_time,
            incident_location: claim.incident_location,
            incident_description: claim.incident_description,
            claim_type: claim.claim_type,
            estimated_cost: claim.estimated_cost,
            items_affected: claim.items_affected,
            police_report_filed: claim.police_report_filed,
            police_report_number: claim.police_report_number,
            bank_name: claim.bank_name,
            account_holder_name: claim.account_holder_name,
            account_number: claim.account_number,
            swift_code: claim.swift_code,
            information_confirmed: claim.information_confirmed,
            signature: claim.signature,
            status: DEFAULT_CLAIM_STATUS.to_string(),
            created_at: Utc::now(),
        };

        inner.claims.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ClaimRecord>, DatabaseError> {
        let inner = self.lock();
        let mut claims: Vec<ClaimRecord> = inner.claims.values().cloned().collect();
        claims.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(claims)
    }

    async fn get(&self, id: i64) -> Result<ClaimRecord, DatabaseError> {
        self.lock()
            .claims
            .get(&id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found("Claim", id))
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<ClaimRecord, DatabaseError> {
        let mut inner = self.lock();
        let record = inner
            .claims
            .get_mut(&id)
            .ok_or_else(|| DatabaseError::not_found("Claim", id))?;
        record.status = status.to_string();
        Ok(record.clone())
    }
}
