//! Claim Store Contract Tests
//!
//! Exercises the `ClaimStore` contract against the in-memory adapter:
//! - Filing assigns id, timestamp, and the submitted default status
//! - Round-trip fidelity of stored fields, including optional ones
//! - Listing order (newest first)
//! - Status overwrite semantics and not-found behavior
//!
//! There is deliberately no delete: claims are never removed, only moved
//! through statuses.

use chrono::{NaiveDate, NaiveTime};
use domain_claim::DEFAULT_CLAIM_STATUS;
use infra_db::{ClaimStore, InMemoryClaimStore, NewClaimRecord};
use rust_decimal_macros::dec;

fn sample_claim(policy_number: &str) -> NewClaimRecord {
    NewClaimRecord {
        policyholder_name: "Linh Tran".to_string(),
        policy_number: policy_number.to_string(),
        contact_number: "555-0123".to_string(),
        email: "linh@example.com".to_string(),
        incident_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        incident_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        incident_location: "12 Elm St".to_string(),
        incident_description: "Kitchen fire".to_string(),
        claim_type: "home".to_string(),
        estimated_cost: dec!(2500.00),
        items_affected: "Stove, cabinets".to_string(),
        police_report_filed: false,
        police_report_number: None,
        bank_name: "First National".to_string(),
        account_holder_name: "Linh Tran".to_string(),
        account_number: "000123456".to_string(),
        swift_code: None,
        information_confirmed: true,
        signature: "Linh Tran".to_string(),
    }
}

// ============================================================================
// CREATE TESTS
// ============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id_and_default_status() {
        let store = InMemoryClaimStore::new();
        let created = store.create(sample_claim("POL-001")).await.unwrap();

        assert!(created.id > 0, "store should assign a positive id");
        assert_eq!(created.status, DEFAULT_CLAIM_STATUS);
    }

    #[tokio::test]
    async fn test_created_claim_round_trips() {
        let store = InMemoryClaimStore::new();
        let created = store.create(sample_claim("POL-001")).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(fetched, created, "get by id should return identical fields");
    }

    #[tokio::test]
    async fn test_optional_fields_round_trip() {
        let store = InMemoryClaimStore::new();
        let mut claim = sample_claim("POL-002");
        claim.police_report_filed = true;
        claim.police_report_number = Some("RPT-881".to_string());
        claim.swift_code = Some("FNBKUS33".to_string());

        let created = store.create(claim).await.unwrap();
        assert!(created.police_report_filed);
        assert_eq!(created.police_report_number.as_deref(), Some("RPT-881"));
        assert_eq!(created.swift_code.as_deref(), Some("FNBKUS33"));
    }
}

// ============================================================================
// LIST TESTS
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_lists_empty() {
        let store = InMemoryClaimStore::new();
        let claims = store.list().await.unwrap();
        assert!(claims.is_empty());
    }

    #[tokio::test]
    async fn test_listing_is_newest_first() {
        let store = InMemoryClaimStore::new();
        let a = store.create(sample_claim("POL-A")).await.unwrap();
        let b = store.create(sample_claim("POL-B")).await.unwrap();
        let c = store.create(sample_claim("POL-C")).await.unwrap();

        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id], "list should be newest first");
    }
}

// ============================================================================
// UPDATE STATUS TESTS
// ============================================================================

mod update_status_tests {
    use super::*;

    #[tokio::test]
    async fn test_status_overwritten_verbatim() {
        let store = InMemoryClaimStore::new();
        let created = store.create(sample_claim("POL-001")).await.unwrap();

        let updated = store.update_status(created.id, "under review").await.unwrap();
        assert_eq!(updated.status, "under review");
    }

    #[tokio::test]
    async fn test_update_preserves_other_fields() {
        let store = InMemoryClaimStore::new();
        let created = store.create(sample_claim("POL-001")).await.unwrap();
        let updated = store.update_status(created.id, "approved").await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at, "created_at is immutable");
        assert_eq!(updated.estimated_cost, created.estimated_cost);
        assert_eq!(updated.policy_number, created.policy_number);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let store = InMemoryClaimStore::new();
        let err = store.update_status(999, "approved").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
