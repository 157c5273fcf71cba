//! Builder patterns for test data construction

use serde_json::{json, Map, Value};

use crate::fixtures::{applicant_email, applicant_name, applicant_phone};

/// Builder for create-quote request bodies
///
/// Starts from a complete, valid body and lets tests override or remove
/// individual fields, which keeps missing-field tests to one line.
///
/// # Example
///
/// ```rust
/// use test_utils::QuoteBody;
///
/// let body = QuoteBody::valid().without("email").build();
/// assert!(body.get("email").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct QuoteBody {
    fields: Map<String, Value>,
}

impl QuoteBody {
    /// A complete valid body: life insurance, 100000 coverage, age 30
    pub fn valid() -> Self {
        let mut fields = Map::new();
        fields.insert("purchaserName".to_string(), json!(applicant_name()));
        fields.insert("insuredName".to_string(), json!(applicant_name()));
        fields.insert("email".to_string(), json!(applicant_email()));
        fields.insert("phone".to_string(), json!(applicant_phone()));
        fields.insert("insuranceType".to_string(), json!("life"));
        fields.insert("coverageAmount".to_string(), json!("100000"));
        fields.insert("age".to_string(), json!(30));
        Self { fields }
    }

    /// Sets or replaces a field
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Removes a field entirely
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn insurance_type(self, insurance_type: &str) -> Self {
        self.set("insuranceType", json!(insurance_type))
    }

    pub fn coverage_amount(self, coverage_amount: &str) -> Self {
        self.set("coverageAmount", json!(coverage_amount))
    }

    pub fn age(self, age: Value) -> Self {
        self.set("age", age)
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Builder for create-claim request bodies
///
/// Same shape as `QuoteBody`: starts complete and valid, overridden or
/// stripped per test.
#[derive(Debug, Clone)]
pub struct ClaimBody {
    fields: Map<String, Value>,
}

impl ClaimBody {
    /// A complete valid body: home claim with a filed police report omitted
    pub fn valid() -> Self {
        let mut fields = Map::new();
        fields.insert("policyholderName".to_string(), json!(applicant_name()));
        fields.insert("policyNumber".to_string(), json!("POL-2024-0042"));
        fields.insert("contactNumber".to_string(), json!(applicant_phone()));
        fields.insert("email".to_string(), json!(applicant_email()));
        fields.insert("incidentDate".to_string(), json!("2024-01-15"));
        fields.insert("incidentTime".to_string(), json!("14:30"));
        fields.insert("incidentLocation".to_string(), json!("12 Elm St"));
        fields.insert("incidentDescription".to_string(), json!("Kitchen fire"));
        fields.insert("claimType".to_string(), json!("home"));
        fields.insert("estimatedCost".to_string(), json!(2500.0));
        fields.insert("itemsAffected".to_string(), json!("Stove, cabinets"));
        fields.insert("bankName".to_string(), json!("First National"));
        fields.insert("accountHolderName".to_string(), json!(applicant_name()));
        fields.insert("accountNumber".to_string(), json!("000123456"));
        fields.insert("informationConfirmed".to_string(), json!(true));
        fields.insert("signature".to_string(), json!(applicant_name()));
        Self { fields }
    }

    /// Sets or replaces a field
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Removes a field entirely
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
