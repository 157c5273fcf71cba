//! Quote applications
//!
//! A `QuoteApplication` carries the raw fields of a create-quote request.
//! Everything is optional at this stage because the wire layer must accept
//! partial bodies and report which required field is missing, rather than
//! failing deserialization. `validate()` is the single place the
//! required-field rules live.

use crate::error::QuoteError;

/// Status assigned to every newly created quote
pub const DEFAULT_STATUS: &str = "pending";

/// Raw quote application as received from the wire layer
///
/// The two deployment variants collect applicant names differently: one uses
/// purchaser/insured names, the other first/last names. All four are
/// optional and pass through to storage untouched.
#[derive(Debug, Clone, Default)]
pub struct QuoteApplication {
    pub purchaser_name: Option<String>,
    pub insured_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub insurance_type: Option<String>,
    pub coverage_amount: Option<String>,
    pub age: Option<i32>,
}

impl QuoteApplication {
    /// Validates required-field presence and unwraps into a
    /// `ValidatedApplication`.
    ///
    /// Required: `email`, `phone`, `insurance_type`, `coverage_amount`,
    /// `age`. The first missing field is reported; empty strings count as
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::MissingField` naming the wire-format field.
    pub fn validate(self) -> Result<ValidatedApplication, QuoteError> {
        let email = require(self.email, "email")?;
        let phone = require(self.phone, "phone")?;
        let insurance_type = require(self.insurance_type, "insuranceType")?;
        let coverage_amount = require(self.coverage_amount, "coverageAmount")?;
        let age = self.age.ok_or_else(|| QuoteError::missing("age"))?;

        Ok(ValidatedApplication {
            purchaser_name: self.purchaser_name,
            insured_name: self.insured_name,
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            phone,
            insurance_type,
            coverage_amount,
            age,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, QuoteError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(QuoteError::missing(field)),
    }
}

/// A quote application with all required fields present
///
/// Note there is no premium field anywhere on the application types: the
/// premium is always computed server-side, so a client-supplied value has no
/// path into storage.
#[derive(Debug, Clone)]
pub struct ValidatedApplication {
    pub purchaser_name: Option<String>,
    pub insured_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub coverage_amount: String,
    pub age: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> QuoteApplication {
        QuoteApplication {
            purchaser_name: Some("Ana Pham".to_string()),
            insured_name: None,
            first_name: None,
            last_name: None,
            email: Some("ana@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            insurance_type: Some("life".to_string()),
            coverage_amount: Some("100000".to_string()),
            age: Some(30),
        }
    }

    #[test]
    fn test_complete_application_validates() {
        let validated = complete().validate().unwrap();
        assert_eq!(validated.email, "ana@example.com");
        assert_eq!(validated.age, 30);
    }

    #[test]
    fn test_missing_email_reported_by_wire_name() {
        let mut app = complete();
        app.email = None;
        assert_eq!(app.validate().unwrap_err(), QuoteError::missing("email"));
    }

    #[test]
    fn test_blank_phone_counts_as_missing() {
        let mut app = complete();
        app.phone = Some("   ".to_string());
        assert_eq!(app.validate().unwrap_err(), QuoteError::missing("phone"));
    }

    #[test]
    fn test_missing_age() {
        let mut app = complete();
        app.age = None;
        assert_eq!(app.validate().unwrap_err(), QuoteError::missing("age"));
    }
}
