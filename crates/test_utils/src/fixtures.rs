//! Pre-built test data

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use infra_db::NewQuoteRecord;
use rust_decimal_macros::dec;

/// A plausible applicant name
pub fn applicant_name() -> String {
    Name().fake()
}

/// A plausible applicant email
pub fn applicant_email() -> String {
    SafeEmail().fake()
}

/// A plausible applicant phone number
pub fn applicant_phone() -> String {
    PhoneNumber().fake()
}

/// A new-quote record ready to insert into a store, with the given email
/// so tests can tell records apart
pub fn new_quote_record(email: &str) -> NewQuoteRecord {
    NewQuoteRecord {
        purchaser_name: Some(applicant_name()),
        insured_name: Some(applicant_name()),
        first_name: None,
        last_name: None,
        email: email.to_string(),
        phone: applicant_phone(),
        insurance_type: "life".to_string(),
        coverage_amount: "100000".to_string(),
        age: 30,
        premium: dec!(41.67),
    }
}
