//! Quote Domain
//!
//! This crate implements the business rules of the quote service: premium
//! rating and quote application validation. It is infrastructure-agnostic,
//! containing only pure functions and value objects.
//!
//! # Architecture
//!
//! - **Rating**: `RateProfile` pairs a rate table with a rounding policy,
//!   selected once at startup. Rating is a pure function of
//!   (insurance type, coverage amount, age).
//! - **Applications**: `QuoteApplication` carries the raw create-request
//!   fields; `validate()` enforces the required-field rules and yields a
//!   `ValidatedApplication`.
//!
//! # Example
//!
//! ```rust
//! use domain_quote::RateProfile;
//!
//! let premium = RateProfile::MonthlyFraction.premium("life", "100000", 30)?;
//! assert_eq!(premium.to_string(), "41.67");
//! # Ok::<(), domain_quote::QuoteError>(())
//! ```

pub mod application;
pub mod error;
pub mod premium;

pub use application::{QuoteApplication, ValidatedApplication, DEFAULT_STATUS};
pub use error::QuoteError;
pub use premium::{age_factor, InsuranceType, RateProfile};
