//! Test Utilities Crate
//!
//! Provides shared test builders and fixtures for the quote service
//! test suite.
//!
//! # Modules
//!
//! - `builders`: Request-body builder for HTTP-level tests
//! - `fixtures`: Plausible applicant data and store records

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
