//! Claim Domain
//!
//! This crate implements the business rules of claim intake: validating a
//! submitted claim form and normalizing its typed fields (incident date and
//! time, estimated cost). It is infrastructure-agnostic.
//!
//! Claims are filed against a policy number supplied by the claimant; there
//! is no referential link to the quote records, matching the intake form
//! this service digitizes.

pub mod error;
pub mod submission;

pub use error::ClaimError;
pub use submission::{ClaimSubmission, ValidatedSubmission, DEFAULT_CLAIM_STATUS};
