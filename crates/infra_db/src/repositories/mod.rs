//! Store adapters

pub mod claim;
pub mod memory;
pub mod quote;

pub use claim::PostgresClaimStore;
pub use memory::{InMemoryClaimStore, InMemoryQuoteStore};
pub use quote::PostgresQuoteStore;
