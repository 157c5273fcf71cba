//! Persistence Layer
//!
//! This crate provides storage for the quote service on PostgreSQL using
//! SQLx, behind explicit `QuoteStore` and `ClaimStore` ports so handlers
//! never touch a database handle directly.
//!
//! # Architecture
//!
//! The store traits are the seam between the HTTP layer and storage. Each
//! has two adapters:
//!
//! - `PostgresQuoteStore` / `PostgresClaimStore` - the production adapters
//! - `InMemoryQuoteStore` / `InMemoryClaimStore` - test doubles enabling
//!   fast, isolated tests
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresQuoteStore};
//!
//! let pool = create_pool(DatabaseConfig::new(url)).await?;
//! let store = PostgresQuoteStore::new(pool);
//! let quote = store.get(42).await?;
//! ```

pub mod claim_store;
pub mod error;
pub mod pool;
pub mod repositories;
pub mod store;

pub use claim_store::{ClaimRecord, ClaimStore, NewClaimRecord};
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{
    InMemoryClaimStore, InMemoryQuoteStore, PostgresClaimStore, PostgresQuoteStore,
};
pub use store::{NewQuoteRecord, QuoteRecord, QuoteStore};
