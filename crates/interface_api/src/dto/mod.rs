//! Request/response data transfer objects

pub mod claim;
pub mod quote;
