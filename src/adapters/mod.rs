//! Infrastructure Adapters
//!
//! Implementations backed by external systems.

pub mod postgres;

// Re-exports
pub use postgres::{PgQueryLog, QueryLogError};
