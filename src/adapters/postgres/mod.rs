//! PostgreSQL Adapter Implementations

mod query_log;

pub use query_log::{PgQueryLog, QueryLogError};
