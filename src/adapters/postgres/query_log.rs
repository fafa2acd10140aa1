//! PostgreSQL-backed query log.
//!
//! Writes are best-effort: callers spawn them detached and only the
//! operator log ever sees a failure. Reads cap at the 10 most recent
//! entries, newest first.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::QueryLogEntry;

const RECENT_LIMIT: i64 = 10;

// seq is assigned by the database sequence, so descending seq is insertion
// order newest-first, stable within a created_at tick.
const RECENT_QUERY: &str =
    "SELECT logged_on, query FROM query_log ORDER BY seq DESC LIMIT $1";

/// Query log failures. The underlying driver error is preserved as the
/// source; HTTP responses still only carry a generic string.
#[derive(Debug, Error)]
pub enum QueryLogError {
    #[error("Failed to write query log entry")]
    Write(#[source] sqlx::Error),

    #[error("Failed to read query log entries")]
    Read(#[source] sqlx::Error),
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct QueryLogRow {
    logged_on: NaiveDate,
    query: String,
}

impl From<QueryLogRow> for QueryLogEntry {
    fn from(row: QueryLogRow) -> Self {
        Self {
            date: row.logged_on,
            q: row.query,
        }
    }
}

/// Append-only query log over a shared connection pool.
#[derive(Clone)]
pub struct PgQueryLog {
    pool: PgPool,
}

impl PgQueryLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one entry dated today. No uniqueness constraint applies.
    pub async fn insert(&self, query_string: &str) -> Result<(), QueryLogError> {
        sqlx::query("INSERT INTO query_log (id, logged_on, query) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(Utc::now().date_naive())
            .bind(query_string)
            .execute(&self.pool)
            .await
            .map_err(QueryLogError::Write)?;

        Ok(())
    }

    /// The 10 most recently inserted entries, newest first.
    pub async fn fetch_recent(&self) -> Result<Vec<QueryLogEntry>, QueryLogError> {
        let rows = sqlx::query_as::<_, QueryLogRow>(RECENT_QUERY)
            .bind(RECENT_LIMIT)
            .fetch_all(&self.pool)
            .await
            .map_err(QueryLogError::Read)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_entries_cap_at_ten() {
        assert_eq!(RECENT_LIMIT, 10);
        assert!(RECENT_QUERY.ends_with("LIMIT $1"));
    }

    #[test]
    fn recent_query_reads_insertion_order_newest_first() {
        assert!(RECENT_QUERY.contains("ORDER BY seq DESC"));
    }

    #[test]
    fn row_maps_into_wire_entry() {
        let row = QueryLogRow {
            logged_on: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            query: "/api/cats?offset=2".to_string(),
        };

        let entry: QueryLogEntry = row.into();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(entry.q, "/api/cats?offset=2");
    }
}
