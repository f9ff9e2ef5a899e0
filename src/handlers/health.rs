//! Health check endpoint for the transfer service.
//!
//! Answers "is the service up, can it reach PostgreSQL, and how much is it
//! holding" in one round trip, which is enough for a load balancer probe
//! and for a quick look during development.

use crate::{db::DbPool, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Number of accounts currently held
    pub accounts: i64,

    /// Transfers processed across all banks since the schema was created
    pub transfers_processed: i64,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// The account count doubles as the connectivity probe: if PostgreSQL is
/// unreachable the query fails and the standard 500 error response is
/// returned instead.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "accounts": 2,
///   "transfers_processed": 7,
///   "timestamp": "2026-08-25T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
        .fetch_one(&pool)
        .await?;

    // SUM over BIGINT widens to NUMERIC in PostgreSQL, hence the cast back.
    let transfers_processed: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(total_transfers), 0)::BIGINT FROM banks")
            .fetch_one(&pool)
            .await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        accounts,
        transfers_processed,
        timestamp: Utc::now(),
    }))
}
