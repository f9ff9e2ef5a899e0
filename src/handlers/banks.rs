//! Bank HTTP handlers.
//!
//! - GET /api/v1/banks/{id} - Get bank by ID, including its running
//!   transfer count

use crate::{
    db::DbPool,
    error::AppError,
    models::bank::{Bank, BankResponse},
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Get a specific bank by ID.
///
/// Useful for checking how many transfers the service has processed on
/// behalf of this bank.
///
/// # Response
///
/// - **Success (200 OK)**: Returns bank details
/// - **Error (404)**: Bank not found
pub async fn get_bank(
    State(pool): State<DbPool>,
    Path(bank_id): Path<Uuid>,
) -> Result<Json<BankResponse>, AppError> {
    let bank = sqlx::query_as::<_, Bank>(
        r#"
        SELECT id, name, total_transfers, created_at, updated_at
        FROM banks
        WHERE id = $1
        "#,
    )
    .bind(bank_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::BankNotFound)?;

    Ok(Json(bank.into()))
}
