//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - GET /api/v1/accounts - List all accounts
//! - GET /api/v1/accounts/{id} - Get account by ID
//! - POST /api/v1/accounts - Create new account
//! - POST /api/v1/accounts/transfer - Transfer money between accounts
//! - DELETE /api/v1/accounts/{id} - Delete an account

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        account::{Account, AccountResponse, CreateAccountRequest},
        transfer::{TransferReceipt, TransferRequest},
    },
    services::transfer_service,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// List all accounts.
///
/// # Endpoint
///
/// `GET /api/v1/accounts`
///
/// # Response
///
/// - **Success (200 OK)**: Returns array of accounts (may be empty),
///   newest first
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "owner": "Alice",
///     "balance": "2000",
///     "created_at": "2026-08-25T10:00:00Z",
///     "updated_at": "2026-08-25T10:00:00Z"
///   }
/// ]
/// ```
pub async fn list_accounts(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, owner, balance, created_at, updated_at
        FROM accounts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    // Convert each Account to AccountResponse
    let responses: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a specific account by ID.
///
/// # Endpoint
///
/// `GET /api/v1/accounts/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details, including the current
///   balance
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, owner, balance, created_at, updated_at
        FROM accounts
        WHERE id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(&pool)
    .await?
    // Return 404 if not found
    .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account.into()))
}

/// Create a new account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "owner": "Alice",
///   "balance": "2000"  // optional, defaults to 0
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account with its
///   generated ID
/// - **Error (500)**: Database error
pub async fn create_account(
    State(pool): State<DbPool>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (owner, balance)
        VALUES ($1, $2)
        RETURNING id, owner, balance, created_at, updated_at
        "#,
    )
    .bind(request.owner)
    .bind(request.balance)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Transfer money between accounts.
///
/// # Endpoint
///
/// `POST /api/v1/accounts/transfer`
///
/// # Request Body
///
/// ```json
/// {
///   "bank_id": "770e8400-...",
///   "account_id_origin": "550e8400-...",
///   "account_id_destination": "660e8400-...",
///   "amount": "500"
/// }
/// ```
///
/// # Atomicity
///
/// Both accounts and the bank counter are updated in a single database
/// transaction. Either all three changes apply or none do.
///
/// # Response
///
/// - **Success (200 OK)**: Returns a receipt echoing the instruction
/// - **Error (404)**: Bank or account not found
/// - **Error (422)**: Insufficient funds in the origin account
/// - **Error (400)**: Non-positive amount
pub async fn transfer(
    State(pool): State<DbPool>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferReceipt>, AppError> {
    transfer_service::execute_transfer(
        &pool,
        request.bank_id,
        request.account_id_origin,
        request.account_id_destination,
        request.amount,
    )
    .await?;

    Ok(Json(TransferReceipt::completed(request)))
}

/// Delete an account.
///
/// # Endpoint
///
/// `DELETE /api/v1/accounts/{id}`
///
/// # Response
///
/// - **Success (204 No Content)**: Account deleted
/// - **Error (404)**: Account not found
pub async fn delete_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(account_id)
        .execute(&pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::AccountNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
