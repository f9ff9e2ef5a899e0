//! Transfer request and receipt types.
//!
//! A transfer is a transient instruction, never persisted: the request
//! names a bank and two accounts, and the receipt echoes the instruction
//! back to the client on success.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to move money between two accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "bank_id": "770e8400-e29b-41d4-a716-446655440002",
///   "account_id_origin": "550e8400-e29b-41d4-a716-446655440000",
///   "account_id_destination": "660e8400-e29b-41d4-a716-446655440001",
///   "amount": "500"
/// }
/// ```
///
/// # Validation
///
/// - Origin account must have sufficient balance
/// - Amount must be positive
/// - Bank and both accounts must exist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Bank whose transfer counter is incremented
    pub bank_id: Uuid,

    /// Account to debit (will decrease)
    pub account_id_origin: Uuid,

    /// Account to credit (will increase)
    pub account_id_destination: Uuid,

    /// Amount to move
    pub amount: Decimal,
}

/// Response returned after a successful transfer.
///
/// # JSON Example
///
/// ```json
/// {
///   "datetime": "2026-08-25T16:00:00Z",
///   "code": 200,
///   "message": "transfer completed successfully",
///   "transaction": {
///     "bank_id": "770e8400-...",
///     "account_id_origin": "550e8400-...",
///     "account_id_destination": "660e8400-...",
///     "amount": "500"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransferReceipt {
    /// When the transfer was committed
    pub datetime: DateTime<Utc>,

    /// HTTP status code, echoed in the body
    pub code: u16,

    /// Human-readable confirmation
    pub message: String,

    /// The instruction that was executed
    pub transaction: TransferRequest,
}

impl TransferReceipt {
    /// Build a success receipt echoing the executed instruction.
    pub fn completed(transaction: TransferRequest) -> Self {
        Self {
            datetime: Utc::now(),
            code: 200,
            message: "transfer completed successfully".to_string(),
            transaction,
        }
    }
}
