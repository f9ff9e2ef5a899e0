//! Bank data model and API response type.
//!
//! A bank is a small aggregate: it only tracks how many transfers the
//! service has processed on its behalf.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents a bank record from the database.
///
/// Maps to the `banks` table. The only mutable field is `total_transfers`,
/// incremented once per successful transfer.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Bank {
    /// Unique identifier for this bank
    pub id: Uuid,

    /// Human-readable bank name
    pub name: String,

    /// Running count of transfers processed through this bank
    ///
    /// Never negative; starts at 0 and only ever increments.
    pub total_transfers: i64,

    /// Timestamp when bank was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last counter update
    pub updated_at: DateTime<Utc>,
}

impl Bank {
    /// Record one processed transfer by incrementing the counter.
    pub fn record_transfer(&mut self) {
        self.total_transfers += 1;
    }
}

/// Response body for bank endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "name": "First National",
///   "total_transfers": 3,
///   "created_at": "2026-08-25T10:00:00Z",
///   "updated_at": "2026-08-25T10:05:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct BankResponse {
    pub id: Uuid,
    pub name: String,
    pub total_transfers: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bank> for BankResponse {
    fn from(bank: Bank) -> Self {
        Self {
            id: bank.id,
            name: bank.name,
            total_transfers: bank.total_transfers,
            created_at: bank.created_at,
            updated_at: bank.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn record_transfer_increments_by_one() {
        let mut bank = Bank {
            id: Uuid::new_v4(),
            name: "First National".to_string(),
            total_transfers: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        bank.record_transfer();
        bank.record_transfer();

        assert_eq!(bank.total_transfers, 2);
    }
}
