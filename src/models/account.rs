//! Account data model and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a bank account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients
//!
//! The debit/credit rules live here as methods on `Account`, so the money
//! movement logic can be tested without a database.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account holds a balance for one owner.
///
/// # Balance Storage
///
/// Balances are stored as `NUMERIC` in PostgreSQL and as `Decimal` in Rust.
/// Decimal arithmetic is exact, so amounts like 0.10 never accumulate
/// floating-point rounding error.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Name of the person who owns this account
    pub owner: String,

    /// Current balance
    ///
    /// Never negative at rest. The invariant is enforced at debit time:
    /// a debit that would go below zero is rejected and leaves the
    /// balance untouched.
    pub balance: Decimal,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last balance update
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Subtract `amount` from the balance.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InsufficientFunds` if the resulting balance would
    /// be negative. On failure the balance is unchanged.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AppError> {
        let new_balance = self.balance - amount;
        if new_balance < Decimal::ZERO {
            return Err(AppError::InsufficientFunds);
        }
        self.balance = new_balance;
        Ok(())
    }

    /// Add `amount` to the balance. Always succeeds for non-negative amounts.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "owner": "Alice",
///   "balance": "2000"
/// }
/// ```
///
/// # Validation
///
/// - `owner`: Required, any non-empty string
/// - `balance`: Optional, defaults to 0
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Name of the account owner
    pub owner: String,

    /// Opening balance (defaults to 0 if not provided)
    #[serde(default)]
    pub balance: Decimal,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "owner": "Alice",
///   "balance": "2000",
///   "created_at": "2026-08-25T10:00:00Z",
///   "updated_at": "2026-08-25T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: Uuid,

    /// Account owner name
    pub owner: String,

    /// Current balance
    pub balance: Decimal,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Convert database Account to API AccountResponse.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            owner: account.owner,
            balance: account.balance,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn account_with_balance(balance: Decimal) -> Account {
        Account {
            id: Uuid::new_v4(),
            owner: "Alice".to_string(),
            balance,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("1000", "100", "900")]
    #[case("1000", "1000", "0")]
    #[case("100.50", "0.50", "100.00")]
    fn debit_subtracts_exactly(#[case] balance: Decimal, #[case] amount: Decimal, #[case] expected: Decimal) {
        let mut account = account_with_balance(balance);

        account.debit(amount).unwrap();

        assert_eq!(account.balance, expected);
    }

    #[rstest]
    fn debit_beyond_balance_fails_and_leaves_balance_unchanged() {
        let mut account = account_with_balance(Decimal::from(1000));

        let result = account.debit(Decimal::from(1001));

        assert!(matches!(result, Err(AppError::InsufficientFunds)));
        assert_eq!(account.balance, Decimal::from(1000));
    }

    #[rstest]
    #[case("1000", "100", "1100")]
    #[case("0", "0.01", "0.01")]
    #[case("999.99", "0.01", "1000.00")]
    fn credit_adds_exactly(#[case] balance: Decimal, #[case] amount: Decimal, #[case] expected: Decimal) {
        let mut account = account_with_balance(balance);

        account.credit(amount);

        assert_eq!(account.balance, expected);
    }
}
