//! Transfer service - Core business logic for moving money between accounts.
//!
//! A transfer is one atomic unit: debit the origin account, credit the
//! destination account, and increment the bank's transfer counter. Either
//! all three changes are persisted or none are.
//!
//! The money movement itself is pure (`apply_transfer`) and tested without
//! a database; `execute_transfer` wraps it in a PostgreSQL transaction
//! with row locks so concurrent transfers touching the same accounts cannot
//! interleave.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{account::Account, bank::Bank},
};

/// Apply a transfer to in-memory entities.
///
/// # Process
///
/// 1. Reject non-positive amounts
/// 2. Debit the origin (fails on insufficient funds, before anything mutates)
/// 3. Credit the destination
/// 4. Increment the bank's transfer counter
///
/// On any error all three entities are left exactly as they were.
///
/// # Errors
///
/// - `InvalidRequest`: Amount is zero or negative
/// - `InsufficientFunds`: Origin balance cannot cover the amount
fn apply_transfer(
    origin: &mut Account,
    destination: &mut Account,
    bank: &mut Bank,
    amount: Decimal,
) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }

    // Debit first: it is the only fallible step, so a failure here leaves
    // destination and bank untouched.
    origin.debit(amount)?;
    destination.credit(amount);
    bank.record_transfer();

    Ok(())
}

/// Lock an account row with `FOR UPDATE` and fetch it.
///
/// A `NotFound` result aborts the caller's transaction; the lock is
/// released when the transaction is dropped or rolled back.
async fn lock_account(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    account_id: Uuid,
) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>(
        "SELECT id, owner, balance, created_at, updated_at FROM accounts WHERE id = $1 FOR UPDATE",
    )
    .bind(account_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or(AppError::AccountNotFound)
}

/// Execute a transfer between two accounts, tracked by a bank.
///
/// # Process
///
/// 1. Start a database transaction
/// 2. Lock and fetch both account rows, then the bank row
/// 3. Apply the transfer in memory (validation happens here)
/// 4. Write back all three rows
/// 5. Commit (or roll back on any error)
///
/// `FOR UPDATE` row locks serialize transfers on the same accounts: a
/// concurrent transfer touching either account blocks until this one
/// commits or rolls back, so no update is lost. The two account rows are
/// always locked in ascending id order, so two opposite-direction
/// transfers queue on the first lock instead of deadlocking.
///
/// Origin and destination may name the same account. The relative balance
/// updates below make that case net to zero, the same outcome as applying
/// debit then credit to one entity.
///
/// # Errors
///
/// - `AccountNotFound`: Origin or destination account doesn't exist
/// - `BankNotFound`: Bank doesn't exist
/// - `InvalidRequest`: Amount is zero or negative
/// - `InsufficientFunds`: Origin balance cannot cover the amount
/// - `Database`: Database error occurred
pub async fn execute_transfer(
    pool: &DbPool,
    bank_id: Uuid,
    origin_id: Uuid,
    destination_id: Uuid,
    amount: Decimal,
) -> Result<(), AppError> {
    // Start database transaction. Any early return drops it, which rolls
    // back; stored state is only touched by a successful commit.
    let mut tx = pool.begin().await?;

    // Fixed lock order across all transfers: ascending account id.
    let (first_id, second_id) = if origin_id <= destination_id {
        (origin_id, destination_id)
    } else {
        (destination_id, origin_id)
    };

    let first = lock_account(&mut tx, first_id).await?;
    let second = lock_account(&mut tx, second_id).await?;

    let (mut origin, mut destination) = if first_id == origin_id {
        (first, second)
    } else {
        (second, first)
    };

    // Lock and fetch the bank
    let mut bank = sqlx::query_as::<_, Bank>(
        "SELECT id, name, total_transfers, created_at, updated_at FROM banks WHERE id = $1 FOR UPDATE",
    )
    .bind(bank_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::BankNotFound)?;

    // Apply the transfer in memory; nothing has been written yet, so a
    // validation failure aborts with stored state untouched.
    if let Err(err) = apply_transfer(&mut origin, &mut destination, &mut bank, amount) {
        tx.rollback().await?;
        return Err(err);
    }

    // Write back all three rows. Relative updates keep a same-account
    // transfer netting to zero even though two entity copies were fetched.
    sqlx::query("UPDATE accounts SET balance = balance - $1, updated_at = NOW() WHERE id = $2")
        .bind(amount)
        .bind(origin_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("UPDATE accounts SET balance = balance + $1, updated_at = NOW() WHERE id = $2")
        .bind(amount)
        .bind(destination_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "UPDATE banks SET total_transfers = total_transfers + 1, updated_at = NOW() WHERE id = $1",
    )
    .bind(bank_id)
    .execute(&mut *tx)
    .await?;

    // Commit all changes atomically
    tx.commit().await?;

    tracing::info!(
        %bank_id,
        %origin_id,
        %destination_id,
        %amount,
        "transfer completed"
    );

    Ok(())
}


/// Store-level tests against a real PostgreSQL database.
///
/// `#[sqlx::test]` provisions a fresh database per test and applies the
/// migrations in `./migrations`, so each test starts from the seeded demo
/// state: Alice with 2000, Bob with 1000, one bank with counter 0.
#[cfg(test)]
mod db_tests {
    use super::*;
    use sqlx::PgPool;

    const ALICE: &str = "550e8400-e29b-41d4-a716-446655440000";
    const BOB: &str = "660e8400-e29b-41d4-a716-446655440001";
    const BANK: &str = "770e8400-e29b-41d4-a716-446655440002";

    fn seeded(id: &str) -> Uuid {
        Uuid::parse_str(id).unwrap()
    }

    async fn balance_of(pool: &PgPool, account_id: Uuid) -> Decimal {
        sqlx::query_scalar("SELECT balance FROM accounts WHERE id = $1")
            .bind(account_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn transfer_count(pool: &PgPool, bank_id: Uuid) -> i64 {
        sqlx::query_scalar("SELECT total_transfers FROM banks WHERE id = $1")
            .bind(bank_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn transfer_persists_debit_credit_and_counter(pool: PgPool) {
        execute_transfer(
            &pool,
            seeded(BANK),
            seeded(ALICE),
            seeded(BOB),
            Decimal::from(500),
        )
        .await
        .unwrap();

        assert_eq!(balance_of(&pool, seeded(ALICE)).await, Decimal::from(1500));
        assert_eq!(balance_of(&pool, seeded(BOB)).await, Decimal::from(1500));
        assert_eq!(transfer_count(&pool, seeded(BANK)).await, 1);
    }

    #[sqlx::test]
    async fn unknown_origin_aborts_and_leaves_the_store_unchanged(pool: PgPool) {
        let result = execute_transfer(
            &pool,
            seeded(BANK),
            Uuid::new_v4(),
            seeded(BOB),
            Decimal::from(500),
        )
        .await;

        assert!(matches!(result, Err(AppError::AccountNotFound)));
        assert_eq!(balance_of(&pool, seeded(BOB)).await, Decimal::from(1000));
        assert_eq!(transfer_count(&pool, seeded(BANK)).await, 0);
    }

    #[sqlx::test]
    async fn unknown_destination_aborts_and_leaves_the_store_unchanged(pool: PgPool) {
        let result = execute_transfer(
            &pool,
            seeded(BANK),
            seeded(ALICE),
            Uuid::new_v4(),
            Decimal::from(500),
        )
        .await;

        assert!(matches!(result, Err(AppError::AccountNotFound)));
        assert_eq!(balance_of(&pool, seeded(ALICE)).await, Decimal::from(2000));
        assert_eq!(transfer_count(&pool, seeded(BANK)).await, 0);
    }

    #[sqlx::test]
    async fn unknown_bank_aborts_and_leaves_the_store_unchanged(pool: PgPool) {
        let result = execute_transfer(
            &pool,
            Uuid::new_v4(),
            seeded(ALICE),
            seeded(BOB),
            Decimal::from(500),
        )
        .await;

        assert!(matches!(result, Err(AppError::BankNotFound)));
        assert_eq!(balance_of(&pool, seeded(ALICE)).await, Decimal::from(2000));
        assert_eq!(balance_of(&pool, seeded(BOB)).await, Decimal::from(1000));
        assert_eq!(transfer_count(&pool, seeded(BANK)).await, 0);
    }

    #[sqlx::test]
    async fn insufficient_funds_rolls_back_every_row(pool: PgPool) {
        let result = execute_transfer(
            &pool,
            seeded(BANK),
            seeded(ALICE),
            seeded(BOB),
            Decimal::from(5000),
        )
        .await;

        assert!(matches!(result, Err(AppError::InsufficientFunds)));
        assert_eq!(balance_of(&pool, seeded(ALICE)).await, Decimal::from(2000));
        assert_eq!(balance_of(&pool, seeded(BOB)).await, Decimal::from(1000));
        assert_eq!(transfer_count(&pool, seeded(BANK)).await, 0);
    }

    #[sqlx::test]
    async fn transfers_in_both_directions_do_not_deadlock(pool: PgPool) {
        // Opposite-direction transfers lock the same two rows; the fixed
        // lock order makes them queue, so both must complete.
        let forward = execute_transfer(
            &pool,
            seeded(BANK),
            seeded(ALICE),
            seeded(BOB),
            Decimal::from(500),
        );
        let backward = execute_transfer(
            &pool,
            seeded(BANK),
            seeded(BOB),
            seeded(ALICE),
            Decimal::from(200),
        );

        let (forward, backward) = tokio::join!(forward, backward);
        forward.unwrap();
        backward.unwrap();

        assert_eq!(balance_of(&pool, seeded(ALICE)).await, Decimal::from(1700));
        assert_eq!(balance_of(&pool, seeded(BOB)).await, Decimal::from(1300));
        assert_eq!(transfer_count(&pool, seeded(BANK)).await, 2);
    }
}
