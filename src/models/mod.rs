//! Data models representing database entities and API payloads.
//!
//! This module contains all data structures that map to database tables,
//! plus the transient transfer instruction and receipt types.

/// Bank account model with debit/credit rules
pub mod account;
/// Bank model with the transfer counter
pub mod bank;
/// Transfer instruction and receipt
pub mod transfer;
