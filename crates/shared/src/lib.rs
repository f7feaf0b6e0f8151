//! Shared value types for Walletfx.
//!
//! This crate provides common types used across all other crates:
//! - Money with decimal precision and an ISO 4217 currency code
//! - The USD constant used by reimbursement policy checks

pub mod types;

pub use types::money::{Money, USD};
