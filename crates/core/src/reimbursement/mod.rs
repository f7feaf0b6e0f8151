//! Reimbursement request pricing and adjustment.
//!
//! This module layers wallet policy on top of the currency engine:
//! - Request and wallet-category domain types
//! - Pricing a request into USD and the wallet's benefit currency
//! - Re-deriving amounts after a post-hoc USD adjustment
//! - Error types for policy violations

pub mod error;
pub mod service;
pub mod types;

pub use error::ReimbursementError;
pub use service::ReimbursementService;
pub use types::{ReimbursementRequest, WalletCategory};
