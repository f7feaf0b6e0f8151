//! Core business logic for Walletfx.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Minor-unit conversion math, currency metadata, and FX rates
//! - `reimbursement` - Reimbursement request pricing and adjustment

pub mod currency;
pub mod reimbursement;
