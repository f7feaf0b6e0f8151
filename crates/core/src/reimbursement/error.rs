//! Reimbursement error types.

use thiserror::Error;
use uuid::Uuid;

use crate::currency::ConversionError;

/// Reimbursement pricing and adjustment errors.
#[derive(Debug, Error)]
pub enum ReimbursementError {
    /// Request has no category/benefit-currency association.
    #[error("reimbursement request {0} has no benefit currency association")]
    MissingCategory(Uuid),

    /// Custom rates only apply to USD-denominated benefit plans.
    #[error("custom rates are not supported for benefit currency {0}")]
    CustomRateNonUsdBenefit(String),

    /// Custom rate supplied for a transaction already in USD.
    #[error("transaction is already in USD, a custom rate does not apply")]
    CustomRateUsdTransaction,

    /// Direct payment wallets only accept USD transactions.
    #[error("direct payment wallets do not support non-USD transactions, got {0}")]
    DirectPaymentNonUsd(String),

    /// Adjustment attempted on a request missing prior amounts.
    #[error("cannot adjust reimbursement request {request_id}: missing {field}")]
    AdjustmentMissingField {
        /// The request being adjusted.
        request_id: Uuid,
        /// The field that was unset.
        field: &'static str,
    },

    /// Underlying currency conversion failure.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
