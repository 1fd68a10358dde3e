//! Fee calculator: a flat percentage of the transaction amount.
//!
//! Uses `rust_decimal::Decimal` so the fee is exact: an amount of `123.45`
//! yields `12.345`, never a binary-float approximation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{FeeError, Result};
use crate::types::{FeeResult, Transaction};

/// Percentage of the amount charged as a fee.
pub const FEE_RATE_PERCENT: u32 = 10;

/// Currency attached to every [`FeeResult`], whatever the transaction's own currency.
pub const REPORTING_CURRENCY: &str = "EUR";

/// Maps a validated transaction to its fee. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeCalculator;

impl FeeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute `amount * 10 / 100` for the given transaction.
    ///
    /// The transaction's `currency` and `is_token_transaction` are not read;
    /// the result is always reported in [`REPORTING_CURRENCY`].
    ///
    /// # Errors
    ///
    /// Returns `FeeError::InvalidArgument` if `transaction` is `None`, and
    /// `FeeError::Arithmetic` if the computation overflows.
    pub fn calculate(&self, transaction: Option<&Transaction>) -> Result<FeeResult> {
        let transaction = transaction.ok_or_else(|| {
            FeeError::InvalidArgument("transaction must not be null".to_string())
        })?;

        let fee = transaction
            .amount
            .checked_mul(Decimal::from(FEE_RATE_PERCENT))
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| {
                FeeError::Arithmetic(format!(
                    "fee overflow: {} * {FEE_RATE_PERCENT} / 100",
                    transaction.amount
                ))
            })?;

        debug!(
            amount = %transaction.amount,
            currency = %transaction.currency,
            token = transaction.is_token_transaction,
            fee = %fee,
            "fee calculated"
        );

        Ok(FeeResult::new(fee, REPORTING_CURRENCY))
    }
}
