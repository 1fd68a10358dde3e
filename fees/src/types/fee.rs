use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fee computed for a single transaction.
///
/// `fee` is serialized as a decimal string so no precision is lost on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    pub fee: Decimal,
    pub currency: String,
}

impl FeeResult {
    pub fn new(fee: Decimal, currency: impl Into<String>) -> Self {
        Self {
            fee: fee.normalize(),
            currency: currency.into(),
        }
    }
}
