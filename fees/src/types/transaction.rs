use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::calculator::REPORTING_CURRENCY;

/// Inbound transaction payload, parsed but not yet validated.
///
/// Defaults are applied while parsing so validation always sees a fully
/// populated candidate:
///   amount             = required, `None` when missing or null
///   currency           = "EUR" when the field is missing, `None` when null
///   transactionType    = "" when missing or null
///   isTokenTransaction = false when missing or null
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    #[serde(default, deserialize_with = "exact_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default = "default_currency")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_token_transaction: bool,
}

impl Default for TransactionRequest {
    fn default() -> Self {
        Self {
            amount: None,
            currency: default_currency(),
            transaction_type: String::new(),
            is_token_transaction: false,
        }
    }
}

impl TransactionRequest {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency.into()),
            ..Default::default()
        }
    }
}

fn default_currency() -> Option<String> {
    Some(REPORTING_CURRENCY.to_string())
}

/// Parse a JSON number or decimal string from its source text, so amounts
/// never pass through `f64`.
fn exact_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = raw.get().trim();
    let text = if text.starts_with('"') {
        serde_json::from_str::<String>(text).map_err(D::Error::custom)?
    } else {
        text.to_string()
    };
    Decimal::from_str_exact(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid decimal amount {text}: {e}")))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A validated transaction. Obtain one through [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub amount: Decimal,
    pub currency: String,
    pub transaction_type: String,
    pub is_token_transaction: bool,
}

impl Transaction {
    /// Build a transaction from values the caller already knows to be valid.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            transaction_type: String::new(),
            is_token_transaction: false,
        }
    }

    pub fn with_token(mut self, is_token_transaction: bool) -> Self {
        self.is_token_transaction = is_token_transaction;
        self
    }
}
