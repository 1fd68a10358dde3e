//! Field validation for inbound transactions.
//!
//! Every constraint is checked and every violation is reported, so a caller
//! sees all problems with a payload in one response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Transaction, TransactionRequest};

/// Smallest accepted amount (inclusive).
pub const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted amount (inclusive): 999999999.99.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

/// Maximum length of `transactionType`, in characters.
pub const MAX_TRANSACTION_TYPE_LEN: usize = 50;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a parsed request into a [`Transaction`].
///
/// # Errors
///
/// Returns every violated constraint when the request is invalid.
pub fn validate(req: &TransactionRequest) -> Result<Transaction, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let amount = check_amount(req.amount, &mut violations);
    let currency = check_currency(req.currency.as_deref(), &mut violations);
    check_transaction_type(&req.transaction_type, &mut violations);

    match (amount, currency) {
        (Some(amount), Some(currency)) if violations.is_empty() => Ok(Transaction {
            amount,
            currency: currency.to_string(),
            transaction_type: req.transaction_type.clone(),
            is_token_transaction: req.is_token_transaction,
        }),
        _ => Err(violations),
    }
}

fn check_amount(amount: Option<Decimal>, violations: &mut Vec<FieldViolation>) -> Option<Decimal> {
    let Some(amount) = amount else {
        violations.push(FieldViolation::new("amount", "amount is required"));
        return None;
    };
    if amount < MIN_AMOUNT {
        violations.push(FieldViolation::new(
            "amount",
            format!("amount must be at least {MIN_AMOUNT}"),
        ));
        return None;
    }
    if amount > MAX_AMOUNT {
        violations.push(FieldViolation::new(
            "amount",
            format!("amount must not exceed {MAX_AMOUNT}"),
        ));
        return None;
    }
    Some(amount)
}

fn check_currency<'a>(
    currency: Option<&'a str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match currency {
        None => {
            violations.push(FieldViolation::new("currency", "currency is required"));
            None
        }
        Some(c) if is_currency_code(c) => Some(c),
        Some(_) => {
            violations.push(FieldViolation::new(
                "currency",
                "currency must be a 3-letter uppercase code",
            ));
            None
        }
    }
}

/// `^[A-Z]{3}$`
fn is_currency_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn check_transaction_type(transaction_type: &str, violations: &mut Vec<FieldViolation>) {
    if transaction_type.chars().count() > MAX_TRANSACTION_TYPE_LEN {
        violations.push(FieldViolation::new(
            "transactionType",
            format!("transactionType must be at most {MAX_TRANSACTION_TYPE_LEN} characters"),
        ));
    }
    if !transaction_type
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        violations.push(FieldViolation::new(
            "transactionType",
            "transactionType may only contain letters, digits, '_' and '-'",
        ));
    }
}
