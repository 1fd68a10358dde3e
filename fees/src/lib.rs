pub mod calculator;
pub mod error;
pub mod handler;
pub mod types;
pub mod validation;

// ---- Top-level re-exports for ergonomic usage ----

pub use calculator::{FeeCalculator, FEE_RATE_PERCENT, REPORTING_CURRENCY};
pub use error::{FeeError, Result};
pub use handler::{FeeResponse, RequestHandler};
pub use types::{FeeResult, Transaction, TransactionRequest};
pub use validation::{validate, FieldViolation, MAX_AMOUNT, MAX_TRANSACTION_TYPE_LEN, MIN_AMOUNT};
