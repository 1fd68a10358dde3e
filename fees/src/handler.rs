//! Request handler: parse, validate, compute, respond.
//!
//! Transport-agnostic: takes the raw request body and produces a
//! [`FeeResponse`] carrying an HTTP-style status code and a JSON body.
//! The HTTP layer only has to copy those onto the wire.

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::calculator::FeeCalculator;
use crate::error::FeeError;
use crate::types::{FeeResult, TransactionRequest};
use crate::validation::{self, FieldViolation};

/// Terminal outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeResponse {
    /// 200: fee computed.
    Accepted(FeeResult),
    /// 400: one entry per violated constraint.
    BadInput(Vec<FieldViolation>),
    /// 500: details are logged, never returned.
    InternalError,
}

impl FeeResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            FeeResponse::Accepted(_) => 200,
            FeeResponse::BadInput(_) => 400,
            FeeResponse::InternalError => 500,
        }
    }

    /// JSON body to send back to the caller.
    pub fn body(&self) -> Value {
        match self {
            FeeResponse::Accepted(result) => json!({
                "fee": result.fee,
                "currency": result.currency,
            }),
            FeeResponse::BadInput(violations) => json!({
                "error": "bad request",
                "violations": violations,
            }),
            FeeResponse::InternalError => json!({ "error": "internal server error" }),
        }
    }
}

impl From<FeeError> for FeeResponse {
    fn from(err: FeeError) -> Self {
        match err {
            FeeError::InvalidArgument(message) => {
                FeeResponse::BadInput(vec![FieldViolation::new("transaction", message)])
            }
            FeeError::Validation(violations) => FeeResponse::BadInput(violations),
            FeeError::Json(e) => FeeResponse::BadInput(vec![FieldViolation::new(
                "transaction",
                format!("malformed payload: {e}"),
            )]),
            other => {
                error!(error = %other, "fee calculation failed");
                FeeResponse::InternalError
            }
        }
    }
}

/// Validates inbound payloads and dispatches them to the [`FeeCalculator`].
///
/// Stateless; clone it freely and share it across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct RequestHandler {
    calculator: FeeCalculator,
}

impl RequestHandler {
    pub fn new(calculator: FeeCalculator) -> Self {
        Self { calculator }
    }

    /// Handle a raw request body. `None` means no body was supplied.
    pub fn handle(&self, raw: Option<&[u8]>) -> FeeResponse {
        let response = match self.process(raw) {
            Ok(result) => FeeResponse::Accepted(result),
            Err(e) => FeeResponse::from(e),
        };

        match &response {
            FeeResponse::Accepted(result) => {
                debug!(fee = %result.fee, currency = %result.currency, "request accepted");
            }
            FeeResponse::BadInput(violations) => {
                debug!(violations = ?violations, "request rejected");
            }
            FeeResponse::InternalError => {}
        }

        response
    }

    pub fn handle_json(&self, payload: &str) -> FeeResponse {
        self.handle(Some(payload.as_bytes()))
    }

    fn process(&self, raw: Option<&[u8]>) -> Result<FeeResult, FeeError> {
        let Some(request) = parse(raw)? else {
            return Err(FeeError::InvalidArgument(
                "transaction must not be null".to_string(),
            ));
        };
        let transaction = validation::validate(&request).map_err(FeeError::Validation)?;
        self.calculator.calculate(Some(&transaction))
    }
}

/// Parse the body; `Ok(None)` for an absent, blank or `null` payload.
/// Only a JSON object is accepted as a transaction.
fn parse(raw: Option<&[u8]>) -> Result<Option<TransactionRequest>, FeeError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        None => Ok(None),
        Some(b'{') => Ok(Some(serde_json::from_slice::<TransactionRequest>(raw)?)),
        // Anything else must still be well-formed JSON; only `null` is accepted.
        Some(_) => match serde_json::from_slice::<Option<Value>>(raw)? {
            None => Ok(None),
            Some(_) => Err(FeeError::Validation(vec![FieldViolation::new(
                "transaction",
                "payload must be a JSON object",
            )])),
        },
    }
}
