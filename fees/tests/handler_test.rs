//! End-to-end tests for the request handler.
//!
//! Each test feeds a raw JSON payload through `RequestHandler::handle_json`
//! and checks the status code and body the HTTP layer would send back.

use fees::{FeeResponse, RequestHandler};
use serde_json::{json, Value};

fn handle(payload: &str) -> (u16, Value) {
    let resp = RequestHandler::default().handle_json(payload);
    (resp.status_code(), resp.body())
}

fn violation_fields(body: &Value) -> Vec<String> {
    body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Accepted
// ---------------------------------------------------------------------------

#[test]
fn test_eur_amount_accepted() {
    let (status, body) = handle(r#"{"amount": 100, "currency": "EUR"}"#);
    assert_eq!(status, 200);
    assert_eq!(body, json!({"fee": "10", "currency": "EUR"}));
}

#[test]
fn test_fractional_amount_exact_fee() {
    let (status, body) = handle(r#"{"amount": 123.45, "currency": "EUR"}"#);
    assert_eq!(status, 200);
    assert_eq!(body["fee"], "12.345");
}

#[test]
fn test_foreign_currency_reported_in_eur() {
    let (status, body) = handle(r#"{"amount": 100, "currency": "GBP"}"#);
    assert_eq!(status, 200);
    assert_eq!(body, json!({"fee": "10", "currency": "EUR"}));
}

#[test]
fn test_missing_currency_defaults_to_eur() {
    let (status, body) = handle(r#"{"amount": 50}"#);
    assert_eq!(status, 200);
    assert_eq!(body, json!({"fee": "5", "currency": "EUR"}));
}

#[test]
fn test_token_flag_is_inert() {
    let (_, plain) = handle(r#"{"amount": 77.77, "currency": "USD"}"#);
    let (_, token) =
        handle(r#"{"amount": 77.77, "currency": "USD", "isTokenTransaction": true}"#);
    assert_eq!(plain, token);
    assert_eq!(token["fee"], "7.777");
}

#[test]
fn test_amount_as_string_accepted() {
    let (status, body) = handle(r#"{"amount": "999999999.99", "currency": "CHF"}"#);
    assert_eq!(status, 200);
    assert_eq!(body["fee"], "99999999.999");
}

#[test]
fn test_fee_exact_beyond_f64_precision() {
    let (status, body) = handle(r#"{"amount": 1.00000000000000001, "currency": "EUR"}"#);
    assert_eq!(status, 200);
    assert_eq!(body["fee"], "0.100000000000000001");
}

#[test]
fn test_full_payload_accepted() {
    let (status, _) = handle(
        r#"{"amount": 0.01, "currency": "JPY", "transactionType": "P2P_transfer-1", "isTokenTransaction": false}"#,
    );
    assert_eq!(status, 200);
}

// ---------------------------------------------------------------------------
// Rejected: bad input
// ---------------------------------------------------------------------------

#[test]
fn test_null_payload_rejected() {
    let (status, body) = handle("null");
    assert_eq!(status, 400);
    assert_eq!(body["error"], "bad request");

    let resp = RequestHandler::default().handle(None);
    assert!(matches!(resp, FeeResponse::BadInput(_)));
}

#[test]
fn test_negative_amount_rejected() {
    let (status, body) = handle(r#"{"amount": -100, "currency": "EUR"}"#);
    assert_eq!(status, 400);
    assert_eq!(violation_fields(&body), vec!["amount"]);
}

#[test]
fn test_amount_out_of_range_rejected() {
    for amount in ["0", "0.001", "1000000000", "-0.01"] {
        let payload = format!(r#"{{"amount": {amount}, "currency": "EUR"}}"#);
        let (status, _) = handle(&payload);
        assert_eq!(status, 400, "amount {amount}");
    }
}

#[test]
fn test_amount_just_outside_range_rejected() {
    for amount in ["999999999.9900000001", "0.00999999999999999999"] {
        let payload = format!(r#"{{"amount": {amount}, "currency": "EUR"}}"#);
        let (status, body) = handle(&payload);
        assert_eq!(status, 400, "amount {amount}");
        assert_eq!(violation_fields(&body), vec!["amount"]);
    }
}

#[test]
fn test_array_payload_rejected() {
    let (status, body) = handle(r#"[100, "EUR"]"#);
    assert_eq!(status, 400);
    assert_eq!(violation_fields(&body), vec!["transaction"]);
    assert_eq!(body["violations"][0]["message"], "payload must be a JSON object");
}

#[test]
fn test_missing_amount_rejected() {
    let (status, body) = handle(r#"{"currency": "EUR"}"#);
    assert_eq!(status, 400);
    assert_eq!(violation_fields(&body), vec!["amount"]);
}

#[test]
fn test_bad_currency_rejected() {
    for currency in [r#"null"#, r#""""#, r#""eur""#, r#""EURO""#, r#""ÄBC""#] {
        let payload = format!(r#"{{"amount": 10, "currency": {currency}}}"#);
        let (status, body) = handle(&payload);
        assert_eq!(status, 400, "currency {currency}");
        assert_eq!(violation_fields(&body), vec!["currency"]);
    }
}

#[test]
fn test_bad_transaction_type_rejected() {
    let long = "a".repeat(51);
    for transaction_type in [long.as_str(), "has space", "semi;colon"] {
        let payload = json!({"amount": 10, "currency": "EUR", "transactionType": transaction_type});
        let (status, body) = handle(&payload.to_string());
        assert_eq!(status, 400, "transactionType {transaction_type}");
        assert_eq!(violation_fields(&body), vec!["transactionType"]);
    }
}

#[test]
fn test_every_violation_listed() {
    let (status, body) = handle(r##"{"amount": 0, "currency": "x", "transactionType": "#"}"##);
    assert_eq!(status, 400);
    assert_eq!(
        violation_fields(&body),
        vec!["amount", "currency", "transactionType"]
    );
}

#[test]
fn test_malformed_json_rejected() {
    let (status, body) = handle(r#"{"amount": 10, "currency": "EUR""#);
    assert_eq!(status, 400);
    assert!(body["violations"][0]["message"]
        .as_str()
        .unwrap()
        .starts_with("malformed payload"));
}
