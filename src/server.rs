//! Axum router and server loop.
//!
//! ```text
//! /
//! ├── POST /api/v1/fees   - compute the fee for one transaction
//! └── GET  /health        - liveness probe
//! ```

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fees::{FeeCalculator, FeeResponse, RequestHandler};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Wraps the handler outcome so axum can render it.
struct FeeReply(FeeResponse);

impl IntoResponse for FeeReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body())).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Build the router serving the fee endpoint and the health check.
pub fn build_router(handler: RequestHandler) -> Router {
    Router::new()
        .route("/api/v1/fees", post(calculate_fee))
        .route("/health", get(health))
        .with_state(handler)
}

/// The body is taken as raw bytes so that empty, `null` and malformed payloads
/// reach the handler and come back as 400s instead of extractor rejections.
async fn calculate_fee(State(handler): State<RequestHandler>, body: Bytes) -> FeeReply {
    let raw = (!body.is_empty()).then_some(&body[..]);
    let response = handler.handle(raw);

    match &response {
        FeeResponse::Accepted(result) => {
            info!(status = 200, fee = %result.fee, currency = %result.currency, "fee computed");
        }
        FeeResponse::BadInput(violations) => {
            warn!(status = 400, violations = violations.len(), "fee request rejected");
        }
        FeeResponse::InternalError => {
            error!(status = 500, "fee request failed");
        }
    }

    FeeReply(response)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Bind the configured address and serve until `cancel` fires.
pub async fn serve(config: &ServiceConfig, cancel: CancellationToken) -> Result<(), ServiceError> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    serve_listener(listener, build_router(RequestHandler::new(FeeCalculator::new())), cancel).await
}

/// Serve `router` on an already bound listener until `cancel` fires.
pub async fn serve_listener(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> Result<(), ServiceError> {
    let addr = listener.local_addr()?;
    info!(addr = %addr, "fee service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    info!("fee service stopped gracefully");
    Ok(())
}
