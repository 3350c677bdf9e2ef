use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single JSON-RPC call against the node.
///
/// Every variant is reported as one "RPC failure" kind; the variants only
/// exist so the message says what actually went wrong.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC failure: RPC connection error: {0}")]
    Connection(String),

    #[error("RPC failure: RPC HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("RPC failure: {0}")]
    Protocol(String),

    #[error("RPC failure: RPC invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// Message without the "RPC failure" label, as surfaced to HTTP callers.
    pub fn detail(&self) -> String {
        match self {
            RpcError::Connection(e) => format!("RPC connection error: {}", e),
            RpcError::Http { status, body } => format!("RPC HTTP {}: {}", status, body),
            RpcError::Protocol(e) => e.clone(),
            RpcError::InvalidResponse(e) => format!("RPC invalid response: {}", e),
        }
    }
}

/// Errors returned by the statistics endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Node unreachable or answered with an error.
    #[error("{0}")]
    Upstream(String),

    /// Requested window reaches below the genesis block.
    #[error("Chain too short for requested window")]
    ChainTooShort,

    /// Malformed or out-of-range query parameter.
    #[error("{0}")]
    InvalidParameter(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::ChainTooShort => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<RpcError> for ApiError {
    fn from(e: RpcError) -> Self {
        ApiError::Upstream(e.detail())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, RpcError>;
