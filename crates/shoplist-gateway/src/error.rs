//! Error types for the Gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shoplist_core::ServiceError;
use thiserror::Error;

use crate::rpc::{ErrorCode, RpcError, RpcResponse};

/// Gateway error type
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Remote error ({code}): {message}")]
    Remote { code: ErrorCode, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Serialization(e.to_string())
    }
}

impl From<ServiceError> for GatewayError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidName | ServiceError::InvalidValue(_) => {
                GatewayError::InvalidParams(e.to_string())
            }
            ServiceError::Store(_) => GatewayError::Persistence(e.to_string()),
        }
    }
}

impl GatewayError {
    /// Wire representation of this error
    pub fn to_rpc_error(&self) -> RpcError {
        let code = match self {
            GatewayError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            GatewayError::InvalidParams(_) => ErrorCode::InvalidParams,
            GatewayError::Persistence(_) => ErrorCode::Persistence,
            GatewayError::Remote { code, .. } => *code,
            _ => ErrorCode::Internal,
        };
        let message = match self {
            GatewayError::InvalidRequest(m)
            | GatewayError::InvalidParams(m)
            | GatewayError::Persistence(m)
            | GatewayError::Remote { message: m, .. } => m.clone(),
            other => other.to_string(),
        };
        RpcError { code, message }
    }

    fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::InvalidParams(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(RpcResponse::Error(self.to_rpc_error()))).into_response()
    }
}

/// Result type for Gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
