//! Wire types for the `/rpc` endpoint and request dispatch

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shoplist_core::ShoppingListService;

use crate::{GatewayError, Result};

/// A remote procedure call
///
/// Encoded as `{"method": "mark_item", "params": {"name": "milk", "value": 3.5}}`.
/// `list_items` takes no params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum RpcRequest {
    /// Add a pending item; returns whether it was created
    AddItem { name: String },
    /// Every item in insertion order
    ListItems,
    /// Mark the pending item `name` bought for `value`
    MarkItem { name: String, value: f64 },
    /// Mark every pending item bought for `value`
    MarkAll { value: f64 },
    /// Delete all items called `name`, history included
    RemoveItem { name: String },
    /// Sum of purchases in `year`/`month`
    MonthlyTotal { year: i32, month: u32 },
}

impl RpcRequest {
    /// Procedure name as it appears on the wire
    pub fn method(&self) -> &'static str {
        match self {
            RpcRequest::AddItem { .. } => "add_item",
            RpcRequest::ListItems => "list_items",
            RpcRequest::MarkItem { .. } => "mark_item",
            RpcRequest::MarkAll { .. } => "mark_all",
            RpcRequest::RemoveItem { .. } => "remove_item",
            RpcRequest::MonthlyTotal { .. } => "monthly_total",
        }
    }

    /// Reject parameters the service cannot meaningfully act on
    pub fn validate(&self) -> Result<()> {
        match self {
            RpcRequest::AddItem { name } if name.is_empty() => Err(
                GatewayError::InvalidParams("name must not be empty".to_string()),
            ),
            RpcRequest::MarkItem { value, .. } | RpcRequest::MarkAll { value }
                if !value.is_finite() =>
            {
                Err(GatewayError::InvalidParams(format!(
                    "value must be a finite number, got {}",
                    value
                )))
            }
            RpcRequest::MonthlyTotal { month, .. } if !(1..=12).contains(month) => Err(
                GatewayError::InvalidParams(format!("month must be 1-12, got {}", month)),
            ),
            _ => Ok(()),
        }
    }
}

/// Response body: `{"result": ...}` or `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcResponse {
    /// Value returned by the procedure
    Result(Value),
    /// The call failed
    Error(RpcError),
}

/// Error payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// Error category
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Body was not a recognised call
    InvalidRequest,
    /// Call was recognised but its arguments were rejected
    InvalidParams,
    /// The change could not be written to disk
    Persistence,
    /// Anything else
    Internal,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidRequest => write!(f, "invalid_request"),
            ErrorCode::InvalidParams => write!(f, "invalid_params"),
            ErrorCode::Persistence => write!(f, "persistence"),
            ErrorCode::Internal => write!(f, "internal"),
        }
    }
}

/// Run a call against the service. Blocks while the service persists.
pub fn dispatch(service: &ShoppingListService, request: RpcRequest) -> Result<Value> {
    request.validate()?;

    let result = match request {
        RpcRequest::AddItem { name } => json!(service.add(&name)?),
        RpcRequest::ListItems => serde_json::to_value(service.list())?,
        RpcRequest::MarkItem { name, value } => json!(service.mark(&name, value)?),
        RpcRequest::MarkAll { value } => json!(service.mark_all(value)?),
        RpcRequest::RemoveItem { name } => json!(service.remove(&name)?),
        RpcRequest::MonthlyTotal { year, month } => json!(service.monthly_total(year, month)),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::MemoryStore;
    use std::sync::Arc;

    fn service() -> ShoppingListService {
        ShoppingListService::open(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_request_encoding() {
        let request = RpcRequest::MarkItem {
            name: "milk".to_string(),
            value: 3.5,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"method": "mark_item", "params": {"name": "milk", "value": 3.5}})
        );

        let list: RpcRequest = serde_json::from_value(json!({"method": "list_items"})).unwrap();
        assert_eq!(list, RpcRequest::ListItems);
        assert_eq!(list.method(), "list_items");
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let parsed = serde_json::from_value::<RpcRequest>(json!({"method": "drop_table"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_encoding() {
        let ok = RpcResponse::Result(json!(true));
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"result": true}));

        let err = RpcResponse::Error(RpcError {
            code: ErrorCode::Persistence,
            message: "disk full".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"error": {"code": "persistence", "message": "disk full"}})
        );
    }

    #[test]
    fn test_validate_params() {
        let bad_month = RpcRequest::MonthlyTotal { year: 2024, month: 13 };
        assert!(matches!(bad_month.validate(), Err(GatewayError::InvalidParams(_))));
        assert!(RpcRequest::MonthlyTotal { year: 2024, month: 0 }.validate().is_err());
        assert!(RpcRequest::MonthlyTotal { year: 2024, month: 12 }.validate().is_ok());

        assert!(RpcRequest::AddItem { name: String::new() }.validate().is_err());
        assert!(RpcRequest::MarkAll { value: f64::INFINITY }.validate().is_err());
    }

    #[test]
    fn test_dispatch_runs_operations() {
        let service = service();
        let add = RpcRequest::AddItem {
            name: "milk".to_string(),
        };

        assert_eq!(dispatch(&service, add.clone()).unwrap(), json!(true));
        assert_eq!(dispatch(&service, add).unwrap(), json!(false));

        let listed = dispatch(&service, RpcRequest::ListItems).unwrap();
        assert_eq!(listed[0]["name"], "milk");
        assert_eq!(listed[0]["purchased"], false);

        let mark_all = dispatch(&service, RpcRequest::MarkAll { value: 2.0 }).unwrap();
        assert_eq!(mark_all, json!(true));

        let remove = RpcRequest::RemoveItem {
            name: "milk".to_string(),
        };
        assert_eq!(dispatch(&service, remove).unwrap(), json!(true));

        let total = RpcRequest::MonthlyTotal { year: 2024, month: 1 };
        assert_eq!(dispatch(&service, total).unwrap(), json!(0.0));
    }
}
