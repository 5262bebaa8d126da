//! Client for a running Shoplist Gateway

use serde::de::DeserializeOwned;
use shoplist_core::Item;

use crate::rpc::{RpcRequest, RpcResponse};
use crate::{GatewayError, Result};

/// Typed client, one method per remote procedure
#[derive(Debug, Clone)]
pub struct GatewayClient {
    url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Client for the gateway at `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL without trailing slash
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `add_item`: true if the item was created
    pub async fn add_item(&self, name: &str) -> Result<bool> {
        self.call(RpcRequest::AddItem {
            name: name.to_string(),
        })
        .await
    }

    /// `list_items`: snapshot of the whole list
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        self.call(RpcRequest::ListItems).await
    }

    /// `mark_item`: true if a pending item was marked
    pub async fn mark_item(&self, name: &str, value: f64) -> Result<bool> {
        self.call(RpcRequest::MarkItem {
            name: name.to_string(),
            value,
        })
        .await
    }

    /// `mark_all`: true if anything was pending
    pub async fn mark_all(&self, value: f64) -> Result<bool> {
        self.call(RpcRequest::MarkAll { value }).await
    }

    /// `remove_item`: true if anything was removed
    pub async fn remove_item(&self, name: &str) -> Result<bool> {
        self.call(RpcRequest::RemoveItem {
            name: name.to_string(),
        })
        .await
    }

    /// `monthly_total`: sum of purchases in the month
    pub async fn monthly_total(&self, year: i32, month: u32) -> Result<f64> {
        self.call(RpcRequest::MonthlyTotal { year, month }).await
    }

    /// Send a call and decode its result
    pub async fn call<T: DeserializeOwned>(&self, request: RpcRequest) -> Result<T> {
        tracing::debug!("calling {} on {}", request.method(), self.url);

        // Error bodies carry a non-2xx status, so decode before checking it
        let response = self
            .http
            .post(format!("{}/rpc", self.url))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let decoded: RpcResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("unexpected response ({}): {}", status, e))
        })?;

        match decoded {
            RpcResponse::Result(value) => Ok(serde_json::from_value(value)?),
            RpcResponse::Error(error) => Err(GatewayError::Remote {
                code: error.code,
                message: error.message,
            }),
        }
    }
}
