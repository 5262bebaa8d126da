//! Main Gateway implementation
//!
//! HTTP server exposing the shopping list as named remote procedures.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shoplist_core::{JsonFileStore, ShoppingListService};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::rpc::{dispatch, RpcRequest, RpcResponse};
use crate::{GatewayError, Result};

/// Gateway state shared across handlers
#[derive(Clone)]
pub struct GatewayState {
    pub config: GatewayConfig,
    pub service: Arc<ShoppingListService>,
}

/// Main Gateway
pub struct Gateway {
    state: Arc<GatewayState>,
}

impl Gateway {
    /// Open the data file named in `config`. A corrupt file is an error and
    /// the gateway does not start.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let store = Arc::new(JsonFileStore::new(&config.data_file));
        let service = ShoppingListService::open(store).map_err(|e| {
            GatewayError::Persistence(format!(
                "cannot load {}: {}",
                config.data_file.display(),
                e
            ))
        })?;
        Ok(Self::with_service(config, Arc::new(service)))
    }

    /// Serve an already opened service
    pub fn with_service(config: GatewayConfig, service: Arc<ShoppingListService>) -> Self {
        Self {
            state: Arc::new(GatewayState { config, service }),
        }
    }

    /// Get gateway state
    pub fn state(&self) -> Arc<GatewayState> {
        self.state.clone()
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/rpc", post(Self::handle_rpc))
            .route("/health", get(Self::handle_health))
            .route("/status", get(Self::handle_status))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn start(&self) -> Result<()> {
        let addr = self.state.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;

        self.serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Gateway shutdown initiated");
        })
        .await
    }

    /// Serve on `listener` until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            "Shopping list gateway listening on {} ({} items in {})",
            listener.local_addr()?,
            self.state.service.len(),
            self.state.config.data_file.display()
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))
    }

    // HTTP handlers

    async fn handle_rpc(
        State(state): State<Arc<GatewayState>>,
        payload: std::result::Result<Json<RpcRequest>, JsonRejection>,
    ) -> Result<Json<RpcResponse>> {
        let Json(request) =
            payload.map_err(|rejection| GatewayError::InvalidRequest(rejection.body_text()))?;

        let method = request.method();
        tracing::debug!("rpc {}", method);

        let service = state.service.clone();
        let result = tokio::task::spawn_blocking(move || dispatch(&service, request))
            .await
            .map_err(|e| GatewayError::Internal(e.to_string()))?;

        match result {
            Ok(value) => Ok(Json(RpcResponse::Result(value))),
            Err(e) => {
                tracing::warn!("rpc {} failed: {}", method, e);
                Err(e)
            }
        }
    }

    async fn handle_health() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "healthy",
            "version": crate::VERSION
        }))
    }

    async fn handle_status(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
        Json(serde_json::json!({
            "version": crate::VERSION,
            "items": state.service.len(),
            "data_file": state.config.data_file.display().to_string(),
        }))
    }
}
