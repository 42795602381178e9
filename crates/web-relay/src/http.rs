//! HTTP API, WebSocket endpoint and static front end

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::relay::McpRelay;
use crate::session::SessionStore;
use crate::socket::ws_handler;

/// Shared state for HTTP and socket handlers
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<McpRelay>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(relay: Arc<McpRelay>) -> Self {
        Self {
            relay,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

/// Browser-facing server
pub struct WebServer {
    state: AppState,
    public_dir: PathBuf,
    port: u16,
}

impl WebServer {
    pub fn new(state: AppState, public_dir: impl Into<PathBuf>, port: u16) -> Self {
        Self {
            state,
            public_dir: public_dir.into(),
            port,
        }
    }

    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/health", get(health))
            .route("/api/tools", get(list_tools))
            .route("/api/tool/:tool_name", post(call_tool))
            .route("/ws", get(ws_handler))
            .fallback_service(ServeDir::new(&self.public_dir))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    pub async fn run(&self, shutdown: impl std::future::Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        info!("BitBadges web interface running on http://localhost:{}", self.port);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

fn internal_error(message: impl ToString) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message.to_string() })),
    )
        .into_response()
}

async fn list_tools(State(state): State<AppState>) -> Response {
    match state.relay.list_tools().await {
        Ok(tools) => Json(tools).into_response(),
        Err(e) => {
            error!("Failed to list tools: {}", e);
            internal_error(e)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallBody {
    #[serde(default)]
    arguments: Value,
}

async fn call_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    body: Option<Json<ToolCallBody>>,
) -> Response {
    let arguments = match body.map(|Json(b)| b.arguments) {
        Some(Value::Null) | None => json!({}),
        Some(arguments) => arguments,
    };

    match state.relay.call_tool(&tool_name, arguments).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!("Tool {} failed: {}", tool_name, e);
            internal_error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::REQUEST_TIMEOUT;
    use axum::body::Body;
    use axum::http::Request;
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tower::ServiceExt;

    fn app(relay: Arc<McpRelay>) -> Router {
        WebServer::new(AppState::new(relay), "public", 0).router()
    }

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Arc::new(McpRelay::new(REQUEST_TIMEOUT)))
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_tools_unavailable_is_500() {
        let response = app(Arc::new(McpRelay::new(REQUEST_TIMEOUT)))
            .oneshot(Request::builder().uri("/api/tools").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({"error": "MCP server not available"}));
    }

    #[tokio::test]
    async fn test_tool_call_is_relayed() {
        let relay = Arc::new(McpRelay::new(REQUEST_TIMEOUT));
        let (client, server) = tokio::io::duplex(64 * 1024);
        relay.attach(client).await;

        let responder = relay.clone();
        let server = tokio::spawn(async move {
            let mut lines = BufReader::new(server).lines();
            let line = lines.next_line().await.unwrap().unwrap();
            let request: Value = serde_json::from_str(&line).unwrap();
            let reply = json!({
                "jsonrpc": "2.0",
                "id": request["id"],
                "result": {"content": [{"type": "text", "text": "ok"}]}
            });
            responder.handle_output_line(&reply.to_string()).await;
            request["params"].clone()
        });

        let request = Request::builder()
            .method("POST")
            .uri("/api/tool/bitbadges_getCollection")
            .header("content-type", "application/json")
            .body(Body::from(json!({"arguments": {"collectionId": "1"}}).to_string()))
            .unwrap();
        let response = app(relay).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["content"][0]["text"], "ok");
        assert_eq!(
            server.await.unwrap(),
            json!({"name": "bitbadges_getCollection", "arguments": {"collectionId": "1"}})
        );
    }
}
