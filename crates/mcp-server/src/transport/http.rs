//! HTTP/SSE transport for MCP

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::Stream;
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::protocol::{McpMessage, RequestHandler};

type SessionMap = Arc<Mutex<HashMap<Uuid, mpsc::UnboundedSender<McpMessage>>>>;

/// Shared state for HTTP handlers
#[derive(Clone)]
struct AppState {
    handler: Arc<RequestHandler>,
    sessions: SessionMap,
}

/// HTTP transport for MCP protocol
pub struct HttpTransport {
    handler: Arc<RequestHandler>,
    port: u16,
}

impl HttpTransport {
    pub fn new(handler: Arc<RequestHandler>, port: u16) -> Self {
        Self { handler, port }
    }

    /// Routes: health, request/response JSON-RPC, and SSE sessions
    pub fn router(&self) -> Router {
        let state = AppState {
            handler: self.handler.clone(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(health))
            .route("/health", get(health))
            .route("/mcp", post(handle_mcp_request))
            .route("/sse", get(handle_sse))
            .route("/messages", post(handle_session_message))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let addr = format!("0.0.0.0:{}", self.port);
        info!("Starting MCP HTTP server on {}", addr);
        info!("SSE endpoint: http://localhost:{}/sse", self.port);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handle MCP JSON-RPC request via HTTP POST
async fn handle_mcp_request(
    State(state): State<AppState>,
    Json(message): Json<McpMessage>,
) -> Response {
    debug!("HTTP request: {:?}", message.method);

    match state.handler.handle(message).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Removes a session from the map once its SSE stream is dropped
struct SessionGuard {
    id: Uuid,
    sessions: SessionMap,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.remove(&self.id);
        }
        info!("SSE session {} closed", self.id);
    }
}

/// Open an SSE session: an `endpoint` event first, then one `message` event per response
async fn handle_sse(State(state): State<AppState>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::unbounded_channel::<McpMessage>();

    if let Ok(mut sessions) = state.sessions.lock() {
        sessions.insert(session_id, tx);
    }
    info!("SSE session {} established", session_id);

    let guard = SessionGuard {
        id: session_id,
        sessions: state.sessions.clone(),
    };

    let stream = async_stream::stream! {
        let _guard = guard;
        yield Ok(Event::default()
            .event("endpoint")
            .data(format!("/messages?sessionId={}", session_id)));

        while let Some(message) = rx.recv().await {
            match serde_json::to_string(&message) {
                Ok(data) => yield Ok(Event::default().event("message").data(data)),
                Err(e) => error!("Failed to serialize response: {}", e),
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Uuid,
}

/// Accept a message for an SSE session; the response arrives on the stream
async fn handle_session_message(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    Json(message): Json<McpMessage>,
) -> StatusCode {
    let sender = state
        .sessions
        .lock()
        .ok()
        .and_then(|sessions| sessions.get(&query.session_id).cloned());

    let Some(sender) = sender else {
        debug!("Message for unknown session {}", query.session_id);
        return StatusCode::NOT_FOUND;
    };

    let handler = state.handler.clone();
    tokio::spawn(async move {
        if let Some(response) = handler.handle(message).await {
            let _ = sender.send(response);
        }
    });

    StatusCode::ACCEPTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{Gateway, GeneratedRouter};
    use axum::body::Body;
    use axum::http::Request;
    use futures::StreamExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let gateway = Gateway::new(GeneratedRouter::new().unwrap()).unwrap();
        let handler = Arc::new(RequestHandler::new(Arc::new(gateway)));
        HttpTransport::new(handler, 0).router()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "healthy");
        assert!(value["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_post_mcp_round_trip() {
        let response = app()
            .oneshot(post_json("/mcp", json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["result"], json!({}));
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let uri = format!("/messages?sessionId={}", Uuid::new_v4());
        let response = app()
            .oneshot(post_json(&uri, json!({"jsonrpc": "2.0", "id": 1, "method": "ping"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_sse_session_flow() {
        let app = app();
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/sse").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let mut frames = response.into_body().into_data_stream();
        let first = String::from_utf8(frames.next().await.unwrap().unwrap().to_vec()).unwrap();
        assert!(first.contains("event: endpoint"));

        let endpoint = first
            .lines()
            .find_map(|l| l.strip_prefix("data: "))
            .unwrap()
            .trim()
            .to_string();
        assert!(endpoint.starts_with("/messages?sessionId="));

        let response = app
            .oneshot(post_json(&endpoint, json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let second = String::from_utf8(frames.next().await.unwrap().unwrap().to_vec()).unwrap();
        assert!(second.contains("event: message"));
        assert!(second.contains(r#""id":7"#));
    }
}
