//! Browser WebSocket channel: JSON frames of the form `{"event": ..., "data": ...}`

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::chat::process_message;
use crate::http::AppState;
use crate::session::{ChatMessage, ToolCallRecord};

/// Events sent by the browser
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    ChatMessage {
        message: String,
    },
    ToolCall {
        #[serde(rename = "toolName")]
        tool_name: String,
        #[serde(default)]
        arguments: Value,
    },
    GetTools,
    ConfigureApiKey {
        #[serde(rename = "apiKey", default)]
        api_key: String,
    },
}

/// Event pushed to the browser
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerEvent {
    pub event: &'static str,
    pub data: Value,
}

impl ServerEvent {
    pub fn new(event: &'static str, data: impl Serialize) -> Self {
        Self {
            event,
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }
}

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let session_id = state.sessions.open().await;
    info!("Client connected: {}", session_id);

    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();

    let writer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let Ok(text) = serde_json::to_string(&event) else {
                continue;
            };
            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Fresh conversation for every connection
    let _ = tx.send(ServerEvent::new("chat_history", Vec::<ChatMessage>::new()));
    let _ = tx.send(ServerEvent::new("api_key_status", json!({"configured": false})));

    while let Some(message) = stream.next().await {
        let text = match message {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                warn!("WebSocket error: {}", e);
                break;
            }
        };

        let event = match serde_json::from_str::<ClientEvent>(&text) {
            Ok(event) => event,
            Err(e) => {
                debug!("Unrecognized socket frame: {}", e);
                let _ = tx.send(ServerEvent::new("error", json!({"message": e.to_string()})));
                continue;
            }
        };

        let state = state.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            for outgoing in handle_event(&state, session_id, event).await {
                let _ = tx.send(outgoing);
            }
        });
    }

    info!("Client disconnected: {}", session_id);
    state.sessions.close(session_id).await;
    drop(tx);
    let _ = writer.await;
}

/// Apply one browser event to a session and return the events to emit
pub async fn handle_event(state: &AppState, session_id: Uuid, event: ClientEvent) -> Vec<ServerEvent> {
    match event {
        ClientEvent::ChatMessage { message } => {
            let user = ChatMessage::user(message.clone());
            state.sessions.push(session_id, user.clone()).await;

            let reply = match process_message(&state.relay, &state.sessions, session_id, &message).await {
                Ok(reply) => {
                    let mut assistant = ChatMessage::assistant(reply.content);
                    assistant.tool_call = reply.tool_call;
                    assistant
                }
                Err(e) => ChatMessage::system(format!("Error: {}", e)),
            };
            state.sessions.push(session_id, reply.clone()).await;

            vec![
                ServerEvent::new("new_message", user),
                ServerEvent::new("new_message", reply),
            ]
        }

        ClientEvent::ToolCall { tool_name, arguments } => {
            let api_key = state.sessions.api_key(session_id).await;
            let outcome = state
                .relay
                .call_tool_with_api_key(&tool_name, arguments.clone(), api_key.as_deref())
                .await;

            let message = match outcome {
                Ok(result) => ChatMessage::assistant(format!("Tool \"{}\" executed successfully", tool_name))
                    .with_tool_call(ToolCallRecord {
                        name: tool_name,
                        arguments,
                        result: Some(result),
                        error: None,
                    }),
                Err(e) => ChatMessage::system(format!("Tool error: {}", e)).with_tool_call(ToolCallRecord {
                    name: tool_name,
                    arguments,
                    result: None,
                    error: Some(e.to_string()),
                }),
            };
            state.sessions.push(session_id, message.clone()).await;

            vec![ServerEvent::new("new_message", message)]
        }

        ClientEvent::GetTools => match state.relay.list_tools().await {
            Ok(tools) => vec![ServerEvent::new("tools_list", tools)],
            Err(e) => vec![ServerEvent::new("error", json!({"message": e.to_string()}))],
        },

        ClientEvent::ConfigureApiKey { api_key } => {
            let api_key = api_key.trim();
            if api_key.is_empty() {
                return vec![ServerEvent::new(
                    "api_key_configured",
                    json!({"success": false, "error": "Invalid API key"}),
                )];
            }

            state.sessions.set_api_key(session_id, api_key).await;
            let notice =
                ChatMessage::system("🔑 API key configured successfully! You can now use BitBadges tools.");
            state.sessions.push(session_id, notice.clone()).await;

            vec![
                ServerEvent::new("api_key_configured", json!({"success": true})),
                ServerEvent::new("new_message", notice),
            ]
        }
    }
}
