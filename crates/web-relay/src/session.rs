//! Per-connection chat transcripts and API keys, held in memory only

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Assistant,
    System,
}

/// Tool invocation attached to a transcript entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCallRecord {
    pub name: String,
    pub arguments: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<ToolCallRecord>,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
            tool_call: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageKind::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageKind::System, content)
    }

    pub fn with_tool_call(mut self, tool_call: ToolCallRecord) -> Self {
        self.tool_call = Some(tool_call);
        self
    }
}

#[derive(Debug, Default)]
pub struct ChatSession {
    pub history: Vec<ChatMessage>,
    pub api_key: Option<String>,
}

/// All live connections. Sessions are created on connect and dropped on disconnect.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, ChatSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh session and return its id
    pub async fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, ChatSession::default());
        id
    }

    pub async fn close(&self, id: Uuid) {
        self.sessions.write().await.remove(&id);
    }

    /// Append to a transcript; ignored for closed sessions
    pub async fn push(&self, id: Uuid, message: ChatMessage) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.history.push(message);
        }
    }

    pub async fn history(&self, id: Uuid) -> Vec<ChatMessage> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|s| s.history.clone())
            .unwrap_or_default()
    }

    pub async fn set_api_key(&self, id: Uuid, api_key: impl Into<String>) {
        if let Some(session) = self.sessions.write().await.get_mut(&id) {
            session.api_key = Some(api_key.into());
        }
    }

    pub async fn api_key(&self, id: Uuid) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(&id)
            .and_then(|s| s.api_key.clone())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.open().await;
        let b = store.open().await;

        store.push(a, ChatMessage::user("status")).await;
        store.set_api_key(a, "k1").await;

        assert_eq!(store.history(a).await.len(), 1);
        assert!(store.history(b).await.is_empty());
        assert_eq!(store.api_key(a).await.as_deref(), Some("k1"));
        assert_eq!(store.api_key(b).await, None);
    }

    #[tokio::test]
    async fn test_close_discards_state() {
        let store = SessionStore::new();
        let id = store.open().await;
        store.set_api_key(id, "k1").await;
        store.close(id).await;

        assert_eq!(store.len().await, 0);
        assert_eq!(store.api_key(id).await, None);
        store.push(id, ChatMessage::system("late")).await;
        assert!(store.history(id).await.is_empty());
    }

    #[test]
    fn test_message_serialization() {
        let message = ChatMessage::assistant("done").with_tool_call(ToolCallRecord {
            name: "bitbadges_getStatus".to_string(),
            arguments: json!({}),
            result: Some(json!({"ok": true})),
            error: None,
        });

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["type"], "assistant");
        assert_eq!(value["toolCall"]["name"], "bitbadges_getStatus");
        assert!(value["toolCall"].get("error").is_none());
        assert!(value["timestamp"].is_string());
    }
}
