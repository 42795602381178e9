//! Keyword router that turns chat messages into tool calls

use bitbadges_mcp::tools::CONFIGURE_TOOL;
use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::error::RelayResult;
use crate::relay::McpRelay;
use crate::session::{SessionStore, ToolCallRecord};

const STATUS_TOOL: &str = "bitbadges_getStatus";
const SEARCH_TOOL: &str = "bitbadges_searchClaims";
const ACCOUNT_TOOL: &str = "bitbadges_getAccount";
const COLLECTION_TOOL: &str = "bitbadges_getCollection";

pub const API_KEY_REQUIRED: &str = "🔑 Please configure your API key first using the setup form above or by typing: \"configure api key YOUR_API_KEY\"";

const HELP: &str = "I can help you interact with BitBadges! Try these commands:

📊 **Status & Search:**
- \"status\" - Check API health
- \"search QUERY\" - Search claims

👤 **Accounts:**
- \"account bb1...\" - Look up by address
- \"account username USERNAME\" - Look up by username

🏆 **Collections:**
- \"collection 1\" - Get collection info

Or use the tool interface below to make direct API calls!";

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

fn api_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)api[_\s]?key[:\s]+([a-zA-Z0-9\-_]+)")
}

fn search_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)search[:\s]+(.+)")
}

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)bb1[a-z0-9]+")
}

fn username_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)username[:\s]+([a-zA-Z0-9_]+)")
}

fn collection_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"(?i)collection[:\s]+(\d+)")
}

/// What a chat message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    ConfigureApiKey(String),
    ConfigureUsage,
    Status,
    Search(String),
    SearchUsage,
    AccountByAddress(String),
    AccountByUsername(String),
    AccountUsage,
    Collection(String),
    CollectionUsage,
    Help,
}

impl ChatCommand {
    /// Match keywords in priority order: configure, status, search, account, collection
    pub fn parse(message: &str) -> Self {
        let lower = message.to_lowercase();
        let capture = |re: &Regex| {
            re.captures(message)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
        };

        if lower.contains("configure") && lower.contains("api key") {
            return match capture(api_key_re()) {
                Some(key) => ChatCommand::ConfigureApiKey(key),
                None => ChatCommand::ConfigureUsage,
            };
        }

        if lower.contains("status") || lower.contains("health") {
            return ChatCommand::Status;
        }

        if lower.contains("search") {
            return match capture(search_re()) {
                Some(query) if !query.is_empty() => ChatCommand::Search(query),
                _ => ChatCommand::SearchUsage,
            };
        }

        if lower.contains("account") || lower.contains("user") {
            if let Some(address) = address_re().find(message) {
                return ChatCommand::AccountByAddress(address.as_str().to_string());
            }
            return match capture(username_re()) {
                Some(username) => ChatCommand::AccountByUsername(username),
                None => ChatCommand::AccountUsage,
            };
        }

        if lower.contains("collection") {
            return match capture(collection_re()) {
                Some(id) => ChatCommand::Collection(id),
                None => ChatCommand::CollectionUsage,
            };
        }

        ChatCommand::Help
    }
}

/// Assistant reply, with the tool call that produced it if any
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub tool_call: Option<ToolCallRecord>,
}

impl ChatReply {
    fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_call: None,
        }
    }
}

/// Answer one chat message for a session, calling tools through the relay
pub async fn process_message(
    relay: &McpRelay,
    sessions: &SessionStore,
    session_id: Uuid,
    message: &str,
) -> RelayResult<ChatReply> {
    let command = ChatCommand::parse(message);
    let api_key = sessions.api_key(session_id).await;

    if let ChatCommand::ConfigureApiKey(key) = &command {
        sessions.set_api_key(session_id, key.clone()).await;
        let result = relay.call_tool(CONFIGURE_TOOL, json!({ "apiKey": key })).await?;
        return Ok(ChatReply {
            content: "API key configured successfully! You can now use BitBadges tools.".to_string(),
            tool_call: Some(ToolCallRecord {
                name: CONFIGURE_TOOL.to_string(),
                arguments: json!({"apiKey": "***"}),
                result: Some(result),
                error: None,
            }),
        });
    }

    let mentions_configure = message.to_lowercase().contains("configure");
    if api_key.is_none() && (!mentions_configure || command == ChatCommand::Help) {
        return Ok(ChatReply::text(API_KEY_REQUIRED));
    }

    let (tool, arguments, content) = match command {
        ChatCommand::ConfigureApiKey(_) | ChatCommand::Help => return Ok(ChatReply::text(HELP)),
        ChatCommand::ConfigureUsage => {
            return Ok(ChatReply::text(
                "Please provide your API key in the format: \"configure api key YOUR_API_KEY\"",
            ))
        }
        ChatCommand::SearchUsage => {
            return Ok(ChatReply::text(
                "Please specify what to search for: \"search YOUR_QUERY\"",
            ))
        }
        ChatCommand::AccountUsage => {
            return Ok(ChatReply::text(
                "Please provide an address (bb1...) or username to look up an account.",
            ))
        }
        ChatCommand::CollectionUsage => {
            return Ok(ChatReply::text("Please specify a collection ID: \"collection 1\""))
        }
        ChatCommand::Status => (STATUS_TOOL, json!({}), "Fetched BitBadges API status.".to_string()),
        ChatCommand::Search(query) => (
            SEARCH_TOOL,
            json!({ "searchValue": query }),
            format!("Searched for \"{}\"", query),
        ),
        ChatCommand::AccountByAddress(address) => (
            ACCOUNT_TOOL,
            json!({ "address": address }),
            format!("Fetched account information for {}", address),
        ),
        ChatCommand::AccountByUsername(username) => (
            ACCOUNT_TOOL,
            json!({ "username": username }),
            format!("Fetched account information for username: {}", username),
        ),
        ChatCommand::Collection(id) => (
            COLLECTION_TOOL,
            json!({ "collectionId": id }),
            format!("Fetched information for collection {}", id),
        ),
    };

    let result = relay
        .call_tool_with_api_key(tool, arguments.clone(), api_key.as_deref())
        .await?;

    Ok(ChatReply {
        content,
        tool_call: Some(ToolCallRecord {
            name: tool.to_string(),
            arguments,
            result: Some(result),
            error: None,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::REQUEST_TIMEOUT;
    use serde_json::Value;
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::sync::mpsc;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ChatCommand::parse("Configure API key: abc-123_X"),
            ChatCommand::ConfigureApiKey("abc-123_X".to_string())
        );
        assert_eq!(ChatCommand::parse("configure api key"), ChatCommand::ConfigureUsage);
        assert_eq!(ChatCommand::parse("what's the STATUS?"), ChatCommand::Status);
        assert_eq!(ChatCommand::parse("health"), ChatCommand::Status);
        assert_eq!(
            ChatCommand::parse("search: my claim "),
            ChatCommand::Search("my claim".to_string())
        );
        assert_eq!(ChatCommand::parse("search"), ChatCommand::SearchUsage);
        assert_eq!(
            ChatCommand::parse("account bb1qxyz42"),
            ChatCommand::AccountByAddress("bb1qxyz42".to_string())
        );
        assert_eq!(
            ChatCommand::parse("account username alice_1"),
            ChatCommand::AccountByUsername("alice_1".to_string())
        );
        assert_eq!(ChatCommand::parse("user lookup"), ChatCommand::AccountUsage);
        assert_eq!(
            ChatCommand::parse("collection 16"),
            ChatCommand::Collection("16".to_string())
        );
        assert_eq!(ChatCommand::parse("collection abc"), ChatCommand::CollectionUsage);
        assert_eq!(ChatCommand::parse("hello"), ChatCommand::Help);
    }

    /// Relay backed by a fake server that records every `tools/call` and answers `{}`
    async fn fake_server() -> (Arc<McpRelay>, mpsc::UnboundedReceiver<Value>) {
        let relay = Arc::new(McpRelay::new(REQUEST_TIMEOUT));
        let (client, server) = tokio::io::duplex(64 * 1024);
        relay.attach(client).await;

        let (tx, rx) = mpsc::unbounded_channel();
        let responder = relay.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(server).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let request: Value = serde_json::from_str(&line).unwrap();
                let _ = tx.send(request["params"].clone());
                let reply = json!({"jsonrpc": "2.0", "id": request["id"], "result": {"content": []}});
                responder.handle_output_line(&reply.to_string()).await;
            }
        });
        (relay, rx)
    }

    #[tokio::test]
    async fn test_key_required_before_tools() {
        let (relay, mut calls) = fake_server().await;
        let sessions = SessionStore::new();
        let id = sessions.open().await;

        let reply = process_message(&relay, &sessions, id, "status").await.unwrap();
        assert_eq!(reply.content, API_KEY_REQUIRED);
        assert!(reply.tool_call.is_none());
        assert!(calls.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_configure_then_collection() {
        let (relay, mut calls) = fake_server().await;
        let sessions = SessionStore::new();
        let id = sessions.open().await;

        let reply = process_message(&relay, &sessions, id, "configure api key k1")
            .await
            .unwrap();
        let record = reply.tool_call.unwrap();
        assert_eq!(record.arguments, json!({"apiKey": "***"}));
        assert_eq!(sessions.api_key(id).await.as_deref(), Some("k1"));
        assert_eq!(
            calls.recv().await.unwrap(),
            json!({"name": CONFIGURE_TOOL, "arguments": {"apiKey": "k1"}})
        );

        let reply = process_message(&relay, &sessions, id, "collection 7").await.unwrap();
        assert_eq!(reply.content, "Fetched information for collection 7");
        assert_eq!(calls.recv().await.unwrap()["name"], CONFIGURE_TOOL);
        assert_eq!(
            calls.recv().await.unwrap(),
            json!({"name": COLLECTION_TOOL, "arguments": {"collectionId": "7"}})
        );
    }

    #[tokio::test]
    async fn test_help_once_configured() {
        let (relay, _calls) = fake_server().await;
        let sessions = SessionStore::new();
        let id = sessions.open().await;
        sessions.set_api_key(id, "k1").await;

        let reply = process_message(&relay, &sessions, id, "hello there").await.unwrap();
        assert!(reply.content.starts_with("I can help you interact with BitBadges!"));
    }
}
