//! Chat client for a Discord-style incoming webhook.
//!
//! Messages are fire-and-forget: the payload is a single JSON POST of
//! `{"content": ..., "username": ...}` with no retry, no backoff, and no
//! history fetch. Delivery itself goes through the [`WebhookTransport`]
//! seam supplied by the host, so the client stays testable without a
//! network; a failed post is logged and the message still lands in the
//! local history.
//!
//! # Usage
//!
//! ```ignore
//! let mut chat = ChatClient::new("https://discord.com/api/webhooks/...");
//! chat.set_username("renn");
//! chat.send(&mut transport, "hello from the particle field")?;
//! ```

use std::time::SystemTime;

use serde::Serialize;

use crate::error::ChatError;
use crate::settings::DEFAULT_USERNAME;

/// The JSON body posted to the webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookPayload {
    /// Message text.
    pub content: String,
    /// Display name shown for the message.
    pub username: String,
}

/// Outbound delivery seam for webhook posts.
///
/// Implementations receive the webhook URL and the serialized JSON body.
pub trait WebhookTransport {
    /// Post `body` to `url`. Called at most once per message.
    fn post(&mut self, url: &str, body: &str) -> Result<(), ChatError>;
}

/// A message recorded in the local chat log.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    /// Display name the message was sent under.
    pub author: String,
    /// Trimmed message text.
    pub text: String,
    /// When the message was sent.
    pub sent_at: SystemTime,
}

/// Client that formats and posts chat messages to one webhook.
#[derive(Debug)]
pub struct ChatClient {
    webhook_url: String,
    username: String,
    history: Vec<ChatEntry>,
}

impl ChatClient {
    /// Create a client for the given webhook URL, posting as
    /// [`DEFAULT_USERNAME`] until a name is set.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            username: DEFAULT_USERNAME.to_string(),
            history: Vec::new(),
        }
    }

    /// Set the display name for subsequent messages.
    ///
    /// Blank names fall back to [`DEFAULT_USERNAME`].
    pub fn set_username(&mut self, name: &str) {
        let name = name.trim();
        self.username = if name.is_empty() {
            DEFAULT_USERNAME.to_string()
        } else {
            name.to_string()
        };
    }

    /// Current display name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Send a message through `transport` and append it to the local log.
    ///
    /// Whitespace-only messages are dropped; returns `false` for those.
    /// A transport failure is logged but does not remove the message from
    /// the local log and does not surface as an error.
    pub fn send<T: WebhookTransport>(
        &mut self,
        transport: &mut T,
        text: &str,
    ) -> Result<bool, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        let payload = WebhookPayload {
            content: text.to_string(),
            username: self.username.clone(),
        };
        let body = serde_json::to_string(&payload)?;

        if let Err(e) = transport.post(&self.webhook_url, &body) {
            log::warn!("webhook post failed: {}", e);
        }

        self.history.push(ChatEntry {
            author: self.username.clone(),
            text: text.to_string(),
            sent_at: SystemTime::now(),
        });
        Ok(true)
    }

    /// Messages sent so far, oldest first.
    pub fn history(&self) -> &[ChatEntry] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records posts instead of delivering them.
    struct MemoryTransport {
        posts: Vec<(String, String)>,
        fail: bool,
    }

    impl MemoryTransport {
        fn new() -> Self {
            Self {
                posts: Vec::new(),
                fail: false,
            }
        }
    }

    impl WebhookTransport for MemoryTransport {
        fn post(&mut self, url: &str, body: &str) -> Result<(), ChatError> {
            if self.fail {
                return Err(ChatError::Transport("connection refused".to_string()));
            }
            self.posts.push((url.to_string(), body.to_string()));
            Ok(())
        }
    }

    #[test]
    fn payload_has_content_and_username_fields() {
        let mut chat = ChatClient::new("https://example.test/hook");
        chat.set_username("renn");
        let mut transport = MemoryTransport::new();

        assert!(chat.send(&mut transport, "  hello  ").unwrap());

        let (url, body) = &transport.posts[0];
        assert_eq!(url, "https://example.test/hook");
        assert_eq!(body, r#"{"content":"hello","username":"renn"}"#);
    }

    #[test]
    fn whitespace_only_messages_are_dropped() {
        let mut chat = ChatClient::new("https://example.test/hook");
        let mut transport = MemoryTransport::new();

        assert!(!chat.send(&mut transport, "   \n\t ").unwrap());
        assert!(transport.posts.is_empty());
        assert!(chat.history().is_empty());
    }

    #[test]
    fn blank_username_falls_back_to_anonymous() {
        let mut chat = ChatClient::new("https://example.test/hook");
        chat.set_username("  ");
        assert_eq!(chat.username(), DEFAULT_USERNAME);

        chat.set_username("ada");
        assert_eq!(chat.username(), "ada");
    }

    #[test]
    fn transport_failure_still_records_the_message() {
        let mut chat = ChatClient::new("https://example.test/hook");
        let mut transport = MemoryTransport::new();
        transport.fail = true;

        assert!(chat.send(&mut transport, "lost to the void").unwrap());
        assert_eq!(chat.history().len(), 1);
        assert_eq!(chat.history()[0].text, "lost to the void");
    }

    #[test]
    fn history_keeps_send_order() {
        let mut chat = ChatClient::new("https://example.test/hook");
        let mut transport = MemoryTransport::new();

        chat.send(&mut transport, "first").unwrap();
        chat.send(&mut transport, "second").unwrap();

        let texts: Vec<_> = chat.history().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }
}
