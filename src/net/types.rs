//! Wire types for the chat and contact endpoints.

use serde::{Deserialize, Serialize};

/// Context label sent with every chat message.
pub const CHAT_CONTEXT: &str = "3d_concrete_printing";

/// Raw result of a POST that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body of a chat POST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub context: &'a str,
    pub timestamp: &'a str,
}

/// Body of a successful chat reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
