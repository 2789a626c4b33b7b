//! Chat endpoint client.

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::sync::Arc;

use super::transport::JsonPost;
use super::types::{CHAT_CONTEXT, ChatReply, ChatRequest};
use crate::config::SiteConfig;
use crate::error::SiteError;

#[derive(Clone)]
pub struct ChatClient {
    transport: Arc<dyn JsonPost>,
    endpoint: String,
    bearer_token: String,
}

impl ChatClient {
    #[must_use]
    pub fn new(transport: Arc<dyn JsonPost>, endpoint: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into(), bearer_token: bearer_token.into() }
    }

    #[must_use]
    pub fn from_config(transport: Arc<dyn JsonPost>, config: &SiteConfig) -> Self {
        Self::new(transport, config.chat_endpoint.clone(), config.chat_bearer_token.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one visitor message and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ApiRequest`] when no response arrives,
    /// [`SiteError::ApiResponse`] for any non-2xx status, and
    /// [`SiteError::ApiParse`] when the body lacks a `response` string.
    pub async fn ask(&self, message: &str, timestamp: &str) -> Result<String, SiteError> {
        let request = ChatRequest { message, context: CHAT_CONTEXT, timestamp };
        let body = serde_json::to_value(&request).map_err(|e| SiteError::ApiParse(e.to_string()))?;
        let response = self
            .transport
            .post_json(&self.endpoint, &self.bearer_token, body)
            .await?;
        if !response.is_success() {
            return Err(SiteError::ApiResponse { status: response.status, body: response.body });
        }
        parse_reply(&response.body)
    }
}

fn parse_reply(json: &str) -> Result<String, SiteError> {
    let reply: ChatReply = serde_json::from_str(json).map_err(|e| SiteError::ApiParse(e.to_string()))?;
    Ok(reply.response)
}
