//! Contact endpoint client.

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use std::sync::Arc;

use super::transport::JsonPost;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::form::FormSubmission;

#[derive(Clone)]
pub struct ContactClient {
    transport: Arc<dyn JsonPost>,
    endpoint: String,
    bearer_token: String,
}

impl ContactClient {
    #[must_use]
    pub fn new(transport: Arc<dyn JsonPost>, endpoint: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into(), bearer_token: bearer_token.into() }
    }

    #[must_use]
    pub fn from_config(transport: Arc<dyn JsonPost>, config: &SiteConfig) -> Self {
        Self::new(transport, config.api_endpoint.clone(), config.bearer_token.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one submission. Any 2xx counts as delivered; the body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::ApiRequest`] when no response arrives and
    /// [`SiteError::ApiResponse`] for any non-2xx status.
    pub async fn submit(&self, submission: &FormSubmission) -> Result<(), SiteError> {
        let body = serde_json::to_value(submission).map_err(|e| SiteError::ApiParse(e.to_string()))?;
        let response = self
            .transport
            .post_json(&self.endpoint, &self.bearer_token, body)
            .await?;
        if !response.is_success() {
            return Err(SiteError::ApiResponse { status: response.status, body: response.body });
        }
        Ok(())
    }
}
