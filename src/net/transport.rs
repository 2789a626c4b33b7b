//! Bearer-authorized JSON POST.
//!
//! DESIGN
//! ======
//! The `JsonPost` trait is the seam between the controllers and the network,
//! so tests swap in recording mocks. `HttpTransport` is the `reqwest`
//! implementation. No timeout, retry, or backoff is configured here; the
//! transport defaults apply.

use async_trait::async_trait;

use super::types::RawResponse;
use crate::error::SiteError;

/// One JSON POST with an `Authorization: Bearer` header.
#[async_trait]
pub trait JsonPost: Send + Sync {
    /// Send `body` to `url`. A response with any status is `Ok`; only
    /// failures to obtain a response are `Err`.
    async fn post_json(&self, url: &str, bearer: &str, body: serde_json::Value) -> Result<RawResponse, SiteError>;
}

pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new() -> Result<Self, SiteError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SiteError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl JsonPost for HttpTransport {
    async fn post_json(&self, url: &str, bearer: &str, body: serde_json::Value) -> Result<RawResponse, SiteError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(bearer)
            .json(&body)
            .send()
            .await
            .map_err(|e| SiteError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SiteError::ApiRequest(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
