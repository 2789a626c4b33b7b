//! Error types shared by configuration and the network clients.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Errors produced while loading configuration or talking to the remote
/// contact/chat services.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required setting is absent or blank.
    #[error("missing setting: env var {var} not set")]
    MissingSetting { var: String },

    /// The HTTP request never produced a response (DNS, refused, reset).
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The endpoint answered with a non-success status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl SiteError {
    /// Stable, grepable code for log fields.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingSetting { .. } => "E_MISSING_SETTING",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}
