//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Built once at startup and handed to the network clients, so no component
//! reads endpoints or tokens from module-level state. `from_vars` takes any
//! lookup function, which keeps tests away from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

use crate::error::SiteError;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.roboticconcrete.com/contact";
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.roboticconcrete.com/chat";
pub const DEFAULT_ANIMATION_OFFSET: u32 = 100;
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Contact form endpoint.
    pub api_endpoint: String,
    /// Bearer token for the contact endpoint.
    pub bearer_token: String,
    /// Chat endpoint.
    pub chat_endpoint: String,
    /// Bearer token for the chat endpoint.
    pub chat_bearer_token: String,
    /// Bottom inset, in pixels, before a section counts as revealed.
    pub animation_offset: u32,
    /// Smooth-scroll duration.
    pub scroll_duration: Duration,
}

impl SiteConfig {
    /// Apply a `.env` file if one exists, then read the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required token is missing.
    pub fn load() -> Result<Self, SiteError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file applied");
        }
        Self::from_env()
    }

    /// Build typed site config from environment variables.
    ///
    /// Required:
    /// - `SITE_BEARER_TOKEN`
    /// - `SITE_CHAT_BEARER_TOKEN`
    ///
    /// Optional:
    /// - `SITE_API_ENDPOINT`: default contact endpoint
    /// - `SITE_CHAT_ENDPOINT`: default chat endpoint
    /// - `SITE_ANIMATION_OFFSET`: default 100
    /// - `SITE_SCROLL_DURATION_MS`: default 800
    ///
    /// # Errors
    ///
    /// Returns an error if a required token is missing.
    pub fn from_env() -> Result<Self, SiteError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingSetting`] if a required token is absent or blank.
    pub fn from_vars<F>(lookup: F) -> Result<Self, SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_endpoint = endpoint(&lookup, "SITE_API_ENDPOINT", DEFAULT_API_ENDPOINT);
        let chat_endpoint = endpoint(&lookup, "SITE_CHAT_ENDPOINT", DEFAULT_CHAT_ENDPOINT);
        let bearer_token = required(&lookup, "SITE_BEARER_TOKEN")?;
        let chat_bearer_token = required(&lookup, "SITE_CHAT_BEARER_TOKEN")?;
        let animation_offset = parse_or(&lookup, "SITE_ANIMATION_OFFSET", DEFAULT_ANIMATION_OFFSET);
        let scroll_duration =
            Duration::from_millis(parse_or(&lookup, "SITE_SCROLL_DURATION_MS", DEFAULT_SCROLL_DURATION_MS));

        Ok(Self { api_endpoint, bearer_token, chat_endpoint, chat_bearer_token, animation_offset, scroll_duration })
    }
}

fn endpoint<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
        .trim()
        .trim_end_matches('/')
        .to_owned()
}

fn required<F>(lookup: &F, key: &str) -> Result<String, SiteError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SiteError::MissingSetting { var: key.to_owned() })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return default;
    };
    parse_setting(key, &raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, code = e.error_code(), "using default for unparseable setting");
        default
    })
}

/// Parse one present setting.
fn parse_setting<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, SiteError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| SiteError::ConfigParse(format!("{key}={raw:?}")))
}
