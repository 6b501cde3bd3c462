//! Server-side settings for the contact relay.
//!
//! Read from the environment:
//! - `RESEND_API_KEY`: email provider API key (required)
//! - `CONTACT_TO`: address that receives submissions (required)
//! - `CONTACT_FROM`: sender address (default: "onboarding@resend.dev")
//! - `RESEND_API_URL`: provider base URL (default: "https://api.resend.com")

use thiserror::Error;

pub const DEFAULT_FROM: &str = "onboarding@resend.dev";
pub const DEFAULT_API_URL: &str = "https://api.resend.com";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub api_key: String,
    pub api_url: String,
    pub from: String,
    pub to: String,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            api_key: required("RESEND_API_KEY")?,
            to: required("CONTACT_TO")?,
            from: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_FROM.to_string()),
            api_url: get("RESEND_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}
