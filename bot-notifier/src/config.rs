//! Bot client configuration.

use crate::error_handler::ConfigError;

/// Public WeCom group-bot endpoint.
pub const DEFAULT_WEBHOOK_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";

/// Settings needed to reach one group bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Webhook base URL without query string.
    pub base_url: String,
    /// Secret bot key appended as `?key=`.
    pub key: String,
}

impl BotConfig {
    /// Config for the public WeCom endpoint.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_WEBHOOK_URL.to_string(),
            key: key.into(),
        }
    }

    /// Overrides the base URL (self-hosted gateways, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Checks the key is present and the base URL looks like HTTP(S).
    ///
    /// # Errors
    /// - [`ConfigError::MissingKey`] if the key is empty or whitespace
    /// - [`ConfigError::InvalidBaseUrl`] if the URL has no http/https scheme
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.trim().is_empty() {
            return Err(ConfigError::MissingKey);
        }
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Full target URL, key included.
    pub fn target_url(&self) -> String {
        format!(
            "{}?key={}",
            self.base_url.trim().trim_end_matches('/'),
            urlencoding::encode(self.key.trim())
        )
    }
}
