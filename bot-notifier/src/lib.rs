//! Outbound side of the relay: a thin client for WeCom group-bot webhooks.
//!
//! A bot is addressed by `<base_url>?key=<key>`. Every send is a single JSON
//! POST; the bot answers `{"errcode": 0, "errmsg": "ok"}` on success and a
//! nonzero `errcode` otherwise.

pub mod config;
pub mod error_handler;
pub mod payload;
pub mod wecom_client;

pub use config::{BotConfig, DEFAULT_WEBHOOK_URL};
pub use error_handler::{ConfigError, DeliveryError, Result};
pub use payload::{NotifierResponse, OutboundMessage};
pub use wecom_client::WeComClient;

/// Anything that can deliver a plain-text chat message.
///
/// The event dispatcher only sees this seam, so the concrete bot client is
/// injected by whoever builds the application.
pub trait Notifier: Send + Sync {
    /// Delivers `content` as a plain-text message.
    fn send_text(&self, content: &str) -> impl Future<Output = Result<()>> + Send;
}
