//! Unified error handling for `bot-notifier`.
//!
//! [`DeliveryError`] is the single failure kind a send can produce. Its
//! variants only differ in what went wrong on the wire, so callers can treat
//! them uniformly and still log a precise message. [`ConfigError`] covers
//! startup-time validation of [`crate::BotConfig`].

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Result alias for delivery operations.
pub type Result<T> = std::result::Result<T, DeliveryError>;

/* ------------------------------------------------------------------------- */
/* Delivery errors                                                           */
/* ------------------------------------------------------------------------- */

/// A message could not be delivered to the bot.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport failure: connect, DNS, TLS, reset, timeout.
    #[error("bot webhook transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("bot webhook returned HTTP {status}: {snippet}")]
    HttpStatus {
        /// HTTP status code.
        status: StatusCode,
        /// Short, trimmed snippet of the response body.
        snippet: String,
    },

    /// Response body was not the expected `{errcode, errmsg}` shape.
    #[error("bot webhook response could not be decoded: {0}")]
    Decode(String),

    /// Bot accepted the request but reported a nonzero `errcode`.
    #[error("rejected by bot webhook: errcode {errcode}, errmsg: {errmsg}")]
    Rejected {
        /// Nonzero code from the bot.
        errcode: i64,
        /// Human-readable reason from the bot.
        errmsg: String,
    },
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Bot configuration is unusable.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bot key is missing or blank.
    #[error("bot key must not be empty")]
    MissingKey,

    /// The base URL does not start with `http://` or `https://`.
    #[error("invalid bot webhook url: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Trims a response body down to something fit for an error message.
pub(crate) fn make_snippet(body: &str) -> String {
    let trimmed = body.trim();
    let mut snippet: String = trimmed.chars().take(240).collect();
    if trimmed.chars().count() > 240 {
        snippet.push('…');
    }
    snippet
}
