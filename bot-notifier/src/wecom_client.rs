//! WeCom group-bot client.
//!
//! - `POST {base_url}?key={key}` with a JSON [`OutboundMessage`]
//! - reply `{"errcode": int, "errmsg": string}`; nonzero `errcode` is a failure
//!
//! # Examples
//!
//! ```no_run
//! use bot_notifier::{BotConfig, WeComClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WeComClient::new(BotConfig::new("my-bot-key"))?;
//! client.send_markdown("**deploy** finished").await?;
//! # Ok(()) }
//! ```

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::{debug, instrument, warn};

use crate::Notifier;
use crate::config::BotConfig;
use crate::error_handler::{ConfigError, DeliveryError, Result, make_snippet};
use crate::payload::{NotifierResponse, OutboundMessage};

/// Client bound to one bot. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct WeComClient {
    http: reqwest::Client,
    url: String,
    base_url: String,
}

impl WeComClient {
    /// Validates `cfg` and builds the underlying HTTP client.
    ///
    /// No request timeout is set; the transport default applies.
    ///
    /// # Errors
    /// - [`ConfigError::MissingKey`] / [`ConfigError::InvalidBaseUrl`] from validation
    /// - [`ConfigError::Client`] if the HTTP client cannot be built
    pub fn new(cfg: BotConfig) -> std::result::Result<Self, ConfigError> {
        cfg.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("mr-hook/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Creating WeComClient with base_url={}", cfg.base_url);
        Ok(Self {
            http,
            url: cfg.target_url(),
            base_url: cfg.base_url,
        })
    }

    /// Base URL without the secret key, safe to log.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a plain-text message.
    pub async fn send_text(&self, content: &str) -> Result<()> {
        self.send(&OutboundMessage::text(content)).await
    }

    /// Sends a markdown message.
    pub async fn send_markdown(&self, content: &str) -> Result<()> {
        self.send(&OutboundMessage::markdown(content)).await
    }

    /// Posts one message and interprets the bot reply.
    ///
    /// # Errors
    /// - [`DeliveryError::Transport`] when the request cannot be completed
    /// - [`DeliveryError::HttpStatus`] for non-2xx responses
    /// - [`DeliveryError::Decode`] when the reply is not `{errcode, errmsg}`
    /// - [`DeliveryError::Rejected`] when `errcode != 0`
    #[instrument(skip_all, fields(kind = message.kind()))]
    pub async fn send(&self, message: &OutboundMessage) -> Result<()> {
        debug!("POST {}", self.base_url);
        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            warn!(%status, "bot webhook answered with non-success status");
            return Err(DeliveryError::HttpStatus {
                status,
                snippet: make_snippet(&text),
            });
        }

        let reply: NotifierResponse = serde_json::from_str(&text).map_err(|e| {
            DeliveryError::Decode(format!("{e}; body: {}", make_snippet(&text)))
        })?;

        if !reply.is_ok() {
            warn!(errcode = reply.errcode, errmsg = %reply.errmsg, "bot rejected message");
            return Err(DeliveryError::Rejected {
                errcode: reply.errcode,
                errmsg: reply.errmsg,
            });
        }

        debug!("bot accepted message");
        Ok(())
    }
}

impl Notifier for WeComClient {
    async fn send_text(&self, content: &str) -> Result<()> {
        WeComClient::send_text(self, content).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{RawQuery, State},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::post,
    };
    use serde_json::{Value, json};

    use super::*;

    #[derive(Clone)]
    struct FakeBot {
        status: StatusCode,
        reply: &'static str,
        seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn fake_send(
        State(bot): State<FakeBot>,
        RawQuery(query): RawQuery,
        Json(body): Json<Value>,
    ) -> Response {
        bot.seen.lock().unwrap().push((query, body));
        (bot.status, bot.reply).into_response()
    }

    /// Starts a local stand-in for the bot endpoint and returns its base URL.
    async fn spawn_bot(bot: FakeBot) -> String {
        let app = Router::new()
            .route("/cgi-bin/webhook/send", post(fake_send))
            .with_state(bot);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/cgi-bin/webhook/send")
    }

    fn fake(status: StatusCode, reply: &'static str) -> FakeBot {
        FakeBot {
            status,
            reply,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn client(base: String) -> WeComClient {
        WeComClient::new(BotConfig::new("secret-key").with_base_url(base)).unwrap()
    }

    #[tokio::test]
    async fn text_is_posted_with_key_and_payload() {
        let bot = fake(StatusCode::OK, r#"{"errcode":0,"errmsg":"ok"}"#);
        let seen = bot.seen.clone();
        let c = client(spawn_bot(bot).await);

        c.send_text("hello").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("key=secret-key"));
        assert_eq!(
            seen[0].1,
            json!({"msgtype": "text", "text": {"content": "hello"}})
        );
    }

    #[tokio::test]
    async fn markdown_uses_markdown_payload() {
        let bot = fake(StatusCode::OK, r#"{"errcode":0,"errmsg":"ok"}"#);
        let seen = bot.seen.clone();
        let c = client(spawn_bot(bot).await);

        c.send_markdown("# title").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].1["msgtype"], "markdown");
        assert_eq!(seen[0].1["markdown"]["content"], "# title");
    }

    #[tokio::test]
    async fn nonzero_errcode_is_rejected() {
        let bot = fake(StatusCode::OK, r#"{"errcode":1,"errmsg":"invalid key"}"#);
        let c = client(spawn_bot(bot).await);

        let err = c.send_text("hi").await.unwrap_err();
        assert!(matches!(err, DeliveryError::Rejected { errcode: 1, .. }));
        assert!(err.to_string().contains("invalid key"));
    }

    #[tokio::test]
    async fn malformed_reply_is_a_failure() {
        let bot = fake(StatusCode::OK, "<html>gateway</html>");
        let c = client(spawn_bot(bot).await);

        let err = c.send_text("hi").await.unwrap_err();
        assert!(matches!(err, DeliveryError::Decode(_)));
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let bot = fake(StatusCode::BAD_GATEWAY, "upstream down");
        let c = client(spawn_bot(bot).await);

        let err = c.send_text("hi").await.unwrap_err();
        match err {
            DeliveryError::HttpStatus { status, snippet } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(snippet, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let c = client(format!("http://{addr}/send"));
        let err = c.send_text("hi").await.unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }

    #[test]
    fn base_url_hides_key() {
        let c = client("http://localhost:1/send".into());
        assert_eq!(c.base_url(), "http://localhost:1/send");
        assert!(!c.base_url().contains("secret-key"));
    }
}
