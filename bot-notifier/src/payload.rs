//! Wire shapes of the group-bot webhook.

use serde::{Deserialize, Serialize};

/// Body of one outbound bot message, tagged by `msgtype`.
///
/// Serialises to `{"msgtype":"text","text":{"content":"..."}}` or
/// `{"msgtype":"markdown","markdown":{"content":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text { text: Content },
    Markdown { markdown: Content },
}

/// Inner `{ "content": ... }` object shared by text and markdown messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub content: String,
}

impl OutboundMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            text: Content {
                content: content.into(),
            },
        }
    }

    pub fn markdown(content: impl Into<String>) -> Self {
        Self::Markdown {
            markdown: Content {
                content: content.into(),
            },
        }
    }

    /// Wire name of the message kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Markdown { .. } => "markdown",
        }
    }
}

/// Bot reply. `errcode == 0` means the message was accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierResponse {
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl NotifierResponse {
    pub fn is_ok(&self) -> bool {
        self.errcode == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_payload_shape() {
        let v = serde_json::to_value(OutboundMessage::text("hello")).unwrap();
        assert_eq!(v, json!({"msgtype": "text", "text": {"content": "hello"}}));
    }

    #[test]
    fn markdown_payload_shape() {
        let v = serde_json::to_value(OutboundMessage::markdown("**hi**")).unwrap();
        assert_eq!(
            v,
            json!({"msgtype": "markdown", "markdown": {"content": "**hi**"}})
        );
    }

    #[test]
    fn response_without_errmsg_decodes() {
        let r: NotifierResponse = serde_json::from_str(r#"{"errcode":0}"#).unwrap();
        assert!(r.is_ok());
        assert!(r.errmsg.is_empty());
    }
}
