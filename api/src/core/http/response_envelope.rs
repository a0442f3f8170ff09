use serde::Serialize;

/// `{"status": "ok"}`
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// `{"error": "<reason>"}`, the body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
