use serde::Serialize;

/// Liveness reply.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}
