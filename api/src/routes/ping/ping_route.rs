use axum::Json;

use crate::routes::ping::ping_response::PingResponse;

/// GET /ping
///
/// Always answers `200 {"message":"pong"}`; it touches no state.
pub async fn ping_route() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}
