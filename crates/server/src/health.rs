use axum::Json;
use http::StatusCode;

#[derive(Debug, serde::Serialize)]
pub(crate) struct HealthState {
    status: &'static str,
    server: &'static str,
    version: &'static str,
}

/// Handles health check requests and returns the current health status of the server.
pub(crate) async fn health() -> (StatusCode, Json<HealthState>) {
    let state = HealthState {
        status: "ok",
        server: mcp::SERVER_NAME,
        version: mcp::SERVER_VERSION,
    };

    (StatusCode::OK, Json(state))
}
