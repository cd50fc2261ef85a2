//! Demonstration endpoints: a server-timestamped greeting and a JSON echo.

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct HelloResponse {
    message: String,
    note: String,
}

#[derive(Serialize)]
pub struct EchoResponse {
    message: String,
    received: Value,
}

/// GET /api/hello - server-timestamped greeting
pub async fn hello_handler() -> Json<HelloResponse> {
    let server_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    Json(HelloResponse {
        message: format!("Hello from the backend! Server time: {}", server_time),
        note: "This response was generated on the server, not in your browser.".to_string(),
    })
}

/// POST /api/hello - echoes the submitted JSON body unchanged
pub async fn echo_handler(Json(body): Json<Value>) -> Json<EchoResponse> {
    Json(EchoResponse {
        message: "POST request received!".to_string(),
        received: body,
    })
}
