//! Webhook handler.
//!
//! Events are acknowledged and logged only. Their authenticity is not
//! checked, so nothing here may act on an event's contents.

use axum::Json;
use serde::Serialize;

/// Webhook response.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Whether the webhook was received.
    pub received: bool,
}

/// Receive a payment event.
pub async fn webhook(body: String) -> Json<WebhookResponse> {
    let event = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("event").and_then(|e| e.as_str()).map(str::to_string));

    tracing::info!(
        event = ?event,
        bytes = body.len(),
        "Received webhook (signature not verified)"
    );

    Json(WebhookResponse { received: true })
}
