use axum::Json;
use serde_json::json;
use tracing::info;

use crate::handlers::contact_dtos::ContactRequest;

pub async fn submit_contact(
    Json(request): Json<ContactRequest>,
) -> Json<serde_json::Value> {
    info!(
        name = %request.name,
        email = %request.email,
        org = %request.org,
        message = %request.message,
        "CONTACT"
    );

    Json(json!({ "ok": true }))
}
