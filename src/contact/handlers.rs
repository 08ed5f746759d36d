use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use super::types::{ContactMessage, SubmitResponse};
use crate::delivery::client::DeliveryClient;
use crate::validation::rules::validate_contact;

/// Shown for any delivery failure; the cause stays in the logs.
const DELIVERY_FAILED_TEXT: &str = "Something went wrong, please try again later";

pub async fn handle_submit_contact(
    Extension(delivery): Extension<Arc<DeliveryClient>>,
    Json(msg): Json<ContactMessage>,
) -> (StatusCode, Json<SubmitResponse>) {
    if let Err(rule) = validate_contact(&msg) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmitResponse {
                success: false,
                field: Some(rule.field().to_string()),
                error: Some(rule.message().to_string()),
            }),
        );
    }

    match delivery.deliver(&msg).await {
        Ok(receipt) => {
            tracing::info!("Relayed contact message upstream ({})", receipt.status);
            (
                StatusCode::OK,
                Json(SubmitResponse {
                    success: true,
                    field: None,
                    error: None,
                }),
            )
        }
        Err(err) => {
            tracing::error!("Failed to relay contact message: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(SubmitResponse {
                    success: false,
                    field: None,
                    error: Some(DELIVERY_FAILED_TEXT.to_string()),
                }),
            )
        }
    }
}
