use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    Json,
};
use contracts::{ContactDraft, ContactReceipt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ApiError> {
    if state.contact_limiter.check_key(&addr.ip()).is_err() {
        warn!("Contact rate limit hit for {}", addr.ip());
        return Err(ApiError::RateLimited);
    }

    let Json(draft) = payload.map_err(|rejection| {
        debug!("Malformed contact payload: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    // Same rules the browser applied; the client is not trusted.
    let request = draft.validate().map_err(ApiError::Validation)?;

    let receipt = ContactReceipt {
        id: Uuid::new_v4().to_string(),
        received_at: chrono::Utc::now().to_rfc3339(),
    };
    info!(
        submission_id = %receipt.id,
        service = request.service.as_str(),
        budget = request.budget.as_str(),
        has_phone = request.phone.is_some(),
        "Contact submission received"
    );

    state
        .delivery
        .deliver(&receipt.id, &receipt.received_at, &request)
        .await?;

    Ok(Json(receipt))
}
