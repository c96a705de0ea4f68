use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::FieldErrors;
use serde_json::json;
use thiserror::Error;

use crate::mail::DeliveryError;

/// Every failure an API handler can return. Rendered as
/// `{"error": "..."}` with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Please correct the highlighted fields")]
    Validation(FieldErrors),
    #[error("Too many messages. Please try again in a minute.")]
    RateLimited,
    #[error("We could not deliver your message. Please try again later.")]
    Delivery(#[from] DeliveryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(fields) => json!({"error": self.to_string(), "fields": fields}),
            ApiError::Delivery(e) => {
                tracing::error!("Failed to deliver contact submission: {}", e);
                json!({"error": self.to_string()})
            }
            _ => json!({"error": self.to_string()}),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Field;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("Case study").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Validation(FieldErrors::default()).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("Case study").to_string(), "Case study not found");
    }

    #[tokio::test]
    async fn test_validation_body_carries_fields() {
        let mut fields = FieldErrors::default();
        fields.insert(Field::Email, "Invalid email address");
        let response = ApiError::Validation(fields).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Please correct the highlighted fields");
        assert_eq!(body["fields"]["email"], "Invalid email address");
    }
}
