// Payment server functions

use dioxus::prelude::*;

use crate::error::ApiError;

/// Client receipt submission for a booking's payment.
#[post("/api/bookings/{id}/payment", headers: axum::http::HeaderMap)]
pub async fn submit_receipt(id: String, amount: f64, receipt_reference: String) -> Result<(), ApiError> {
    use reqwest::Method;
    use serde::Serialize;

    use crate::server::upstream;

    if amount <= 0.0 {
        return Err(ApiError::validation("amount must be greater than zero"));
    }
    if receipt_reference.trim().is_empty() {
        return Err(ApiError::validation("receipt reference is required"));
    }

    #[derive(Serialize)]
    struct Body {
        amount: f64,
        receipt_reference: String,
    }

    let path = format!("/bookings/{}/payment", id);
    let body = Body { amount, receipt_reference: receipt_reference.trim().to_string() };
    upstream::send_unit(Method::POST, &path, &body, &headers).await
}

#[put("/api/payments/{id}/verify", headers: axum::http::HeaderMap)]
pub async fn verify_payment(id: String) -> Result<(), ApiError> {
    use reqwest::Method;

    use crate::server::upstream;

    let path = format!("/payments/{}/verify", id);
    upstream::send_unit(Method::PUT, &path, &(), &headers).await
}

/// Rejections always carry a reason; an empty one never reaches upstream.
#[put("/api/payments/{id}/reject", headers: axum::http::HeaderMap)]
pub async fn reject_payment(id: String, reason: String) -> Result<(), ApiError> {
    use reqwest::Method;
    use serde::Serialize;

    use crate::server::upstream;

    if reason.trim().is_empty() {
        return Err(ApiError::validation("rejection reason is required"));
    }

    #[derive(Serialize)]
    struct Body {
        reason: String,
    }

    let path = format!("/payments/{}/reject", id);
    upstream::send_unit(Method::PUT, &path, &Body { reason: reason.trim().to_string() }, &headers).await
}
