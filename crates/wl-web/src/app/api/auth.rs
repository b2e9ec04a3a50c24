// Authentication server functions
// These are Dioxus server functions that can be called from client code via RPC

use dioxus::prelude::*;
use wl_types::auth::{LoginRequest, LoginResponse, RawUserPayload, SessionUser};

use crate::error::ApiError;

#[post("/api/auth/login", headers: axum::http::HeaderMap)]
pub async fn login(request: LoginRequest) -> Result<LoginResponse, ApiError> {
    use reqwest::{Method, StatusCode};

    use crate::server::upstream;

    let response = upstream::request(Method::POST, "/auth/login", &[], Some(&request), &headers).await?;

    // Pass the marketplace session cookie through before the body is read.
    upstream::relay_set_cookies(&response);

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
        // Rejected credentials are a normal outcome, not an error.
        let message = upstream::error_message(response).await;
        return Ok(LoginResponse { success: false, message, user: None });
    }
    if !status.is_success() {
        return Err(upstream::status_error(status, response).await);
    }

    let payload: RawUserPayload = response.json().await.map_err(ApiError::contract)?;
    // Missing identity fields are a contract error, distinct from bad
    // credentials; the session is not established.
    let user = SessionUser::from_payload(payload)?;

    Ok(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: Some(user),
    })
}

#[post("/api/auth/logout", headers: axum::http::HeaderMap)]
pub async fn logout() -> Result<(), ApiError> {
    use reqwest::Method;

    use crate::server::upstream;

    // Best-effort: the response body is ignored and a failure status is not
    // an error. The caller clears local state regardless.
    let response = upstream::request::<()>(Method::POST, "/auth/logout", &[], None, &headers).await?;
    upstream::relay_set_cookies(&response);

    Ok(())
}

#[get("/api/auth/current-user", headers: axum::http::HeaderMap)]
pub async fn current_user() -> Result<Option<SessionUser>, ApiError> {
    use reqwest::{Method, StatusCode};

    use crate::server::upstream;

    let response = upstream::request::<()>(Method::GET, "/auth/me", &[], None, &headers).await?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(upstream::status_error(status, response).await);
    }

    let payload: RawUserPayload = response.json().await.map_err(ApiError::contract)?;
    let user = SessionUser::from_payload(payload)?;

    Ok(Some(user))
}
