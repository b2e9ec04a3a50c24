//! HTTP client for the external marketplace API.
//!
//! Server functions hand their incoming header map over so the browser's
//! session cookie travels with every upstream call; login/logout relay any
//! upstream `Set-Cookie` back to the browser. All failures are mapped into
//! the [`ApiError`] taxonomy — timeouts get their own kind so the UI can
//! say so instead of spinning.

use std::sync::OnceLock;

use axum::http::HeaderMap;
use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::config::UpstreamConfig;
use crate::error::ApiError;

static CONFIG: OnceLock<UpstreamConfig> = OnceLock::new();
static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

fn config() -> &'static UpstreamConfig {
    CONFIG.get_or_init(UpstreamConfig::from_env)
}

fn client() -> &'static reqwest::Client {
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(config().timeout)
            .build()
            .expect("upstream http client construction")
    })
}

/// Error body shape used by the marketplace API.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Send a request upstream, forwarding the browser's cookie header. Only
/// transport-level failures are mapped here; callers decide what each
/// status means.
pub async fn request<B: Serialize + ?Sized>(
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&B>,
    headers: &HeaderMap,
) -> Result<reqwest::Response, ApiError> {
    let url = format!("{}{}", config().base_url, path);

    let mut builder = client().request(method, &url);
    if !query.is_empty() {
        builder = builder.query(query);
    }
    if let Some(cookie) = headers.get(header::COOKIE).and_then(|value| value.to_str().ok()) {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(body) = body {
        builder = builder.json(body);
    }

    builder.send().await.map_err(|err| {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            tracing::warn!(error = %err, %url, "upstream request failed");
            ApiError::upstream(err)
        }
    })
}

/// GET `path` and decode a JSON body, mapping non-success statuses.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
    headers: &HeaderMap,
) -> Result<T, ApiError> {
    let response = request::<()>(Method::GET, path, query, None, headers).await?;
    expect_json(response).await
}

/// Send `body` with `method` and decode a JSON response.
pub async fn send_json<T: DeserializeOwned, B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
    headers: &HeaderMap,
) -> Result<T, ApiError> {
    let response = request(method, path, &[], Some(body), headers).await?;
    expect_json(response).await
}

/// Send `body` with `method`, expecting no meaningful response body.
pub async fn send_unit<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
    headers: &HeaderMap,
) -> Result<(), ApiError> {
    let response = request(method, path, &[], Some(body), headers).await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(status_error(status, response).await)
    }
}

/// Decode a 2xx JSON body; anything else becomes the matching error kind.
pub async fn expect_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, response).await);
    }
    response.json::<T>().await.map_err(ApiError::contract)
}

/// Map a non-success upstream status to an [`ApiError`], pulling the
/// `{message}` body through when there is one.
pub async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    let message = error_message(response).await;
    match status {
        StatusCode::BAD_REQUEST => ApiError::validation(message),
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::forbidden(message),
        StatusCode::NOT_FOUND => ApiError::not_found(message),
        StatusCode::GATEWAY_TIMEOUT => ApiError::Timeout,
        _ => ApiError::upstream(format!("{}: {}", status, message)),
    }
}

/// Best-effort extraction of the `{message}` error body.
pub async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("upstream returned {}", status))
}

/// Relay any upstream `Set-Cookie` headers onto our own response so the
/// browser holds the marketplace session cookie. Used by login/logout.
pub fn relay_set_cookies(upstream: &reqwest::Response) {
    use dioxus::prelude::server_context;

    let context = server_context();
    let mut parts = context.response_parts_mut();
    for value in upstream.headers().get_all(header::SET_COOKIE) {
        if let Ok(value) = axum::http::HeaderValue::from_bytes(value.as_bytes()) {
            parts.headers.append(axum::http::header::SET_COOKIE, value);
        }
    }
}
