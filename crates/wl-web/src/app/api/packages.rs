// Package catalogue server functions

use dioxus::prelude::*;
use wl_types::packages::PackageInfo;

use crate::error::ApiError;

#[get("/api/packages", headers: axum::http::HeaderMap)]
pub async fn list_packages(search: Option<String>) -> Result<Vec<PackageInfo>, ApiError> {
    use serde::Deserialize;

    use crate::server::upstream;

    #[derive(Deserialize)]
    struct Envelope {
        packages: Vec<PackageInfo>,
    }

    let mut query = Vec::new();
    if let Some(term) = search.as_deref().map(str::trim).filter(|term| !term.is_empty()) {
        query.push(("search", term.to_string()));
    }

    let envelope: Envelope = upstream::get_json("/packages", &query, &headers).await?;
    Ok(envelope.packages)
}
