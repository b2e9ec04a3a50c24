// Admin (BPLO) server functions

use dioxus::prelude::*;
use wl_types::auth::PlannerApplication;
use wl_types::roles::ApprovalStatus;

use crate::error::ApiError;

#[get("/api/admin/planners", headers: axum::http::HeaderMap)]
pub async fn list_planner_applications(
    status: Option<ApprovalStatus>,
) -> Result<Vec<PlannerApplication>, ApiError> {
    use serde::Deserialize;

    use crate::server::upstream;

    #[derive(Deserialize)]
    struct Envelope {
        planners: Vec<PlannerApplication>,
    }

    let mut query = Vec::new();
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }

    let envelope: Envelope = upstream::get_json("/admin/planners", &query, &headers).await?;
    Ok(envelope.planners)
}

/// Approve or reject a planner application. A rejection always carries a
/// reason.
#[put("/api/admin/planners/{id}/approval", headers: axum::http::HeaderMap)]
pub async fn set_planner_approval(
    id: String,
    status: ApprovalStatus,
    reason: Option<String>,
) -> Result<(), ApiError> {
    use reqwest::Method;
    use serde::Serialize;

    use crate::server::upstream;

    let reason = reason.map(|reason| reason.trim().to_string()).filter(|reason| !reason.is_empty());
    if status == ApprovalStatus::Rejected && reason.is_none() {
        return Err(ApiError::validation("rejection reason is required"));
    }

    #[derive(Serialize)]
    struct Body {
        status: ApprovalStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    }

    let path = format!("/admin/planners/{}/approval", id);
    upstream::send_unit(Method::PUT, &path, &Body { status, reason }, &headers).await
}
