//! Convenience hooks over the session context.

use dioxus::prelude::ReadableExt;
use wl_types::roles::{dashboard_path, ApprovalStatus, UserRole};

use super::context::use_session;

/// Current role, if any
/// Delegates to SessionState::role()
pub fn use_role() -> Option<UserRole> {
    let session = use_session();
    let state = session.read();
    state.role()
}

/// Current planner approval status, if any
/// Delegates to SessionState::approval()
pub fn use_approval() -> Option<ApprovalStatus> {
    let session = use_session();
    let state = session.read();
    state.approval()
}

/// Whether the current user is an approved planner
/// Delegates to SessionState::is_planner_approved()
pub fn use_is_planner_approved() -> bool {
    let session = use_session();
    let state = session.read();
    state.is_planner_approved()
}

/// Dashboard path for the current role (admin path when no role is known)
pub fn use_dashboard_path() -> &'static str {
    dashboard_path(use_role())
}
