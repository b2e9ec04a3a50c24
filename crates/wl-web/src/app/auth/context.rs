//! Session store: single source of truth for who is logged in.
//!
//! The state lives in a root-level context signal with a defined lifecycle:
//! installed at app start, restored from `GET /auth/me` on mount, mutated
//! only through the actions in this module, cleared on logout. Nothing else
//! may write to it.

use dioxus::prelude::*;
use wl_types::auth::{LoginRequest, SessionUser};
use wl_types::roles::{self, ApprovalStatus, UserRole};

use crate::app::{api, storage};

/// Authentication state
#[derive(Clone, PartialEq, Debug)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    /// Store-level error from the last login attempt.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl SessionState {
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn approval(&self) -> Option<ApprovalStatus> {
        self.user.as_ref().and_then(SessionUser::approval)
    }

    /// Empty string when logged out.
    pub fn initials(&self) -> String {
        self.user.as_ref().map(SessionUser::initials).unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        self.user.as_ref().map(SessionUser::full_name).unwrap_or_default()
    }

    pub fn is_planner_approved(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_planner_approved)
    }
}

/// Initialize the session provider and restore any existing session.
pub fn use_session_provider() -> Signal<SessionState> {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    // Restore on mount; same normalization as login.
    use_effect(move || {
        spawn(async move {
            restore(session).await;
        });
    });

    session
}

/// Get current session state from context
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// `GET /auth/me`. Any non-success response clears the session rather than
/// leaving stale identity data behind.
async fn restore(mut session: Signal<SessionState>) {
    match api::auth::current_user().await {
        Ok(user) => {
            session.set(SessionState { user, loading: false, error: None });
        }
        Err(_) => {
            session.set(SessionState { user: None, loading: false, error: None });
        }
    }
}

/// Attempt a login. On success the session is populated and the post-login
/// target is returned: the stashed return path if one survived, otherwise
/// the role's own dashboard.
///
/// Rejected credentials and upstream contract errors both land in
/// `session.error` (with distinct messages) without touching the session.
pub async fn sign_in(mut session: Signal<SessionState>, request: LoginRequest) -> Option<String> {
    session.write().error = None;

    match api::auth::login(request).await {
        Ok(response) if response.success => {
            let Some(user) = response.user else {
                session.write().error = Some("login succeeded but no user was returned".to_string());
                return None;
            };
            let target = storage::take_return_path()
                .unwrap_or_else(|| user.role.capabilities().dashboard_path.to_string());
            session.set(SessionState { user: Some(user), loading: false, error: None });
            Some(target)
        }
        Ok(response) => {
            session.write().error = Some(response.message);
            None
        }
        Err(err) => {
            session.write().error = Some(err.to_string());
            None
        }
    }
}

/// Log out and return the redirect target.
///
/// The target is computed from the role held BEFORE the session is cleared
/// (clients land on the public home page, staff on login). The server
/// notification is best-effort; the local session and any staged booking
/// draft are cleared, and the caller redirects, regardless of the outcome.
pub async fn sign_out(mut session: Signal<SessionState>) -> &'static str {
    let target = roles::logout_target(session.peek().role());

    if let Err(err) = api::auth::logout().await {
        tracing::warn!(error = %err, "server logout failed; clearing local session anyway");
    }

    storage::clear_booking_draft();
    session.set(SessionState { user: None, loading: false, error: None });

    target
}
