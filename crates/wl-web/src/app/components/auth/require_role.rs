use dioxus::prelude::*;
use wl_types::access::{evaluate, AccessDecision, RouteAccess};

use crate::app::{auth::context::use_session, routes::Routes, storage};

/// Route guard component that enforces a declarative access rule.
///
/// Defers while the session is restoring, redirects unauthenticated
/// visitors to /login (stashing the requested location for a post-login
/// return), shows a locked state to unapproved planners on approval-gated
/// screens, and shows an access-denied state with a way out when the role
/// requirement is not met. This guard is the actual boundary — navigation
/// entries may additionally render disabled, but that is advisory only.
///
/// # Examples
///
/// ```text
/// // Role-gated page body
/// rsx! { Layout { RequireRole { rule: ADMIN_ONLY, AdminPanel {} } } }
///
/// // Planner screen that also requires an approved application
/// rsx! { Layout { RequireRole { rule: PLANNER_APPROVED, PlannerBookings {} } } }
/// ```
#[component]
pub fn RequireRole(
    /// Rule declared at route-registration time.
    rule: RouteAccess,

    /// Page content to show when access is granted.
    children: Element,
) -> Element {
    let session = use_session();
    let nav = navigator();
    let route: Routes = use_route();

    // Redirect to login if not authenticated, keeping the requested
    // location for the post-login return. Best effort: losing it is
    // non-fatal.
    use_effect(move || {
        let state = session.read();
        if matches!(evaluate(&rule, state.loading, state.user.as_ref()), AccessDecision::RedirectToLogin) {
            storage::stash_return_path(&route.to_string());
            nav.push(Routes::LoginPage {});
        }
    });

    let decision = {
        let state = session.read();
        evaluate(&rule, state.loading, state.user.as_ref())
    };

    match decision {
        AccessDecision::Defer => rsx! {
            div { class: "flex items-center justify-center min-h-screen",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
        AccessDecision::RedirectToLogin => rsx! { div {} }, // Will redirect via effect
        AccessDecision::Locked => rsx! {
            div { class: "hero min-h-[60vh] bg-base-200",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-4xl font-bold", "Pending Approval" }
                        p { class: "py-6",
                            "This area unlocks once your planner application has been approved."
                        }
                        Link { to: Routes::PlannerDashboardPage {}, class: "btn btn-primary", "Back to Dashboard" }
                    }
                }
            }
        },
        AccessDecision::Denied { own_dashboard } => rsx! {
            div { class: "hero min-h-[60vh] bg-base-200",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "Access Denied" }
                        p { class: "py-6", "You don't have permission to access this page." }
                        div { class: "flex gap-2 justify-center",
                            Link { to: own_dashboard, class: "btn btn-primary", "My Dashboard" }
                            Link { to: Routes::HomePage {}, class: "btn btn-ghost", "Go Home" }
                        }
                    }
                }
            }
        },
        AccessDecision::Grant => rsx! { {children} },
    }
}
