use dioxus::prelude::*;
use wl_types::roles::UserRole;

use crate::app::auth::hooks::use_role;

/// Role-based conditional rendering for page fragments.
///
/// Shows children only when the current role is in `roles`, otherwise the
/// fallback (or nothing). This is advisory UI layered over the real
/// boundary — [`super::RequireRole`] guards the routes themselves.
///
/// # Examples
///
/// ```text
/// // Verify/reject buttons only make sense for planners
/// rsx! {
///     RoleGate {
///         roles: vec![UserRole::Planner, UserRole::Admin],
///         button { class: "btn btn-success btn-sm", "Verify" }
///     }
/// }
/// ```
#[component]
pub fn RoleGate(
    /// Roles allowed to see the children.
    roles: Vec<UserRole>,

    /// Content to show for everyone else.
    fallback: Option<Element>,

    /// Content to show for the allowed roles.
    children: Element,
) -> Element {
    let authorized = use_role().is_some_and(|role| roles.contains(&role));

    rsx! {
        if authorized {
            {children}
        } else if let Some(fallback_element) = fallback {
            {fallback_element}
        }
    }
}
