//! Declarative per-route access rules and their evaluation.
//!
//! A rule is attached to a screen at route-registration time and never
//! mutated. Evaluation is a pure function of the rule and the current
//! session, so every combination is unit-testable; the web layer only
//! renders whatever decision falls out.

use crate::auth::SessionUser;
use crate::roles::{dashboard_path, UserRole};

/// Access requirement attached to a navigable screen.
///
/// Neither field set means the route is public. When both are set, access is
/// granted if EITHER is satisfied — the looser of the two, never an AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteAccess {
    /// Exact role match.
    pub required_role: Option<UserRole>,
    /// Membership check, satisfied independently of `required_role`.
    pub allowed_roles: Option<&'static [UserRole]>,
    /// Planner screens that stay locked until the application is approved.
    pub planner_approval: bool,
}

impl RouteAccess {
    pub const PUBLIC: RouteAccess = RouteAccess {
        required_role: None,
        allowed_roles: None,
        planner_approval: false,
    };

    pub const fn role(required: UserRole) -> Self {
        RouteAccess {
            required_role: Some(required),
            allowed_roles: None,
            planner_approval: false,
        }
    }

    pub const fn any_of(roles: &'static [UserRole]) -> Self {
        RouteAccess {
            required_role: None,
            allowed_roles: Some(roles),
            planner_approval: false,
        }
    }

    /// Planner-only route that additionally requires an approved application.
    pub const fn approved_planner() -> Self {
        RouteAccess {
            required_role: Some(UserRole::Planner),
            allowed_roles: None,
            planner_approval: true,
        }
    }

    pub fn is_public(&self) -> bool {
        self.required_role.is_none() && self.allowed_roles.is_none()
    }

    /// Whether `role` satisfies the declared requirement.
    pub fn permits(&self, role: UserRole) -> bool {
        if self.is_public() {
            return true;
        }
        self.required_role == Some(role)
            || self.allowed_roles.is_some_and(|roles| roles.contains(&role))
    }
}

/// Outcome of evaluating a rule against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session restore still in flight; render a neutral loading state. Not
    /// a denial.
    Defer,
    /// No authenticated session; send the caller to the public entry point.
    RedirectToLogin,
    /// Authenticated but the role requirement is not met. Carries the
    /// caller's own dashboard path so the denied screen can offer it.
    Denied { own_dashboard: &'static str },
    /// Planner route gated behind an approval that has not been granted.
    Locked,
    Grant,
}

/// Evaluate `rule` for the current session, in the contract's order:
/// loading defers, missing sessions redirect, unmet role requirements deny,
/// unapproved planners are locked out of approval-gated screens, and
/// everything else is granted.
pub fn evaluate(rule: &RouteAccess, loading: bool, user: Option<&SessionUser>) -> AccessDecision {
    if loading {
        return AccessDecision::Defer;
    }

    // Public routes are granted even without a session; they are only run
    // through the guard when a screen opts in for uniformity.
    let Some(user) = user else {
        if rule.is_public() {
            return AccessDecision::Grant;
        }
        return AccessDecision::RedirectToLogin;
    };

    if !rule.permits(user.role) {
        return AccessDecision::Denied {
            own_dashboard: dashboard_path(Some(user.role)),
        };
    }

    if rule.planner_approval && user.role == UserRole::Planner && !user.is_planner_approved() {
        return AccessDecision::Locked;
    }

    AccessDecision::Grant
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
