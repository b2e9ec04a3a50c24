//! User roles, planner approval status, and the per-role capability table.
//!
//! The capability table is the single source of truth for everything the UI
//! keys off a role: dashboard path, logout target, badge styling, and the
//! navigation entries the role is offered. Guards, the navbar, and the
//! session store all read from here instead of carrying their own switches.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Planner,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Planner => "planner",
            UserRole::Admin => "admin",
        }
    }

    /// Look up this role's entry in the capability table.
    pub fn capabilities(&self) -> &'static RoleCapabilities {
        match self {
            UserRole::Client => &CLIENT_CAPABILITIES,
            UserRole::Planner => &PLANNER_CAPABILITIES,
            UserRole::Admin => &ADMIN_CAPABILITIES,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(UserRole::Client),
            "planner" => Ok(UserRole::Planner),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Planner application state. Only meaningful for [`UserRole::Planner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {}", s)),
        }
    }
}

/// A single navigation entry offered to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    /// Rendered but inert (with a lock indicator) until the planner
    /// application is approved. Advisory only; the route guard enforces the
    /// same gate independently.
    pub approval_gated: bool,
}

/// Everything the UI keys off a role, in one place.
#[derive(Debug, PartialEq, Eq)]
pub struct RoleCapabilities {
    pub role: UserRole,
    pub label: &'static str,
    pub badge_class: &'static str,
    pub dashboard_path: &'static str,
    /// Where `logout()` lands this role.
    pub logout_target: &'static str,
    pub nav: &'static [NavEntry],
}

static CLIENT_CAPABILITIES: RoleCapabilities = RoleCapabilities {
    role: UserRole::Client,
    label: "Client",
    badge_class: "badge-primary",
    dashboard_path: "/dashboard",
    logout_target: "/",
    nav: &[
        NavEntry { label: "Dashboard", path: "/dashboard", approval_gated: false },
        NavEntry { label: "My Bookings", path: "/bookings", approval_gated: false },
        NavEntry { label: "Packages", path: "/packages", approval_gated: false },
    ],
};

static PLANNER_CAPABILITIES: RoleCapabilities = RoleCapabilities {
    role: UserRole::Planner,
    label: "Planner",
    badge_class: "badge-secondary",
    dashboard_path: "/planner",
    logout_target: "/login",
    nav: &[
        NavEntry { label: "Dashboard", path: "/planner", approval_gated: false },
        NavEntry { label: "Bookings", path: "/planner/bookings", approval_gated: true },
        NavEntry { label: "Payments", path: "/planner/payments", approval_gated: true },
    ],
};

static ADMIN_CAPABILITIES: RoleCapabilities = RoleCapabilities {
    role: UserRole::Admin,
    label: "Admin",
    badge_class: "badge-accent",
    dashboard_path: "/admin",
    logout_target: "/login",
    nav: &[
        NavEntry { label: "Dashboard", path: "/admin", approval_gated: false },
        NavEntry { label: "Planner Approvals", path: "/admin/planners", approval_gated: false },
    ],
};

/// Dashboard path for a role; the admin path doubles as the fallback when no
/// role is known.
pub fn dashboard_path(role: Option<UserRole>) -> &'static str {
    match role {
        Some(role) => role.capabilities().dashboard_path,
        None => ADMIN_CAPABILITIES.dashboard_path,
    }
}

/// Logout redirect target, computed from the role held before the session is
/// cleared. Clients land on the public home page; staff roles land on login.
pub fn logout_target(role: Option<UserRole>) -> &'static str {
    match role {
        Some(role) => role.capabilities().logout_target,
        None => "/login",
    }
}

/// Render state of a navigation entry for the given role/approval pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Enabled,
    /// Shown with a lock indicator and no navigation.
    Locked,
}

pub fn nav_state(entry: &NavEntry, role: UserRole, approval: Option<ApprovalStatus>) -> NavState {
    if entry.approval_gated && role == UserRole::Planner && approval != Some(ApprovalStatus::Approved) {
        NavState::Locked
    } else {
        NavState::Enabled
    }
}

#[cfg(test)]
#[path = "roles_tests.rs"]
mod tests;
