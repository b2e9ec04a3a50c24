//! Session identity types and server-payload normalization.
//!
//! The raw user object returned by `POST /auth/login` and `GET /auth/me` is
//! deliberately loose (every field optional); [`SessionUser::from_payload`]
//! is the single place that decides what is actually required and how gaps
//! are filled.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roles::{ApprovalStatus, UserRole};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to the authentication endpoint.
pub struct LoginRequest {
    pub email: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Response returned after processing a login request.
///
/// A rejected credential pair is a `success: false` response, not an error;
/// transport failures and malformed identity payloads surface as errors so
/// callers can tell the two apart.
pub struct LoginResponse {
    pub success: bool,
    /// Human-readable status or error message.
    pub message: String,
    /// Populated when authentication succeeds.
    pub user: Option<SessionUser>,
}

/// Planner application state embedded in the user payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerProfile {
    pub status: ApprovalStatus,
    #[serde(default)]
    pub business_name: Option<String>,
}

impl PlannerProfile {
    /// Profile assumed for a planner whose payload carried none: a fresh,
    /// unapproved application.
    pub fn pending() -> Self {
        Self { status: ApprovalStatus::Pending, business_name: None }
    }
}

/// Client profile details; optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub phone: Option<String>,
}

/// Raw user object as returned by the auth endpoints. Field presence is
/// validated by [`SessionUser::from_payload`], not by serde.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawUserPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "plannerProfile")]
    pub planner_profile: Option<PlannerProfile>,
    #[serde(default, rename = "clientProfile")]
    pub client_profile: Option<ClientProfile>,
}

/// Identity payload that cannot be turned into a session. Distinct from bad
/// credentials: the server accepted the login but returned a shape we cannot
/// trust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    MissingField(&'static str),
    UnknownRole(String),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::MissingField(field) => write!(f, "identity payload is missing '{}'", field),
            PayloadError::UnknownRole(role) => write!(f, "identity payload has unknown role '{}'", role),
        }
    }
}

/// Authenticated user as held by the session store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    /// Present and meaningful only when `role` is `Planner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_profile: Option<PlannerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_profile: Option<ClientProfile>,
}

impl SessionUser {
    /// Normalize a raw auth payload into a session.
    ///
    /// Identity fields (id, email, role) are required. A planner payload
    /// without a `plannerProfile` gets a pending one; profiles attached to
    /// roles they do not belong to are dropped.
    pub fn from_payload(payload: RawUserPayload) -> Result<Self, PayloadError> {
        let id = require(payload.user_id, "user_id")?;
        let email = require(payload.email, "email")?;
        let role_raw = require(payload.role, "role")?;
        let role = role_raw.parse::<UserRole>().map_err(|_| PayloadError::UnknownRole(role_raw))?;

        let planner_profile = match role {
            UserRole::Planner => Some(payload.planner_profile.unwrap_or_else(PlannerProfile::pending)),
            _ => None,
        };
        let client_profile = match role {
            UserRole::Client => payload.client_profile,
            _ => None,
        };

        Ok(Self {
            id,
            first_name: payload.first_name.unwrap_or_default(),
            last_name: payload.last_name.unwrap_or_default(),
            email,
            role,
            planner_profile,
            client_profile,
        })
    }

    /// First and last name joined, trimmed of stray whitespace.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_string()
    }

    /// First letter of each name part, uppercased. Empty when both parts are
    /// empty.
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        for part in [&self.first_name, &self.last_name] {
            if let Some(c) = part.trim().chars().next() {
                initials.extend(c.to_uppercase());
            }
        }
        initials
    }

    pub fn approval(&self) -> Option<ApprovalStatus> {
        self.planner_profile.as_ref().map(|profile| profile.status)
    }

    pub fn is_planner_approved(&self) -> bool {
        self.role == UserRole::Planner && self.approval() == Some(ApprovalStatus::Approved)
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String, PayloadError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PayloadError::MissingField(field)),
    }
}

/// A planner application row in the admin approval queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerApplication {
    pub id: String,
    pub owner_name: String,
    pub email: String,
    #[serde(default)]
    pub business_name: Option<String>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
