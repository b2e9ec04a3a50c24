//! Unit tests for role parsing and the capability table.

use super::*;

#[test]
fn test_role_string_representation() {
    assert_eq!(UserRole::Client.to_string(), "client");
    assert_eq!(UserRole::Planner.to_string(), "planner");
    assert_eq!(UserRole::Admin.to_string(), "admin");

    assert_eq!("client".parse::<UserRole>().unwrap(), UserRole::Client);
    assert_eq!("PLANNER".parse::<UserRole>().unwrap(), UserRole::Planner);
    assert!("superuser".parse::<UserRole>().is_err());

    assert_eq!("approved".parse::<ApprovalStatus>().unwrap(), ApprovalStatus::Approved);
    assert!("denied".parse::<ApprovalStatus>().is_err());
}

#[test]
fn test_logout_target_per_role() {
    assert_eq!(logout_target(Some(UserRole::Client)), "/");
    assert_eq!(logout_target(Some(UserRole::Planner)), "/login");
    assert_eq!(logout_target(Some(UserRole::Admin)), "/login");
    assert_eq!(logout_target(None), "/login");
}

#[test]
fn test_dashboard_path_per_role() {
    assert_eq!(dashboard_path(Some(UserRole::Client)), "/dashboard");
    assert_eq!(dashboard_path(Some(UserRole::Planner)), "/planner");
    assert_eq!(dashboard_path(Some(UserRole::Admin)), "/admin");
    // No role known falls back to the admin path.
    assert_eq!(dashboard_path(None), "/admin");
}

#[test]
fn test_capability_table_is_consistent() {
    for role in [UserRole::Client, UserRole::Planner, UserRole::Admin] {
        let caps = role.capabilities();
        assert_eq!(caps.role, role);
        assert!(!caps.nav.is_empty());
        // The dashboard is always reachable from the role's own nav.
        assert!(caps.nav.iter().any(|entry| entry.path == caps.dashboard_path));
    }
}

#[test]
fn test_nav_entries_lock_for_unapproved_planner() {
    let gated = PLANNER_CAPABILITIES
        .nav
        .iter()
        .find(|entry| entry.approval_gated)
        .expect("planner nav has approval-gated entries");

    assert_eq!(nav_state(gated, UserRole::Planner, Some(ApprovalStatus::Pending)), NavState::Locked);
    assert_eq!(nav_state(gated, UserRole::Planner, Some(ApprovalStatus::Rejected)), NavState::Locked);
    assert_eq!(nav_state(gated, UserRole::Planner, None), NavState::Locked);
    assert_eq!(nav_state(gated, UserRole::Planner, Some(ApprovalStatus::Approved)), NavState::Enabled);
}

#[test]
fn test_nav_entries_ignore_approval_for_other_roles() {
    let entry = NavEntry { label: "X", path: "/x", approval_gated: true };
    assert_eq!(nav_state(&entry, UserRole::Client, None), NavState::Enabled);
    assert_eq!(nav_state(&entry, UserRole::Admin, None), NavState::Enabled);

    let ungated = NavEntry { label: "Y", path: "/y", approval_gated: false };
    assert_eq!(nav_state(&ungated, UserRole::Planner, Some(ApprovalStatus::Pending)), NavState::Enabled);
}
