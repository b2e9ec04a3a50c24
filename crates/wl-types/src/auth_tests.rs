//! Unit tests for auth payload normalization and session getters.

use super::*;

fn planner_payload() -> RawUserPayload {
    RawUserPayload {
        user_id: Some("u-17".to_string()),
        first_name: Some("Maria".to_string()),
        last_name: Some("Santos".to_string()),
        email: Some("maria@example.com".to_string()),
        role: Some("planner".to_string()),
        planner_profile: None,
        client_profile: None,
    }
}

#[test]
fn test_missing_planner_profile_defaults_to_pending() {
    let user = SessionUser::from_payload(planner_payload()).unwrap();

    // A planner payload without a profile must not fail; it normalizes to a
    // fresh pending application.
    assert_eq!(user.role, UserRole::Planner);
    assert_eq!(user.approval(), Some(ApprovalStatus::Pending));
    assert!(!user.is_planner_approved());
}

#[test]
fn test_planner_profile_is_kept_when_present() {
    let mut payload = planner_payload();
    payload.planner_profile = Some(PlannerProfile {
        status: ApprovalStatus::Approved,
        business_name: Some("Santos Events".to_string()),
    });

    let user = SessionUser::from_payload(payload).unwrap();
    assert!(user.is_planner_approved());
    assert_eq!(user.planner_profile.unwrap().business_name.as_deref(), Some("Santos Events"));
}

#[test]
fn test_profiles_are_dropped_for_foreign_roles() {
    // A client payload carrying a plannerProfile keeps the invariant: the
    // profile is only meaningful for planners.
    let mut payload = planner_payload();
    payload.role = Some("client".to_string());
    payload.planner_profile = Some(PlannerProfile::pending());
    payload.client_profile = Some(ClientProfile { phone: Some("555-0100".to_string()) });

    let user = SessionUser::from_payload(payload).unwrap();
    assert_eq!(user.role, UserRole::Client);
    assert!(user.planner_profile.is_none());
    assert_eq!(user.approval(), None);
    assert!(user.client_profile.is_some());
    assert!(!user.is_planner_approved());
}

#[test]
fn test_incomplete_identity_fields_are_contract_errors() {
    let mut payload = planner_payload();
    payload.user_id = None;
    assert_eq!(SessionUser::from_payload(payload).unwrap_err(), PayloadError::MissingField("user_id"));

    let mut payload = planner_payload();
    payload.email = Some("   ".to_string());
    assert_eq!(SessionUser::from_payload(payload).unwrap_err(), PayloadError::MissingField("email"));

    let mut payload = planner_payload();
    payload.role = None;
    assert_eq!(SessionUser::from_payload(payload).unwrap_err(), PayloadError::MissingField("role"));

    let mut payload = planner_payload();
    payload.role = Some("wizard".to_string());
    assert_eq!(
        SessionUser::from_payload(payload).unwrap_err(),
        PayloadError::UnknownRole("wizard".to_string())
    );
}

#[test]
fn test_missing_names_are_tolerated() {
    let mut payload = planner_payload();
    payload.first_name = None;
    payload.last_name = None;

    let user = SessionUser::from_payload(payload).unwrap();
    assert_eq!(user.full_name(), "");
    assert_eq!(user.initials(), "");
}

#[test]
fn test_full_name_and_initials() {
    let user = SessionUser::from_payload(planner_payload()).unwrap();
    assert_eq!(user.full_name(), "Maria Santos");
    assert_eq!(user.initials(), "MS");

    let mut payload = planner_payload();
    payload.first_name = Some("  ana ".to_string());
    payload.last_name = Some(" ".to_string());
    let user = SessionUser::from_payload(payload).unwrap();
    assert_eq!(user.full_name(), "ana");
    assert_eq!(user.initials(), "A");
}

#[test]
fn test_raw_payload_deserializes_wire_shape() {
    let json = r#"{
        "user_id": "u-9",
        "first_name": "Lea",
        "last_name": "Cruz",
        "email": "lea@example.com",
        "role": "planner",
        "plannerProfile": { "status": "approved", "business_name": "Cruz Weddings" }
    }"#;

    let payload: RawUserPayload = serde_json::from_str(json).unwrap();
    let user = SessionUser::from_payload(payload).unwrap();
    assert!(user.is_planner_approved());
}
