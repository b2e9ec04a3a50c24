//! Unit tests for the booking status lifecycle.

use super::*;

#[test]
fn test_status_round_trip() {
    for (raw, status) in [
        ("pending", BookingStatus::Pending),
        ("confirmed", BookingStatus::Confirmed),
        ("completed", BookingStatus::Completed),
        ("cancelled", BookingStatus::Cancelled),
    ] {
        assert_eq!(raw.parse::<BookingStatus>().unwrap(), status);
        assert_eq!(status.to_string(), raw);
    }

    assert_eq!("Confirmed".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
}

#[test]
fn test_legal_transitions() {
    let pending = BookingStatus::Pending;
    assert!(pending.can_transition_to(&BookingStatus::Confirmed));
    assert!(pending.can_transition_to(&BookingStatus::Cancelled));
    assert!(!pending.can_transition_to(&BookingStatus::Completed));

    let confirmed = BookingStatus::Confirmed;
    assert!(confirmed.can_transition_to(&BookingStatus::Completed));
    assert!(confirmed.can_transition_to(&BookingStatus::Cancelled));
    assert!(!confirmed.can_transition_to(&BookingStatus::Pending));
}

#[test]
fn test_terminal_states_have_no_transitions() {
    assert!(BookingStatus::Completed.is_terminal());
    assert!(BookingStatus::Cancelled.is_terminal());
    assert!(!BookingStatus::Pending.is_terminal());
    assert!(!BookingStatus::Confirmed.is_terminal());
}

#[test]
fn test_unknown_status_is_carried_and_inert() {
    let status = "on_hold".parse::<BookingStatus>().unwrap();
    assert_eq!(status, BookingStatus::Other("on_hold".to_string()));
    assert_eq!(status.label(), "on_hold");
    // No transition is assumed possible for a status we do not recognize.
    assert!(status.is_terminal());
    assert!(!status.is_upcoming());
}

#[test]
fn test_upcoming_is_pending_or_confirmed() {
    assert!(BookingStatus::Pending.is_upcoming());
    assert!(BookingStatus::Confirmed.is_upcoming());
    assert!(!BookingStatus::Completed.is_upcoming());
    assert!(!BookingStatus::Cancelled.is_upcoming());
}

#[test]
fn test_status_wire_shape() {
    let decoded: Vec<BookingStatus> = serde_json::from_str(r#"["pending", "archived"]"#).unwrap();
    assert_eq!(decoded[0], BookingStatus::Pending);
    assert_eq!(decoded[1], BookingStatus::Other("archived".to_string()));

    assert_eq!(serde_json::to_string(&decoded).unwrap(), r#"["pending","archived"]"#);
}
