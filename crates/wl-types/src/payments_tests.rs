//! Unit tests for payment status parsing and display.

use super::*;

#[test]
fn test_payment_status_round_trip() {
    for (raw, status) in [
        ("pending", PaymentStatus::Pending),
        ("verified", PaymentStatus::Verified),
        ("rejected", PaymentStatus::Rejected),
    ] {
        assert_eq!(raw.parse::<PaymentStatus>().unwrap(), status);
        assert_eq!(status.to_string(), raw);
    }

    assert_eq!("VERIFIED".parse::<PaymentStatus>().unwrap(), PaymentStatus::Verified);
}

#[test]
fn test_unknown_payment_status_is_carried_not_defaulted() {
    let status = "chargeback".parse::<PaymentStatus>().unwrap();
    assert_eq!(status, PaymentStatus::Other("chargeback".to_string()));
    // The raw value is what gets shown; never a recognized state.
    assert_eq!(status.label(), "chargeback");
}

#[test]
fn test_payment_label_handles_absence() {
    assert_eq!(payment_label(None), "No Payment");

    let payment = PaymentInfo {
        id: "p-1".to_string(),
        amount: 1500.0,
        receipt_reference: Some("RCPT-778".to_string()),
        status: PaymentStatus::Pending,
    };
    assert_eq!(payment_label(Some(&payment)), "Pending");
}

#[test]
fn test_payment_wire_shape() {
    let json = r#"{"id":"p-2","amount":250.5,"status":"on_hold"}"#;
    let payment: PaymentInfo = serde_json::from_str(json).unwrap();
    assert_eq!(payment.status, PaymentStatus::Other("on_hold".to_string()));
    assert_eq!(payment.receipt_reference, None);

    let encoded = serde_json::to_string(&payment).unwrap();
    assert!(encoded.contains(r#""status":"on_hold""#));
}
