//! Unit tests for local form validation.

use super::*;

#[test]
fn test_rejection_requires_a_reason() {
    let errors = RejectionInput::new("").validate();
    assert_eq!(errors.get("reason"), Some(&ValidationError::Required));

    let errors = RejectionInput::new("   ").validate();
    assert_eq!(errors.get("reason"), Some(&ValidationError::Required));

    assert!(RejectionInput::new("Receipt does not match the amount").validate().is_empty());
}

#[test]
fn test_receipt_validation() {
    let errors = ReceiptInput::new("", "").validate();
    assert_eq!(errors.get("amount"), Some(&ValidationError::InvalidAmount));
    assert_eq!(errors.get("reference"), Some(&ValidationError::Required));

    let errors = ReceiptInput::new("-5", "RCPT-1").validate();
    assert_eq!(errors.get("amount"), Some(&ValidationError::InvalidAmount));

    let errors = ReceiptInput::new("0", "RCPT-1").validate();
    assert_eq!(errors.get("amount"), Some(&ValidationError::InvalidAmount));

    let input = ReceiptInput::new(" 1500.50 ", "RCPT-1");
    assert!(input.validate().is_empty());
    assert_eq!(input.parsed_amount(), Some(1500.50));
}

#[test]
fn test_format_errors_is_readable() {
    let errors = RejectionInput::new("").validate();
    let rendered = format_errors(&errors);
    assert_eq!(rendered, "reason: This field is required");
}
