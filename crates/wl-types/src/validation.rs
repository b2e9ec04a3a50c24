//! Local form validation, run before any network call.

use std::{collections::HashMap, fmt};

/// High-level validation errors used by form input checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    InvalidAmount,
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidAmount => write!(f, "Enter an amount greater than zero"),
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Input for the reject flows (payment review, planner applications). A
/// rejection always carries a reason.
#[derive(Debug, Clone, Default)]
pub struct RejectionInput<'a> {
    pub reason: &'a str,
}

impl<'a> RejectionInput<'a> {
    pub fn new(reason: &'a str) -> Self {
        Self { reason }
    }

    /// Validate the rejection input, returning a field->error map.
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        if self.reason.trim().is_empty() {
            errors.insert("reason".to_string(), ValidationError::Required);
        }
        errors
    }
}

/// Input for a client's receipt submission.
#[derive(Debug, Clone, Default)]
pub struct ReceiptInput<'a> {
    /// Amount as typed; parsed here rather than at the input element.
    pub amount: &'a str,
    pub reference: &'a str,
}

impl<'a> ReceiptInput<'a> {
    pub fn new(amount: &'a str, reference: &'a str) -> Self {
        Self { amount, reference }
    }

    /// Validate the receipt input, returning a field->error map.
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        match self.amount.trim().parse::<f64>() {
            Ok(amount) if amount > 0.0 => {}
            _ => {
                errors.insert("amount".to_string(), ValidationError::InvalidAmount);
            }
        }

        if self.reference.trim().is_empty() {
            errors.insert("reference".to_string(), ValidationError::Required);
        }

        errors
    }

    /// Parsed amount; only meaningful when `validate` returned no errors.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse::<f64>().ok().filter(|amount| *amount > 0.0)
    }
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &HashMap<String, ValidationError>) -> String {
    errors.iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
