use crate::error::{BakeryError, Result};
use crate::order::Order;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ValidationErrors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All offending fields of a rejected order, not just the first one found.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Order validation
// ---------------------------------------------------------------------------

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,18}[0-9]$").unwrap())
}

/// Check an order before it is written. Collects every violation so an editor
/// can highlight all offending fields in one pass.
pub fn validate_order(order: &Order) -> Result<()> {
    let mut violations = Vec::new();
    let mut reject = |field: &str, message: &str| {
        violations.push(FieldViolation {
            field: field.to_string(),
            message: message.to_string(),
        });
    };

    if order.customer.full_name.trim().is_empty() {
        reject("customer.full_name", "must not be empty");
    }
    let phone = order.customer.phone_number.trim();
    if phone.is_empty() {
        reject("customer.phone_number", "must not be empty");
    } else if !phone_re().is_match(phone) {
        reject("customer.phone_number", "not a valid phone number");
    }

    if order.items.is_empty() {
        reject("items", "order must contain at least one item");
    }
    for (i, item) in order.items.iter().enumerate() {
        if item.product.trim().is_empty() {
            violations.push(FieldViolation {
                field: format!("items[{i}].product"),
                message: "must not be empty".to_string(),
            });
        }
        if item.quantity == 0 {
            violations.push(FieldViolation {
                field: format!("items[{i}].quantity"),
                message: "must be at least 1".to_string(),
            });
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(BakeryError::Validation(ValidationErrors(violations)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
