use crate::types::OrderState;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub full_name: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Customer {
    pub fn new(full_name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            phone_number: phone_number.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

// ---------------------------------------------------------------------------
// OrderItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl OrderItem {
    pub fn new(product: impl Into<String>, quantity: u32) -> Self {
        Self {
            product: product.into(),
            quantity,
            comment: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// A bakery order. The due date is always present; bucketing and the
/// "show previous" cutoff are only well-defined because of that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub due_date: NaiveDate,
    pub state: OrderState,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: u64, due_date: NaiveDate, customer: Customer, items: Vec<OrderItem>) -> Self {
        let now = Utc::now();
        Self {
            id,
            due_date,
            state: OrderState::New,
            customer,
            items,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_state(&mut self, state: OrderState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    pub fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = due_date;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive free-text match over the customer's full name, the
    /// item product names, and the customer details. An empty needle matches
    /// every order.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.customer.full_name.to_lowercase().contains(&needle)
            || self
                .items
                .iter()
                .any(|item| item.product.to_lowercase().contains(&needle))
            || self
                .customer
                .details
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    /// One-line item summary for list output, e.g. "2× Strawberry Bun, 1× Coffee".
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}× {}", item.quantity, item.product))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_order() -> Order {
        Order::new(
            7,
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            Customer::new("Ann Smith", "+1 555 0101").with_details("no nuts"),
            vec![
                OrderItem::new("Strawberry Bun", 2),
                OrderItem::new("Vanilla Cracker", 1),
            ],
        )
    }

    #[test]
    fn new_order_starts_in_new_state() {
        let order = make_order();
        assert_eq!(order.state, OrderState::New);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn matches_customer_name_case_insensitive() {
        let order = make_order();
        assert!(order.matches("ann"));
        assert!(order.matches("SMITH"));
        assert!(!order.matches("bob"));
    }

    #[test]
    fn matches_product_and_details() {
        let order = make_order();
        assert!(order.matches("strawberry"));
        assert!(order.matches("cracker"));
        assert!(order.matches("nuts"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        let order = make_order();
        assert!(order.matches(""));
        assert!(order.matches("   "));
    }

    #[test]
    fn item_summary_lists_quantities() {
        let order = make_order();
        assert_eq!(order.item_summary(), "2× Strawberry Bun, 1× Vanilla Cracker");
    }

    #[test]
    fn order_yaml_roundtrip() {
        let order = make_order();
        let yaml = serde_yaml::to_string(&order).unwrap();
        let parsed: Order = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.due_date, order.due_date);
        assert_eq!(parsed.customer.full_name, "Ann Smith");
        assert_eq!(parsed.items.len(), 2);
    }

    #[test]
    fn details_not_serialized_when_absent() {
        let order = Order::new(
            1,
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            Customer::new("Bob", "555"),
            vec![OrderItem::new("Rye Bread", 1)],
        );
        let yaml = serde_yaml::to_string(&order).unwrap();
        assert!(!yaml.contains("details"));
    }
}
