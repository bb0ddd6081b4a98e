use crate::output::print_json;
use anyhow::Context;
use bakery_core::order::{Customer, OrderItem};
use bakery_core::paths;
use bakery_core::store::{FileOrderStore, OrderStore};
use chrono::NaiveDate;
use std::path::Path;

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

pub fn show(root: &Path, raw_id: &str, json: bool) -> anyhow::Result<()> {
    let id = paths::parse_order_id(raw_id)?;
    let order = FileOrderStore::new(root).load(id)?;

    if json {
        print_json(&order)?;
        return Ok(());
    }

    println!("Order #{} — {}", order.id, order.customer.full_name);
    println!("Due:     {}", order.due_date);
    println!("State:   {}", order.state);
    println!("Phone:   {}", order.customer.phone_number);
    if let Some(ref details) = order.customer.details {
        println!("Details: {details}");
    }

    println!("\nItems:");
    for item in &order.items {
        match &item.comment {
            Some(comment) => println!("  {}× {} ({comment})", item.quantity, item.product),
            None => println!("  {}× {}", item.quantity, item.product),
        }
    }

    println!("\nCreated: {}", order.created_at.format("%Y-%m-%d %H:%M"));
    println!("Updated: {}", order.updated_at.format("%Y-%m-%d %H:%M"));
    Ok(())
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

pub fn create(
    root: &Path,
    due: NaiveDate,
    customer: &str,
    phone: &str,
    details: Option<String>,
    item_specs: &[String],
    json: bool,
) -> anyhow::Result<()> {
    bakery_core::config::Config::load(root).context("failed to load config")?;

    let items = parse_items(item_specs)?;
    let mut customer = Customer::new(customer, phone);
    customer.details = details;

    let order = FileOrderStore::new(root)
        .create(due, customer, items)
        .context("failed to create order")?;

    if json {
        print_json(&order)?;
    } else {
        println!("Created order #{} — due {}", order.id, order.due_date);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn edit(
    root: &Path,
    raw_id: &str,
    due: Option<NaiveDate>,
    customer: Option<&str>,
    phone: Option<&str>,
    details: Option<String>,
    item_specs: &[String],
    state: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let id = paths::parse_order_id(raw_id)?;
    let store = FileOrderStore::new(root);
    let mut order = store.load(id)?;

    if let Some(due) = due {
        order.set_due_date(due);
    }
    if let Some(name) = customer {
        order.customer.full_name = name.to_string();
    }
    if let Some(phone) = phone {
        order.customer.phone_number = phone.to_string();
    }
    if details.is_some() {
        order.customer.details = details;
    }
    if !item_specs.is_empty() {
        order.items = parse_items(item_specs)?;
    }
    if let Some(state) = state {
        order.set_state(state.parse()?);
    }

    let order = store.update(order).context("failed to update order")?;

    if json {
        print_json(&order)?;
    } else {
        println!("Updated order #{}", order.id);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Item parsing
// ---------------------------------------------------------------------------

/// Parse repeatable `--item "product:quantity"` flags.
fn parse_items(specs: &[String]) -> anyhow::Result<Vec<OrderItem>> {
    specs
        .iter()
        .map(|spec| {
            let (product, quantity) = spec.rsplit_once(':').ok_or_else(|| {
                anyhow::anyhow!("invalid item '{spec}': expected \"product:quantity\"")
            })?;
            let quantity: u32 = quantity
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid quantity in '{spec}'"))?;
            Ok(OrderItem::new(product.trim(), quantity))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_items_accepts_product_quantity_pairs() {
        let items = parse_items(&["Strawberry Bun:2".to_string(), "Rye Bread: 1".to_string()])
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product, "Strawberry Bun");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].product, "Rye Bread");
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn parse_items_rejects_missing_quantity() {
        assert!(parse_items(&["Strawberry Bun".to_string()]).is_err());
        assert!(parse_items(&["Bun:two".to_string()]).is_err());
    }
}
