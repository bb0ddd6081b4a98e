use crate::cmd::FilterArgs;
use crate::output::print_json;
use anyhow::Context;
use bakery_core::config::Config;
use bakery_core::filter::FilterChanged;
use bakery_core::presenter::Storefront;
use bakery_core::query::OrderQueryService;
use bakery_core::store::FileOrderStore;
use std::path::Path;

pub fn run(root: &Path, filter: &FilterArgs, json: bool) -> anyhow::Result<()> {
    Config::load(root).context("failed to load config")?;

    let storefront = Storefront::new(OrderQueryService::new(FileOrderStore::new(root)));
    let event = FilterChanged::new(filter.filter.clone(), filter.show_previous);
    let (_, groups) = storefront.on_filter_changed(&event, filter.today())?;

    if json {
        print_json(&groups)?;
        return Ok(());
    }

    if groups.is_empty() {
        println!("No orders match.");
        return Ok(());
    }

    for group in &groups {
        println!("{} — {}", group.title, group.subtitle);
        for order in &group.orders {
            println!(
                "  #{:<4} {}  {:<20} {}  [{}]",
                order.id,
                order.due_date,
                order.customer.full_name,
                order.item_summary(),
                order.state
            );
        }
        println!();
    }
    Ok(())
}
