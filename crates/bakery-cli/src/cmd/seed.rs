use crate::output::print_json;
use anyhow::Context;
use bakery_core::{config::Config, sample::sample_orders, store::FileOrderStore};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    Config::load(root).context("failed to load config")?;

    let store = FileOrderStore::new(root);
    let today = chrono::Local::now().date_naive();
    let orders = sample_orders(today);
    for order in &orders {
        store
            .save(order)
            .with_context(|| format!("failed to save order #{}", order.id))?;
    }

    if json {
        print_json(&serde_json::json!({ "seeded": orders.len() }))?;
    } else {
        println!("Seeded {} demo orders", orders.len());
        println!("Next: bakery list --show-previous");
    }
    Ok(())
}
