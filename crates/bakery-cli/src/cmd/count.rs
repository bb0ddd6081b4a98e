use crate::cmd::FilterArgs;
use crate::output::print_json;
use anyhow::Context;
use bakery_core::config::Config;
use bakery_core::query::OrderQueryService;
use bakery_core::store::FileOrderStore;
use std::path::Path;

pub fn run(root: &Path, filter: &FilterArgs, json: bool) -> anyhow::Result<()> {
    Config::load(root).context("failed to load config")?;

    let query = OrderQueryService::new(FileOrderStore::new(root));
    let count = query.count(&filter.order_filter(), filter.today())?;

    if json {
        print_json(&serde_json::json!({ "count": count }))?;
    } else {
        println!("{count} matching orders");
    }
    Ok(())
}
