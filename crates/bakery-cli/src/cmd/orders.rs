use crate::cmd::FilterArgs;
use crate::output::{print_json, print_table};
use anyhow::Context;
use bakery_core::config::Config;
use bakery_core::page::{PageRequest, SortOrder};
use bakery_core::query::OrderQueryService;
use bakery_core::store::FileOrderStore;
use std::path::Path;

pub fn run(
    root: &Path,
    filter: &FilterArgs,
    page: usize,
    size: Option<usize>,
    sort: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let sort = match sort {
        Some(expr) => SortOrder::parse_list(expr)?,
        None => Vec::new(),
    };
    let req = PageRequest::new(page, config.page_size(size));
    let query = OrderQueryService::new(FileOrderStore::new(root));
    let result = query.fetch_page(&filter.order_filter(), filter.today(), &req, &sort)?;

    if json {
        print_json(&result)?;
        return Ok(());
    }

    if result.total == 0 {
        println!("No orders match.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = result
        .items
        .iter()
        .map(|o| {
            vec![
                o.id.to_string(),
                o.due_date.to_string(),
                o.customer.full_name.clone(),
                o.item_summary(),
                o.state.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "DUE", "CUSTOMER", "ITEMS", "STATE"], rows);
    println!(
        "\nPage {} of {} — {} matching orders",
        result.page + 1,
        result.total_pages(),
        result.total
    );
    Ok(())
}
