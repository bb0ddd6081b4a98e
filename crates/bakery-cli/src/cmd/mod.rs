pub mod count;
pub mod init;
pub mod list;
pub mod order;
pub mod orders;
pub mod seed;
pub mod ui;

use bakery_core::filter::OrderFilter;
use chrono::NaiveDate;
use clap::Args;

/// Filter flags shared by the query commands.
#[derive(Args)]
pub struct FilterArgs {
    /// Free-text filter over customer names, products, and details
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Include orders due before today
    #[arg(long)]
    pub show_previous: bool,

    /// Reference date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn order_filter(&self) -> OrderFilter {
        OrderFilter::new(self.filter.clone(), self.show_previous)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
