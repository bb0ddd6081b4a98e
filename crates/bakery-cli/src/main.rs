mod cmd;
mod output;
mod root;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cmd::FilterArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bakery",
    about = "Bakery storefront order management — filter, bucket, and page orders",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .bakery/ or .git/)
    #[arg(long, global = true, env = "BAKERY_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a bakery order store in the current project
    Init,

    /// Seed the store with deterministic demo orders
    Seed,

    /// Storefront view: matching orders grouped into previous / today /
    /// this week / upcoming
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Paged grid view of matching orders
    Orders {
        #[command(flatten)]
        filter: FilterArgs,

        /// Zero-based page number
        #[arg(long, default_value = "0")]
        page: usize,

        /// Page size (default from config)
        #[arg(long)]
        size: Option<usize>,

        /// Sort expression, e.g. "due_date:desc,id"
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one order
    Show { id: String },

    /// Create a new order
    New {
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,

        /// Customer full name
        #[arg(long)]
        customer: String,

        /// Customer phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Free-form order details
        #[arg(long)]
        details: Option<String>,

        /// Order line as "product:quantity", repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },

    /// Edit an existing order
    Edit {
        id: String,

        #[arg(long)]
        due: Option<NaiveDate>,

        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        details: Option<String>,

        /// Replace the order lines ("product:quantity", repeatable)
        #[arg(long = "item")]
        items: Vec<String>,

        /// New order state (new/confirmed/ready/delivered/cancelled)
        #[arg(long)]
        state: Option<String>,
    },

    /// Count matching orders
    Count {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Launch the HTTP API server
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open a browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Seed => cmd::seed::run(&root, cli.json),
        Commands::List { filter } => cmd::list::run(&root, &filter, cli.json),
        Commands::Orders {
            filter,
            page,
            size,
            sort,
        } => cmd::orders::run(&root, &filter, page, size, sort.as_deref(), cli.json),
        Commands::Show { id } => cmd::order::show(&root, &id, cli.json),
        Commands::New {
            due,
            customer,
            phone,
            details,
            items,
        } => cmd::order::create(&root, due, &customer, &phone, details, &items, cli.json),
        Commands::Edit {
            id,
            due,
            customer,
            phone,
            details,
            items,
            state,
        } => cmd::order::edit(
            &root,
            &id,
            due,
            customer.as_deref(),
            phone.as_deref(),
            details,
            &items,
            state.as_deref(),
            cli.json,
        ),
        Commands::Count { filter } => cmd::count::run(&root, &filter, cli.json),
        Commands::Ui { port, no_open } => cmd::ui::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
