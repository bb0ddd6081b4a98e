use crate::error::{BakeryError, Result};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const BAKERY_DIR: &str = ".bakery";
pub const ORDERS_DIR: &str = ".bakery/orders";
pub const CONFIG_FILE: &str = ".bakery/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn bakery_dir(root: &Path) -> PathBuf {
    root.join(BAKERY_DIR)
}

pub fn orders_dir(root: &Path) -> PathBuf {
    root.join(ORDERS_DIR)
}

pub fn order_file(root: &Path, id: u64) -> PathBuf {
    orders_dir(root).join(format!("{id}.yaml"))
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// Order id parsing
// ---------------------------------------------------------------------------

/// Parse a raw order id as it arrives from a URL segment or CLI argument.
/// Anything that is not a plain decimal number is rejected.
pub fn parse_order_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| BakeryError::InvalidOrderId(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
