use crate::error::{BakeryError, Result};
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// PageConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_size")]
    pub default_size: usize,
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

fn default_page_size() -> usize {
    20
}

fn default_max_size() -> usize {
    100
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_size: default_page_size(),
            max_size: default_max_size(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    #[serde(default)]
    pub page: PageConfig,
}

impl Config {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: PageConfig::default(),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(BakeryError::NotInitialized);
        }
        io::read_yaml(&path)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        io::write_yaml(&paths::config_path(root), self)
    }

    /// Resolve a requested page size: absent means the configured default,
    /// anything above `max_size` is clamped down to it.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(size) => size.min(self.page.max_size),
            None => self.page.default_size,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
