use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FilterChanged
// ---------------------------------------------------------------------------

/// The filter-change event emitted by a search control: free text plus the
/// "show past orders" checkbox. This is the only input shape the storefront
/// requires from a UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterChanged {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub show_previous: bool,
}

impl FilterChanged {
    pub fn new(text: impl Into<String>, show_previous: bool) -> Self {
        Self {
            text: text.into(),
            show_previous,
        }
    }
}

// ---------------------------------------------------------------------------
// OrderFilter
// ---------------------------------------------------------------------------

/// Normalized query filter. Recreated per query; an empty or whitespace-only
/// text constraint means "match all orders".
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    text: Option<String>,
    show_previous: bool,
}

impl OrderFilter {
    pub fn new(text: impl Into<String>, show_previous: bool) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        Self {
            text: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
            show_previous,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn show_previous(&self) -> bool {
        self.show_previous
    }
}

impl From<&FilterChanged> for OrderFilter {
    fn from(event: &FilterChanged) -> Self {
        OrderFilter::new(event.text.clone(), event.show_previous)
    }
}

impl From<FilterChanged> for OrderFilter {
    fn from(event: FilterChanged) -> Self {
        OrderFilter::new(event.text, event.show_previous)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
