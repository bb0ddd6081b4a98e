use crate::error::Result;
use crate::types::{SortDirection, SortField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parse a comma-separated sort expression like `"due_date:desc,id"`.
    /// An empty string yields an empty list, which callers treat as
    /// "use the default sort".
    pub fn parse_list(expr: &str) -> Result<Vec<SortOrder>> {
        expr.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(SortOrder::from_str)
            .collect()
    }
}

impl FromStr for SortOrder {
    type Err = crate::error::BakeryError;

    /// `"due_date"` sorts ascending; `"due_date:desc"` descending.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((field, direction)) => Ok(Self {
                field: field.trim().parse()?,
                direction: direction.trim().parse()?,
            }),
            None => Ok(Self::asc(s.trim().parse()?)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

// ---------------------------------------------------------------------------
// PageRequest
// ---------------------------------------------------------------------------

/// A window into a query result: zero-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> usize {
        self.page * self.size
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of a query result plus the total match count, enough to drive
/// pagination controls. Recomputed on every page/sort/filter change and never
/// cached here.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: usize,
    pub size: usize,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            (self.total as usize).div_ceil(self.size)
        }
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
