use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OrderState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    New,
    Confirmed,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderState {
    pub fn all() -> &'static [OrderState] {
        &[
            OrderState::New,
            OrderState::Confirmed,
            OrderState::Ready,
            OrderState::Delivered,
            OrderState::Cancelled,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::New => "new",
            OrderState::Confirmed => "confirmed",
            OrderState::Ready => "ready",
            OrderState::Delivered => "delivered",
            OrderState::Cancelled => "cancelled",
        }
    }

    /// Open orders are still actionable; delivered and cancelled ones are not.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            OrderState::New | OrderState::Confirmed | OrderState::Ready
        )
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderState {
    type Err = crate::error::BakeryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OrderState::New),
            "confirmed" => Ok(OrderState::Confirmed),
            "ready" => Ok(OrderState::Ready),
            "delivered" => Ok(OrderState::Delivered),
            "cancelled" => Ok(OrderState::Cancelled),
            _ => Err(crate::error::BakeryError::InvalidOrderState(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SortField
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    DueDate,
    Id,
    Customer,
    State,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::DueDate,
            SortField::Id,
            SortField::Customer,
            SortField::State,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::DueDate => "due_date",
            SortField::Id => "id",
            SortField::Customer => "customer",
            SortField::State => "state",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortField {
    type Err = crate::error::BakeryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "due_date" | "due-date" => Ok(SortField::DueDate),
            "id" => Ok(SortField::Id),
            "customer" => Ok(SortField::Customer),
            "state" => Ok(SortField::State),
            _ => Err(crate::error::BakeryError::InvalidSortField(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for SortDirection {
    type Err = crate::error::BakeryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(crate::error::BakeryError::InvalidSortDirection(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn order_state_roundtrip() {
        for state in OrderState::all() {
            let parsed = OrderState::from_str(state.as_str()).unwrap();
            assert_eq!(*state, parsed);
        }
    }

    #[test]
    fn order_state_invalid() {
        assert!(OrderState::from_str("shipped").is_err());
        assert!(OrderState::from_str("").is_err());
    }

    #[test]
    fn order_state_is_open() {
        assert!(OrderState::New.is_open());
        assert!(OrderState::Ready.is_open());
        assert!(!OrderState::Delivered.is_open());
        assert!(!OrderState::Cancelled.is_open());
    }

    #[test]
    fn sort_field_roundtrip() {
        for field in SortField::all() {
            let parsed = SortField::from_str(field.as_str()).unwrap();
            assert_eq!(*field, parsed);
        }
    }

    #[test]
    fn sort_field_accepts_dashed_alias() {
        assert_eq!(SortField::from_str("due-date").unwrap(), SortField::DueDate);
    }

    #[test]
    fn sort_direction_parse() {
        assert_eq!(SortDirection::from_str("asc").unwrap(), SortDirection::Asc);
        assert_eq!(
            SortDirection::from_str("desc").unwrap(),
            SortDirection::Desc
        );
        assert!(SortDirection::from_str("down").is_err());
    }
}
