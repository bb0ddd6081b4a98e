use crate::validate::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BakeryError {
    #[error("not initialized: run 'bakery init'")]
    NotInitialized,

    #[error("order not found: {0}")]
    OrderNotFound(u64),

    #[error("invalid order id: {0}")]
    InvalidOrderId(String),

    #[error("invalid order state: {0}")]
    InvalidOrderState(String),

    #[error("invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("invalid sort direction '{0}': expected 'asc' or 'desc'")]
    InvalidSortDirection(String),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, BakeryError>;
