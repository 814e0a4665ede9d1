use thiserror::Error;

use crate::types::Statistic;

#[derive(Error, Debug)]
pub enum ShelfLifeError {
    #[error(
        "Product \"{id}\" has an invalid date range: expiry {expires} is not after manufacturing {manufactured}."
    )]
    InvalidDateRange {
        id: String,
        manufactured: String,
        expires: String,
    },

    #[error("{0} is undefined for this catalog (division by zero).")]
    UndefinedStatistic(Statistic),

    #[error("Product \"{0}\" not found. Run `shelflife list` to see product IDs.")]
    ProductNotFound(String),

    #[error("Duplicate product id \"{0}\" in catalog.")]
    DuplicateProductId(String),

    #[error(
        "Invalid product id: \"{0}\". Only alphanumeric characters, hyphens, and underscores are allowed."
    )]
    InvalidProductId(String),

    #[error("Product \"{id}\" has invalid price {price}. Prices must be non-negative numbers.")]
    InvalidPrice { id: String, price: f64 },

    #[error("Invalid timestamp \"{0}\". Use RFC 3339 or YYYY-MM-DD.")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ShelfLifeError>;
