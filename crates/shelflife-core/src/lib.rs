//! Freshness classification, mitigation recommendations and catalog analytics
//! for perishable inventory.
//!
//! The three entry points are [`classify`], [`recommend`] and [`summarize`].
//! Each is pure and takes the evaluation instant explicitly.

pub mod alerts;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod format;
pub mod recommend;
pub mod summary;
pub mod types;

pub use classify::classify;
pub use error::{Result, ShelfLifeError};
pub use recommend::recommend;
pub use summary::{CatalogSummary, summarize};
pub use types::{FreshnessResult, Product, Recommendation, Tag};
