use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::classify::classify;
use crate::error::{Result, ShelfLifeError};
use crate::types::Product;

static PRODUCT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("product id pattern is valid")
});

pub fn validate_product_id(id: &str) -> Result<()> {
    if !PRODUCT_ID_RE.is_match(id) {
        return Err(ShelfLifeError::InvalidProductId(id.to_string()));
    }
    Ok(())
}

pub fn validate_price(product: &Product) -> Result<()> {
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(ShelfLifeError::InvalidPrice {
            id: product.id.clone(),
            price: product.price,
        });
    }
    Ok(())
}

/// Parse catalog text: a JSON array of products, or JSONL with one product per line.
pub fn parse_catalog(content: &str) -> Result<Vec<Product>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut products = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        products.push(serde_json::from_str(line)?);
    }
    Ok(products)
}

/// Read a catalog file, rejecting malformed or duplicate product ids and invalid prices.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)?;
    let products = parse_catalog(&content)?;

    let mut seen = HashSet::new();
    for product in &products {
        validate_product_id(&product.id)?;
        validate_price(product)?;
        if !seen.insert(product.id.as_str()) {
            return Err(ShelfLifeError::DuplicateProductId(product.id.clone()));
        }
    }

    tracing::debug!(path = %path.display(), products = products.len(), "loaded catalog");
    Ok(products)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidId,
    DuplicateId,
    InvalidPrice,
    InvalidDateRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogIssue {
    /// Position in the catalog, zero-based.
    pub index: usize,
    pub product_id: String,
    pub kind: IssueKind,
    pub message: String,
}

/// Collect every problem in the catalog without stopping at the first.
pub fn validate_catalog(products: &[Product], now: DateTime<Utc>) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, product) in products.iter().enumerate() {
        let mut push = |kind: IssueKind, message: String| {
            tracing::warn!(index, product_id = %product.id, ?kind, "{message}");
            issues.push(CatalogIssue {
                index,
                product_id: product.id.clone(),
                kind,
                message,
            });
        };

        if let Err(e) = validate_product_id(&product.id) {
            push(IssueKind::InvalidId, e.to_string());
        }
        if !seen.insert(product.id.as_str()) {
            push(
                IssueKind::DuplicateId,
                ShelfLifeError::DuplicateProductId(product.id.clone()).to_string(),
            );
        }
        if let Err(e) = validate_price(product) {
            push(IssueKind::InvalidPrice, e.to_string());
        }
        if let Err(e) = classify(product, now) {
            push(IssueKind::InvalidDateRange, e.to_string());
        }
    }

    issues
}
