use chrono::{DateTime, Utc};

use crate::classify::classify;
use crate::error::{Result, ShelfLifeError};
use crate::types::{Product, Tag};

/// Case-insensitive substring match over name, category, location and description.
/// An empty term matches everything.
pub fn filter_by_search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            term.is_empty()
                || [&p.name, &p.category, &p.location, &p.description]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

/// Products classified with `tag` at `now`. Malformed products never match.
pub fn filter_by_tag<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    tag: Tag,
    now: DateTime<Utc>,
) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| classify(p, now).is_ok_and(|f| f.tag == tag))
        .collect()
}

pub fn find_product<'a>(products: &'a [Product], id: &str) -> Result<&'a Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ShelfLifeError::ProductNotFound(id.to_string()))
}
