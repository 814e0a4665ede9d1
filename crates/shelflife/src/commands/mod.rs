pub mod alerts;
pub mod init;
pub mod list;
pub mod show;
pub mod summary;
pub mod validate;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

use crate::cli::SelectionArgs;
use shelflife_core::filter;
use shelflife_core::types::{Product, Tag};

/// Apply `--search` then `--tag` to the catalog, keeping catalog order.
pub fn select<'a>(
    products: &'a [Product],
    args: &SelectionArgs,
    now: DateTime<Utc>,
) -> Result<Vec<&'a Product>> {
    let mut selected: Vec<&Product> = match args.search {
        Some(ref term) => filter::filter_by_search(products, term),
        None => products.iter().collect(),
    };

    if let Some(ref tag_str) = args.tag {
        let Some(tag) = Tag::parse(tag_str) else {
            bail!("Unknown tag: {tag_str}");
        };
        selected = filter::filter_by_tag(selected, tag, now);
    }

    Ok(selected)
}
