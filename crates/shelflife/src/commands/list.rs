use anyhow::Result;

use crate::cli::ListArgs;
use crate::context::RuntimeContext;
use crate::output::*;
use shelflife_core::types::{FreshnessResult, Product};
use shelflife_core::{classify, format};

pub fn run(ctx: &RuntimeContext, args: &ListArgs) -> Result<()> {
    let products = ctx.load_catalog()?;

    let selected = super::select(&products, &args.selection, ctx.now)?;

    let mut rows: Vec<(&Product, FreshnessResult)> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();
    for product in selected {
        match classify(product, ctx.now) {
            Ok(freshness) => rows.push((product, freshness)),
            Err(e) => {
                tracing::warn!(product_id = %product.id, error = %e, "skipping product");
                skipped.push(product.id.clone());
            }
        }
    }

    if ctx.json {
        let items: Vec<serde_json::Value> = rows
            .iter()
            .map(|(product, freshness)| {
                serde_json::json!({
                    "product": product,
                    "freshness": freshness,
                })
            })
            .collect();
        output_json(&serde_json::json!({
            "success": true,
            "command": "list",
            "count": items.len(),
            "products": items,
            "skipped": skipped,
        }));
    } else if rows.is_empty() {
        println!("No matching products.");
    } else {
        for (product, freshness) in &rows {
            let line = format::format_product_line(product, freshness, ctx.currency());
            println!("{}", paint_tag(freshness.tag, &line));
        }
        for id in &skipped {
            print_warning(&format!("Skipped {id}: invalid date range (run `shelflife validate`)"));
        }
    }

    Ok(())
}
