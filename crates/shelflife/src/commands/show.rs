use anyhow::Result;

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::*;
use shelflife_core::{classify, filter, format, recommend};

pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let products = ctx.load_catalog()?;
    let product = filter::find_product(&products, &args.id)?;
    let freshness = classify(product, ctx.now)?;
    let recommendations = recommend(product, &freshness);

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "show",
            "product": product,
            "freshness": freshness,
            "recommendations": recommendations,
        }));
        return Ok(());
    }

    let detail = format::format_product_detail(product, &freshness, ctx.currency());
    println!("{}", paint_tag(freshness.tag, &detail));
    println!();
    println!(
        "{}",
        format::format_recommendations(&recommendations, ctx.currency())
    );

    Ok(())
}
