use anyhow::{Context, Result};

use crate::context::RuntimeContext;
use crate::output::*;
use shelflife_core::catalog;

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let content = std::fs::read_to_string(&ctx.catalog_path)
        .with_context(|| format!("failed to read catalog {}", ctx.catalog_path.display()))?;
    let products = catalog::parse_catalog(&content)?;
    let issues = catalog::validate_catalog(&products, ctx.now);

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "validate",
            "valid": issues.is_empty(),
            "totalProducts": products.len(),
            "totalErrors": issues.len(),
            "errors": issues,
        }));
    } else {
        for issue in &issues {
            print_error(&format!("#{} {} - {}", issue.index + 1, issue.product_id, issue.message));
        }
        let msg = format!(
            "{} products validated, {} errors found",
            products.len(),
            issues.len()
        );
        if issues.is_empty() {
            print_success(&msg);
        } else {
            print_error(&msg);
        }
    }

    Ok(())
}
