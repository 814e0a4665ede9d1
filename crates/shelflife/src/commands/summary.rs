use anyhow::Result;

use crate::cli::SummaryArgs;
use crate::context::RuntimeContext;
use crate::output::*;
use shelflife_core::format;
use shelflife_core::summary::summarize_selection;

pub fn run(ctx: &RuntimeContext, args: &SummaryArgs) -> Result<()> {
    let products = ctx.load_catalog()?;
    let selected = super::select(&products, &args.selection, ctx.now)?;
    let summary = summarize_selection(selected, ctx.now)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "summary",
            "evaluatedAt": ctx.now.to_rfc3339(),
            "search": args.selection.search,
            "tag": args.selection.tag,
            "summary": summary,
        }));
    } else {
        println!("{}", format::format_summary(&summary, ctx.currency()));
    }

    Ok(())
}
