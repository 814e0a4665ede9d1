use anyhow::Result;

use crate::cli::AlertsArgs;
use crate::context::RuntimeContext;
use crate::output::*;
use shelflife_core::alerts::{AlertKind, derive_alerts};
use shelflife_core::Tag;

pub fn run(ctx: &RuntimeContext, args: &AlertsArgs) -> Result<()> {
    let products = ctx.load_catalog()?;
    let window = args.window.unwrap_or(ctx.config.alerts.warning_window_days);
    let alerts = derive_alerts(&products, ctx.now, window, ctx.currency())?;

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "alerts",
            "warningWindowDays": window,
            "count": alerts.len(),
            "alerts": alerts,
        }));
    } else if alerts.is_empty() {
        print_success("No alerts.");
    } else {
        for alert in &alerts {
            let tag = match alert.kind {
                AlertKind::Critical | AlertKind::Emergency | AlertKind::Reminder => Tag::Critical,
                AlertKind::Warning => Tag::Warning,
            };
            let heading = match &alert.product_id {
                Some(id) => format!("{} [{id}]", alert.title),
                None => alert.title.clone(),
            };
            println!("{}", paint_tag(tag, &heading));
            println!("  {}", alert.message);
        }
    }

    Ok(())
}
