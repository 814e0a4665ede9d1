use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::*;
use shelflife_core::config;

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let created = config::init_config(&ctx.cwd)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "success": true,
            "command": "init",
            "created": created,
        }));
    } else if created {
        print_success("Initialized shelflife.config.yaml.");
    } else {
        println!("shelflife.config.yaml already exists, left unchanged.");
    }

    Ok(())
}
