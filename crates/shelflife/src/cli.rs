use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shelflife",
    about = "Track perishable inventory freshness and what to do about it",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output as structured JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Catalog file (JSON array or JSONL). Overrides the config.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Evaluate as of this instant (RFC 3339 or YYYY-MM-DD) instead of now.
    #[arg(long, global = true)]
    pub now: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default shelflife.config.yaml
    Init,

    /// List products with their freshness tag
    List(ListArgs),

    /// Show one product's freshness and recommended actions
    Show(ShowArgs),

    /// Show statistics for the catalog or a filtered part of it
    Summary(SummaryArgs),

    /// Show expiry alerts
    Alerts(AlertsArgs),

    /// Check the catalog for malformed products
    Validate,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::List(_) => "list",
            Self::Show(_) => "show",
            Self::Summary(_) => "summary",
            Self::Alerts(_) => "alerts",
            Self::Validate => "validate",
        }
    }
}

// ── Argument structs ───────────────────────────────────────────────────────

#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Case-insensitive search over name, category, location and description
    #[arg(long)]
    pub search: Option<String>,

    /// Only products with this tag
    #[arg(long, value_parser = ["critical", "warning", "good", "red", "yellow", "green"])]
    pub tag: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct AlertsArgs {
    /// Days-until-expiry window for warning alerts (defaults to the config value)
    #[arg(long)]
    pub window: Option<u32>,
}
