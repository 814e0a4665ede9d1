use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use shelflife_core::types::{Product, ShelfLifeConfig};
use shelflife_core::{catalog, config, dates};

use crate::cli::GlobalArgs;

#[derive(Debug)]
pub struct RuntimeContext {
    pub json: bool,
    pub cwd: PathBuf,
    pub config: ShelfLifeConfig,
    pub catalog_path: PathBuf,
    /// Evaluation instant shared by every computation in this run.
    pub now: DateTime<Utc>,
}

impl RuntimeContext {
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let config = config::read_config(&cwd).with_context(|| {
            format!("failed to read {}", config::get_config_path(&cwd).display())
        })?;

        let catalog_path = match &global.catalog {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => cwd.join(path),
            None => config::resolve_catalog_path(&config, &cwd),
        };

        let now = match &global.now {
            Some(raw) => dates::parse_timestamp(raw)?,
            None => Utc::now(),
        };

        Ok(Self {
            json: global.json,
            cwd,
            config,
            catalog_path,
            now,
        })
    }

    pub fn load_catalog(&self) -> Result<Vec<Product>> {
        catalog::load_catalog(&self.catalog_path)
            .with_context(|| format!("failed to load catalog {}", self.catalog_path.display()))
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}
