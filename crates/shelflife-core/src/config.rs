use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::ShelfLifeConfig;

const CONFIG_FILE: &str = "shelflife.config.yaml";

pub fn get_config_path(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_FILE)
}

/// Read the config in `cwd`, falling back to defaults when there is none.
pub fn read_config(cwd: &Path) -> Result<ShelfLifeConfig> {
    let config_path = get_config_path(cwd);
    let content = match fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ShelfLifeConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: ShelfLifeConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

pub fn write_config(config: &ShelfLifeConfig, cwd: &Path) -> Result<()> {
    let content = serde_yaml::to_string(config)?;
    fs::write(get_config_path(cwd), content)?;
    Ok(())
}

/// Catalog path from the config, resolved against `cwd`.
pub fn resolve_catalog_path(config: &ShelfLifeConfig, cwd: &Path) -> PathBuf {
    let path = Path::new(&config.catalog);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Write a default config unless one exists. Returns whether a file was written.
pub fn init_config(cwd: &Path) -> Result<bool> {
    if get_config_path(cwd).exists() {
        return Ok(false);
    }
    write_config(&ShelfLifeConfig::default(), cwd)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert_eq!(config.catalog, "catalog.json");
    }

    #[test]
    fn init_writes_then_preserves() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(init_config(tmp.path()).unwrap());

        let mut config = read_config(tmp.path()).unwrap();
        config.currency = "€".to_string();
        write_config(&config, tmp.path()).unwrap();

        assert!(!init_config(tmp.path()).unwrap());
        assert_eq!(read_config(tmp.path()).unwrap().currency, "€");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(get_config_path(tmp.path()), "alerts: [not, a, map]\n").unwrap();
        assert!(read_config(tmp.path()).is_err());
    }

    #[test]
    fn catalog_path_is_relative_to_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ShelfLifeConfig::default();
        assert_eq!(
            resolve_catalog_path(&config, tmp.path()),
            tmp.path().join("catalog.json")
        );
    }
}
