use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::Path;

/// Write a default config into `dir`, refusing to clobber without `force`.
pub fn write_default_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, default_config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}
