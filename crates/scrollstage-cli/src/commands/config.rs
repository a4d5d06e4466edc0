use std::path::{Path, PathBuf};

use anyhow::Result;

use scrollstage_core::AppConfig;

fn resolve(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf).unwrap_or_else(AppConfig::config_path)
}

pub fn init(path: Option<&Path>) -> Result<()> {
    let path = resolve(path);

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve(path).display());
    Ok(())
}
