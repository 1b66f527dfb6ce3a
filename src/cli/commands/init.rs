//! Init and Config commands.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};

use crate::config::Settings;
use crate::log_event;

/// Run init command - create the configuration file under `root`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_init(root: &Path, force: bool) -> Result<PathBuf> {
    let config_path = Settings::config_path(root);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at: {}\nUse --force to overwrite",
            config_path.display()
        );
    }

    let path = Settings::init_config_file(root).map_err(|e| anyhow!("{e}"))?;
    log_event!("cli", "initialized", "{}", path.display());
    println!("Created configuration file at: {}", path.display());
    println!("Edit this file to customize your settings.");
    Ok(path)
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_existing_file_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = run_init(temp_dir.path(), false).unwrap();

        std::fs::write(&path, "[calculator]\nname = \"Oi\"\n").unwrap();
        let err = run_init(temp_dir.path(), false).unwrap_err();
        let message = err.to_string();
        assert_eq!(message.matches("already exists").count(), 1);
        assert_eq!(Settings::load_from(&path).unwrap().calculator.name, "Oi");

        run_init(temp_dir.path(), true).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().calculator.name, "Calc");
    }
}
