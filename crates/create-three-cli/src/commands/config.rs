//! `--config-*` actions: read and initialise configuration.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigAction,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config action.
pub fn execute(
    action: ConfigAction,
    config: &AppConfig,
    config_file: Option<&PathBuf>,
    output: &OutputManager,
) -> CliResult<()> {
    let path = config_file.cloned().unwrap_or_else(AppConfig::config_path);

    match action {
        ConfigAction::Get(key) => {
            let value = config.get(&key).ok_or_else(|| {
                CliError::config(format!(
                    "Unknown config key: '{key}' (expected one of: {})",
                    AppConfig::KEYS.join(", ")
                ))
            })?;
            println!("{value}");
        }

        ConfigAction::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(config)?)?;
        }

        ConfigAction::Path => {
            println!("{}", path.display());
        }

        ConfigAction::Init { force } => {
            if write_default(&path, force)? {
                output.success(&format!("Configuration created at {}", path.display()))?;
            } else {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
            }
        }
    }

    Ok(())
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Write the default configuration; `false` when a file exists and
/// `force` is off.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = to_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(path, toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────
