//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CREATE_THREE_<SECTION>__<KEY>`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use create_three_core::domain::DEFAULT_TARGET_DIR;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CREATE_THREE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for new projects.
    pub defaults: Defaults,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// File logging.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Offered as the project name.
    pub target_dir: String,
    /// Initially highlighted template in the selection prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            target_dir: DEFAULT_TARGET_DIR.to_string(),
            template: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory containing the `template-*` folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used in the printed next steps.
    pub package_manager: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            package_manager: "npm".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// When set, a daily rolling log file is written here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the file and the environment on top of the
    /// built-in defaults.
    ///
    /// An explicit `--config` file must exist unless `create_missing` is set
    /// (`--config-init`); the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, create_missing: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), !create_missing),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-three.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "create-three", "create-three")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-three.toml"))
    }

    /// Look up a dotted key for `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.target_dir" => self.defaults.target_dir.clone(),
            "defaults.template" => self.defaults.template.clone().unwrap_or_default(),
            "templates.directory" => display_path(self.templates.directory.as_deref()),
            "output.no_color" => self.output.no_color.to_string(),
            "output.package_manager" => self.output.package_manager.clone(),
            "logging.directory" => display_path(self.logging.directory.as_deref()),
            _ => return None,
        };
        Some(value)
    }

    /// Every key [`get`](Self::get) understands.
    pub const KEYS: [&'static str; 6] = [
        "defaults.target_dir",
        "defaults.template",
        "templates.directory",
        "output.no_color",
        "output.package_manager",
        "logging.directory",
    ];
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
