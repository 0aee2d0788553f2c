//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

use create_three_core::domain::OverwriteDecision;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// There are no subcommands: every bare positional is the target directory,
/// so `create-three list` scaffolds into `./list`. Listing, completions and
/// config access are mutually exclusive flags.
#[derive(Debug, Parser)]
#[command(
    name     = "create-three",
    bin_name = "create-three",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a three.js starter project",
    long_about = "create-three copies a three.js starter template (vanilla or \
                  React Three Fiber) into a new directory and names the package \
                  after it.",
    after_help = "EXAMPLES:\n\
        \x20 create-three\n\
        \x20 create-three my-scene --template vanilla\n\
        \x20 create-three . -t react-three-fiber-ts --overwrite ignore\n\
        \x20 create-three --list --format json\n\
        \x20 create-three --config-get defaults.template\n\
        \x20 create-three --completions bash > /usr/share/bash-completion/completions/create-three",
)]
pub struct Cli {
    /// Flags available on every action.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Scaffolding arguments.
    #[command(flatten)]
    pub new: NewArgs,

    /// Alternative actions; at most one may be given.
    #[command(flatten)]
    pub actions: ActionArgs,

    /// Output format for `--list`.
    #[arg(
        long = "format",
        value_enum,
        value_name = "FORMAT",
        requires = "list",
        help_heading = "Actions",
        help = "Output format for --list [default: table]"
    )]
    pub format: Option<ListFormat>,

    /// Overwrite an existing file with `--config-init`.
    #[arg(
        short = 'f',
        long = "force",
        requires = "config_init",
        help_heading = "Actions",
        help = "Overwrite existing configuration with --config-init"
    )]
    pub force: bool,
}

impl Cli {
    /// The action selected by the flags; scaffolding when none is given.
    pub fn action(&self) -> Action {
        let actions = &self.actions;
        if actions.list {
            Action::List(self.format.unwrap_or_default())
        } else if let Some(shell) = actions.completions {
            Action::Completions(shell)
        } else if let Some(key) = &actions.config_get {
            Action::Config(ConfigAction::Get(key.clone()))
        } else if actions.config_list {
            Action::Config(ConfigAction::List)
        } else if actions.config_path {
            Action::Config(ConfigAction::Path)
        } else if actions.config_init {
            Action::Config(ConfigAction::Init { force: self.force })
        } else {
            Action::New
        }
    }
}

/// What a single run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Scaffold a project (the default).
    New,
    List(ListFormat),
    Completions(Shell),
    Config(ConfigAction),
}

/// Configuration actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the value of a dotted key.
    Get(String),
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init { force: bool },
}

// ── actions ───────────────────────────────────────────────────────────────────

/// Flags that replace scaffolding with another action.
#[derive(Debug, Clone, Default, Args)]
#[group(id = "action", multiple = false)]
pub struct ActionArgs {
    #[arg(long = "list", help_heading = "Actions", help = "List available templates")]
    pub list: bool,

    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help_heading = "Actions",
        help = "Print shell completions"
    )]
    pub completions: Option<Shell>,

    #[arg(
        long = "config-get",
        value_name = "KEY",
        help_heading = "Actions",
        help = "Print one configuration value, e.g. defaults.template"
    )]
    pub config_get: Option<String>,

    #[arg(long = "config-list", help_heading = "Actions", help = "Print all configuration values")]
    pub config_list: bool,

    #[arg(long = "config-path", help_heading = "Actions", help = "Print the configuration file path")]
    pub config_path: bool,

    #[arg(long = "config-init", help_heading = "Actions", help = "Write a default configuration file")]
    pub config_init: bool,
}

// ── new (default) ─────────────────────────────────────────────────────────────

/// Arguments for scaffolding a project.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Directory to create the project in.  `.` scaffolds into the current
    /// directory; omitted, the project name is asked for.
    #[arg(value_name = "TARGET_DIR", conflicts_with = "action", help = "Project directory")]
    pub target_dir: Option<String>,

    /// Template identifier.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template to use (vanilla, vanilla-ts, react-three-fiber, react-three-fiber-ts)"
    )]
    pub template: Option<String>,

    /// What to do when the target directory is not empty.
    #[arg(
        long = "overwrite",
        value_name = "MODE",
        value_enum,
        help = "Answer for a non-empty target directory"
    )]
    pub overwrite: Option<OverwriteMode>,

    /// Package name written to package.json.
    #[arg(
        long = "package-name",
        value_name = "NAME",
        help = "package.json name (defaults to the project name)"
    )]
    pub package_name: Option<String>,

    /// Directory containing the `template-*` folders.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory containing template-* folders"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Never prompt; missing answers become errors.
    #[arg(long = "no-interactive", help = "Disable interactive prompts")]
    pub no_interactive: bool,
}

/// Accepted `--overwrite` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverwriteMode {
    /// Remove existing files and continue.
    #[value(alias = "replace")]
    Yes,
    /// Cancel the operation.
    #[value(alias = "cancel")]
    No,
    /// Keep existing files and write the template over them.
    #[value(alias = "merge")]
    Ignore,
}

impl From<OverwriteMode> for OverwriteDecision {
    fn from(mode: OverwriteMode) -> Self {
        match mode {
            OverwriteMode::Yes => Self::ReplaceAll,
            OverwriteMode::No => Self::Cancel,
            OverwriteMode::Ignore => Self::MergeIgnoreExisting,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Output format for `--list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn bare_invocation_scaffolds() {
        let cli = Cli::parse_from(["create-three"]);
        assert_eq!(cli.action(), Action::New);
        assert!(cli.new.target_dir.is_none());
    }

    #[test]
    fn parse_scaffold_flags() {
        let cli = Cli::parse_from([
            "create-three",
            "my-scene",
            "-t",
            "vanilla",
            "--overwrite",
            "ignore",
            "--package-name",
            "scene",
            "--dry-run",
        ]);
        assert_eq!(cli.action(), Action::New);
        assert_eq!(cli.new.target_dir.as_deref(), Some("my-scene"));
        assert_eq!(cli.new.template.as_deref(), Some("vanilla"));
        assert_eq!(cli.new.overwrite, Some(OverwriteMode::Ignore));
        assert_eq!(cli.new.package_name.as_deref(), Some("scene"));
        assert!(cli.new.dry_run);
    }

    #[test]
    fn action_words_are_target_directories() {
        for name in ["list", "ls", "config", "completions", "help", "new"] {
            let cli = Cli::try_parse_from(["create-three", name])
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(cli.action(), Action::New, "{name}");
            assert_eq!(cli.new.target_dir.as_deref(), Some(name));
        }
    }

    #[test]
    fn overwrite_modes_map_to_decisions() {
        assert_eq!(OverwriteDecision::from(OverwriteMode::Yes), OverwriteDecision::ReplaceAll);
        assert_eq!(OverwriteDecision::from(OverwriteMode::No), OverwriteDecision::Cancel);
        assert_eq!(
            OverwriteDecision::from(OverwriteMode::Ignore),
            OverwriteDecision::MergeIgnoreExisting
        );
    }

    #[test]
    fn overwrite_aliases() {
        let cli = Cli::parse_from(["create-three", "x", "--overwrite", "replace"]);
        assert_eq!(cli.new.overwrite, Some(OverwriteMode::Yes));
    }

    #[test]
    fn unknown_overwrite_value_is_rejected() {
        assert!(Cli::try_parse_from(["create-three", "x", "--overwrite", "maybe"]).is_err());
    }

    #[test]
    fn list_flag() {
        let cli = Cli::parse_from(["create-three", "--list", "--format", "json"]);
        assert_eq!(cli.action(), Action::List(ListFormat::Json));

        let cli = Cli::parse_from(["create-three", "--list"]);
        assert_eq!(cli.action(), Action::List(ListFormat::Table));
    }

    #[test]
    fn config_flags() {
        let cli = Cli::parse_from(["create-three", "--config-get", "defaults.template"]);
        assert_eq!(
            cli.action(),
            Action::Config(ConfigAction::Get("defaults.template".into()))
        );

        let cli = Cli::parse_from(["create-three", "--config-init", "--force"]);
        assert_eq!(cli.action(), Action::Config(ConfigAction::Init { force: true }));
    }

    #[test]
    fn completions_flag() {
        let cli = Cli::parse_from(["create-three", "--completions", "zsh"]);
        assert_eq!(cli.action(), Action::Completions(Shell::Zsh));
    }

    #[test]
    fn actions_are_exclusive() {
        assert!(Cli::try_parse_from(["create-three", "--list", "--config-path"]).is_err());
        assert!(Cli::try_parse_from(["create-three", "my-scene", "--list"]).is_err());
    }

    #[test]
    fn action_options_need_their_action() {
        assert!(Cli::try_parse_from(["create-three", "--format", "json"]).is_err());
        assert!(Cli::try_parse_from(["create-three", "--force"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["create-three", "--quiet", "--verbose", "--list"]);
        assert!(result.is_err());
    }
}
