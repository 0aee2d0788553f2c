//! Locating the directory that holds the bundled `template-*` folders.
//!
//! # Resolution order
//!
//! 1. **`--templates-dir`**: used as given, never probed.
//! 2. **`templates.directory`** from the config file.
//! 3. **`$CREATE_THREE_TEMPLATES_DIR`**.
//! 4. **`<exe-dir>/..`**: installation root when the binary sits in `bin/`.
//! 5. **`<exe-dir>`**.
//! 6. **`<exe-dir>/../templates`**.
//! 7. **`./templates`**: development checkout.
//!
//! Candidates 2 to 7 are probed in order; the first one containing at least
//! one `template-*` directory wins.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Environment override for the template root.
pub const TEMPLATES_DIR_ENV: &str = "CREATE_THREE_TEMPLATES_DIR";

const TEMPLATE_DIR_PREFIX: &str = "template-";

#[derive(Debug, Clone, Default)]
pub struct TemplateRoot {
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
    env: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
    cwd: PathBuf,
}

impl TemplateRoot {
    /// Pick up the environment override, the executable location and the
    /// current directory.
    pub fn from_env() -> Self {
        Self {
            env: std::env::var_os(TEMPLATES_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            exe_dir: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf)),
            cwd: std::env::current_dir().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn with_explicit(mut self, dir: Option<PathBuf>) -> Self {
        self.explicit = dir;
        self
    }

    pub fn with_configured(mut self, dir: Option<PathBuf>) -> Self {
        self.configured = dir;
        self
    }

    pub fn with_env(mut self, dir: Option<PathBuf>) -> Self {
        self.env = dir;
        self
    }

    pub fn with_exe_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.exe_dir = dir;
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Probed locations, in priority order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(6);
        paths.extend(self.configured.iter().map(|p| self.cwd.join(p)));
        paths.extend(self.env.iter().map(|p| self.cwd.join(p)));
        if let Some(exe_dir) = &self.exe_dir {
            if let Some(parent) = exe_dir.parent() {
                paths.push(parent.to_path_buf());
                paths.push(exe_dir.clone());
                paths.push(parent.join("templates"));
            } else {
                paths.push(exe_dir.clone());
            }
        }
        paths.push(self.cwd.join("templates"));
        paths
    }

    /// The first candidate that holds templates.
    pub fn discover(&self) -> Option<PathBuf> {
        if let Some(explicit) = &self.explicit {
            let dir = self.cwd.join(explicit);
            debug!(path = %dir.display(), "Using explicit templates directory");
            return Some(dir);
        }

        for candidate in self.candidates() {
            debug!(path = %candidate.display(), "Checking candidate templates path");
            if has_templates(&candidate) {
                info!(path = %candidate.display(), "Templates directory found");
                return Some(candidate);
            }
        }
        None
    }

    /// Like [`discover`](Self::discover), falling back to `./templates` so
    /// that later errors name a concrete location.
    pub fn resolve(&self) -> PathBuf {
        self.discover().unwrap_or_else(|| {
            warn!(
                "No templates directory found; checked --templates-dir, config, \
                 ${TEMPLATES_DIR_ENV}, the executable's directory and ./templates"
            );
            self.cwd.join("templates")
        })
    }
}

/// `true` when `dir` contains at least one `template-*` directory.
pub fn has_templates(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries.filter_map(Result::ok).any(|entry| {
        entry.file_name().to_string_lossy().starts_with(TEMPLATE_DIR_PREFIX)
            && entry.path().is_dir()
    })
}
