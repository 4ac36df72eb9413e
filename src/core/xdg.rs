//! XDG Base Directory support
//!
//! Resolves where pagesplit looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// Application directory name under the XDG base directories
const APP_DIR: &str = "pagesplit";

/// XDG directory structure for pagesplit
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories from the environment
    ///
    /// Priority order (highest to lowest):
    /// 1. `PAGESPLIT_CONFIG_DIR`
    /// 2. `XDG_CONFIG_HOME`
    /// 3. Platform default (`~/.config` on Linux)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("PAGESPLIT_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Config file path, `PAGESPLIT_CONFIG_FILE` taking precedence
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("PAGESPLIT_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
