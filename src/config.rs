//! Configuration for folioflix.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (`--out`, `--content`)
//! 2. Environment variables (FOLIOFLIX_OUT, FOLIOFLIX_CONTENT)
//! 3. Config file (.folioflix/config.yaml)
//! 4. Defaults (./dist, ./public, built-in content)
//!
//! Config file discovery:
//! - Searches current directory and parents for .folioflix/config.yaml
//! - Paths in config file are relative to the project root (the parent of .folioflix/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::render::{SiteMeta, Theme};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const CONFIG_DIR: &str = ".folioflix";
const CONFIG_FILE: &str = "config.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Output directory for the generated site
    pub out: Option<String>,
    /// Static assets copied verbatim into the output (resume, images)
    pub static_dir: Option<String>,
    /// Content YAML replacing the built-in registry
    pub content: Option<String>,
}

/// Environment overrides
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub out: Option<String>,
    pub content: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            out: std::env::var("FOLIOFLIX_OUT").ok(),
            content: std::env::var("FOLIOFLIX_CONTENT").ok(),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory the site is written to
    pub out_dir: PathBuf,
    /// Static assets directory (may not exist)
    pub static_dir: PathBuf,
    /// Content file; `None` means built-in content
    pub content: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Document metadata
    pub site: SiteMeta,
    /// Theme colors
    pub theme: Theme,
}

impl ResolvedConfig {
    /// Apply command-line overrides
    pub fn with_overrides(mut self, out: Option<PathBuf>, content: Option<PathBuf>) -> Self {
        if let Some(out) = out {
            self.out_dir = out;
        }
        if let Some(content) = content {
            self.content = Some(content);
        }
        self
    }
}

/// Find config file by searching a directory and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    config
        .theme
        .validate()
        .with_context(|| format!("Invalid theme in config file: {}", path.display()))?;

    Ok(config)
}

/// Resolve a path that may be relative to a base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Combine config file, environment and defaults
fn resolve_config(
    start: &Path,
    config_file: Option<(PathBuf, ConfigFile)>,
    env: EnvOverrides,
) -> ResolvedConfig {
    let Some((config_path, config)) = config_file else {
        return ResolvedConfig {
            out_dir: env
                .out
                .map(PathBuf::from)
                .unwrap_or_else(|| start.join("dist")),
            static_dir: start.join("public"),
            content: env.content.map(PathBuf::from),
            config_file: None,
            site: SiteMeta::default(),
            theme: Theme::default(),
        };
    };

    // Project root is the parent of .folioflix/
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(start)
        .to_path_buf();

    let out_dir = if let Some(env_out) = env.out {
        PathBuf::from(env_out)
    } else if let Some(ref out) = config.paths.out {
        resolve_path(&base_dir, out)
    } else {
        base_dir.join("dist")
    };

    let static_dir = config
        .paths
        .static_dir
        .as_deref()
        .map(|p| resolve_path(&base_dir, p))
        .unwrap_or_else(|| base_dir.join("public"));

    let content = if let Some(env_content) = env.content {
        Some(PathBuf::from(env_content))
    } else {
        config
            .paths
            .content
            .as_deref()
            .map(|p| resolve_path(&base_dir, p))
    };

    ResolvedConfig {
        out_dir,
        static_dir,
        content,
        config_file: Some(config_path),
        site: config.site,
        theme: config.theme,
    }
}

/// Load configuration from all sources, discovering the config file from `start`
pub fn load_config_from(start: &Path) -> Result<ResolvedConfig> {
    let config_file = match find_config_file(start) {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Using config file {}", path.display());
            Some((path, config))
        }
        None => None,
    };

    Ok(resolve_config(start, config_file, EnvOverrides::from_env()))
}

fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_from(&cwd)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (used by watch mode after config edits)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
