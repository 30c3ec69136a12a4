//! Configuration for vedic paths and presentation timing.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (VEDIC_HOME, VEDIC_CONTENT)
//! 2. Config file (.vedic/config.yaml)
//! 3. Defaults (~/.vedic, ~/.vedic/content)
//!
//! Config file discovery:
//! - Searches current directory and parents for .vedic/config.yaml
//! - `home` is relative to the .vedic/ directory, `content` to the project root

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::ListingKind;
use crate::presentation::{carousel, reveal};

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub carousel: Option<CarouselConfig>,
    #[serde(default)]
    pub reveal: Option<RevealConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .vedic/)
    pub home: Option<String>,
    /// Listing content directory (relative to the project root)
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarouselConfig {
    pub interval_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    pub threshold: Option<f64>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to vedic home
    pub home: PathBuf,
    /// Directory holding listing JSON files
    pub content_dir: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Carousel and reveal timing
    pub presentation: PresentationSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationSettings {
    pub carousel_interval: Duration,
    pub reveal_threshold: f64,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            carousel_interval: carousel::DEFAULT_INTERVAL,
            reveal_threshold: reveal::DEFAULT_THRESHOLD,
        }
    }
}

impl PresentationSettings {
    fn from_file(config: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            carousel_interval: config
                .carousel
                .as_ref()
                .and_then(|c| c.interval_seconds)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.carousel_interval),
            reveal_threshold: config
                .reveal
                .as_ref()
                .and_then(|r| r.threshold)
                .map(|t| t.clamp(0.0, 1.0))
                .unwrap_or(defaults.reveal_threshold),
        }
    }
}

impl ResolvedConfig {
    /// Listing file holding `ContentItem`s for a listing
    pub fn listing_file(&self, kind: ListingKind) -> PathBuf {
        self.content_dir.join(format!("{}.json", kind))
    }

    /// Exported backend rows for a listing, if it is backend-backed
    pub fn rows_file(&self, kind: ListingKind) -> Option<PathBuf> {
        kind.table_name()
            .map(|table| self.content_dir.join(format!("{}.rows.json", table)))
    }
}

/// Find config file by searching the given directory and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".vedic").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn find_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to a base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Merge env, an optional config file and defaults
fn resolve(
    default_home: PathBuf,
    config_file: Option<PathBuf>,
    env_home: Option<PathBuf>,
    env_content: Option<PathBuf>,
) -> Result<ResolvedConfig> {
    let (home, content_dir, presentation) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // .vedic/ and the project root above it
        let vedic_dir = config_path.parent().unwrap_or(Path::new("."));
        let base_dir = vedic_dir.parent().unwrap_or(Path::new("."));

        let home = env_home
            .or_else(|| config.paths.home.as_deref().map(|h| resolve_path(vedic_dir, h)))
            .unwrap_or(default_home);

        let content_dir = env_content
            .or_else(|| config.paths.content.as_deref().map(|c| resolve_path(base_dir, c)))
            .unwrap_or_else(|| home.join("content"));

        (home, content_dir, PresentationSettings::from_file(&config))
    } else {
        let home = env_home.unwrap_or(default_home);
        let content_dir = env_content.unwrap_or_else(|| home.join("content"));
        (home, content_dir, PresentationSettings::default())
    };

    Ok(ResolvedConfig {
        home,
        content_dir,
        config_file,
        presentation,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".vedic");

    resolve(
        default_home,
        find_config_file(),
        env_path("VEDIC_HOME"),
        env_path("VEDIC_CONTENT"),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration, bypassing the cache
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the vedic home directory
pub fn vedic_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}

/// Get the listing content directory
pub fn content_dir() -> Result<PathBuf> {
    Ok(config()?.content_dir.clone())
}

/// Get the presentation timing
pub fn presentation() -> Result<PresentationSettings> {
    Ok(config()?.presentation.clone())
}
