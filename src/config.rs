//! Build configuration.
//!
//! Everything the pipeline needs is carried in one `BuildConfig` value that
//! is handed to the assembler and generator; nothing is read from process
//! globals after loading.

use crate::error::{BuildError, Result};
use crate::styles::StyleOptions;
use crate::transform::patches::{default_patches, Patch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_SOURCE_URL: &str = "http://web.mta.info/developers/data/colors.csv";

/// Environment variable overriding `source_url`.
pub const ENV_SOURCE_URL: &str = "TRANSIT_STYLES_SOURCE_URL";
/// Environment variable overriding the output directory.
pub const ENV_OUT_DIR: &str = "TRANSIT_STYLES_OUT_DIR";

/// Upstream header names. Matched exactly, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub category: String,
    pub line: String,
    pub hex: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            category: "MTA Mode".to_string(),
            line: "Line/Branch".to_string(),
            hex: "RGB Hex".to_string(),
        }
    }
}

/// Where each artifact is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub css: PathBuf,
    pub less: PathBuf,
    pub scss: PathBuf,
}

impl OutputPaths {
    /// Standard file names under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            json: dir.join("mta-styles.json"),
            css: dir.join("mta-styles.css"),
            less: dir.join("mta-styles.less"),
            scss: dir.join("mta-styles.scss"),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir("dist")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub source_url: String,
    pub columns: ColumnNames,
    pub output: OutputPaths,
    pub style: StyleOptions,
    pub patches: Vec<Patch>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            columns: ColumnNames::default(),
            output: OutputPaths::default(),
            style: StyleOptions::default(),
            patches: default_patches(),
        }
    }
}

impl BuildConfig {
    /// Load a JSON config file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BuildError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| BuildError::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| BuildError::Config(e.to_string()))
    }

    /// Apply `TRANSIT_STYLES_*` overrides from the environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_SOURCE_URL).ok(),
            std::env::var(ENV_OUT_DIR).ok().map(PathBuf::from),
        );
    }

    /// Override the source URL and/or move every output into `out_dir`.
    pub fn apply_overrides(&mut self, source_url: Option<String>, out_dir: Option<PathBuf>) {
        if let Some(url) = source_url {
            self.source_url = url;
        }
        if let Some(dir) = out_dir {
            self.output = OutputPaths::in_dir(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.columns.category, "MTA Mode");
        assert_eq!(config.output.css, PathBuf::from("dist/mta-styles.css"));
        assert_eq!(config.patches.len(), 2);
        assert_eq!(config.style.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BuildConfig::from_json(
            r#"{"source_url": "http://localhost/colors.csv", "style": {"version": "9.9.9"}}"#,
        )
        .unwrap();
        assert_eq!(config.source_url, "http://localhost/colors.csv");
        assert_eq!(config.style.version, "9.9.9");
        assert!(config.style.important);
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.patches, default_patches());
    }

    #[test]
    fn test_empty_patch_list_disables_patches() {
        let config = BuildConfig::from_json(r#"{"patches": []}"#).unwrap();
        assert!(config.patches.is_empty());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = BuildConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styles.json");
        std::fs::write(&path, r#"{"style": {"important": false}}"#).unwrap();

        let config = BuildConfig::load(&path).unwrap();
        assert!(!config.style.important);

        let missing = BuildConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, BuildError::Config(_)));
    }

    #[test]
    fn test_out_dir_override() {
        let mut config = BuildConfig::default();
        config.apply_overrides(None, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.output.json, PathBuf::from("/tmp/out/mta-styles.json"));
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    }
}
