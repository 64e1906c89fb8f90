//! Project configuration loader describing the icon tree layout and manifest outputs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::GlobalManifestMode;
use crate::project::GalleryLayout;
use crate::resolver::IconUrlTemplate;

/// File name searched for in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "token-icons.config.json";

/// Discoverable project configuration describing filesystem layout and output paths.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
  /// Relative path from the project directory to the per-network directories.
  pub blockchains_dir: String,
  /// Folder inside each network directory holding one subdirectory per asset.
  pub assets_dir_name: String,
  /// Descriptor file name inside every asset directory.
  pub descriptor_file: String,
  /// File name of the manifest written at the top of each network directory.
  pub network_manifest_file: String,
  /// Relative path from the project directory to the flattened global manifest.
  pub global_manifest_path: String,
  /// Whether the global manifest holds full records or `{id, chain}` pairs.
  pub global_manifest_mode: GlobalManifestMode,
  /// Sort network and asset directory names instead of keeping enumeration order.
  pub sort_entries: bool,
  /// Pretty-print written manifests.
  pub pretty: bool,
  /// Location icons are served from.
  pub url_template: IconUrlTemplate,
}

impl Default for GalleryConfig {
  fn default() -> Self {
    Self {
      blockchains_dir: "assets/blockchains".into(),
      assets_dir_name: "assets".into(),
      descriptor_file: "info.json".into(),
      network_manifest_file: "metadata.json".into(),
      global_manifest_path: "assets/data/metadata.json".into(),
      global_manifest_mode: GlobalManifestMode::Full,
      sort_entries: false,
      pretty: false,
      url_template: IconUrlTemplate::default(),
    }
  }
}

impl GalleryConfig {
  /// Attempt to load configuration from the provided project directory.
  ///
  /// A missing file yields the defaults. A file that cannot be read or parsed is reported and
  /// also falls back to the defaults.
  pub fn discover(project_dir: &Path) -> Self {
    let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.exists() {
      return Self::default();
    }

    match Self::from_path(&candidate) {
      Ok(config) => config,
      Err(err) => {
        tracing::warn!("ignoring {}: {err:#}", candidate.display());
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse config {}", path.display()))
  }

  /// Borrowing view of the layout-related settings.
  pub fn to_layout(&self) -> GalleryLayout<'_> {
    GalleryLayout {
      assets_dir_name: &self.assets_dir_name,
      descriptor_file: &self.descriptor_file,
      network_manifest_file: &self.network_manifest_file,
      global_manifest_mode: self.global_manifest_mode,
      sort_entries: self.sort_entries,
      pretty: self.pretty,
    }
  }

  /// Directory holding one subdirectory per network.
  pub fn blockchains_dir_path(&self, project_dir: &Path) -> PathBuf {
    project_dir.join(&self.blockchains_dir)
  }

  /// Destination of the flattened global manifest.
  pub fn global_manifest_file(&self, project_dir: &Path) -> PathBuf {
    project_dir.join(&self.global_manifest_path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn discover_defaults_when_file_is_missing() {
    let temp = tempdir().unwrap();
    assert_eq!(GalleryConfig::discover(temp.path()), GalleryConfig::default());
  }

  #[test]
  fn discover_defaults_when_file_is_malformed() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
    assert_eq!(GalleryConfig::discover(temp.path()), GalleryConfig::default());
  }

  #[test]
  fn partial_files_keep_remaining_defaults() {
    let temp = tempdir().unwrap();
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"global_manifest_mode":"index","global_manifest_path":"package/src/map.json","url_template":{"branch":"dev"}}"#,
    )
    .unwrap();

    let config = GalleryConfig::discover(temp.path());
    assert_eq!(config.global_manifest_mode, GlobalManifestMode::Index);
    assert_eq!(
      config.global_manifest_file(temp.path()),
      temp.path().join("package/src/map.json")
    );
    assert_eq!(config.descriptor_file, "info.json");
    assert_eq!(config.url_template.branch, "dev");
    assert_eq!(config.url_template.org, "albertocevallos");
  }

  #[test]
  fn from_path_reports_missing_files() {
    let temp = tempdir().unwrap();
    let err = GalleryConfig::from_path(&temp.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
  }
}
