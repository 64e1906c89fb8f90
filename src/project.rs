//! Borrowed view over the configured icon tree layout.

use std::path::{Path, PathBuf};

use crate::models::GlobalManifestMode;

/// Layout settings shared by the scanner, loader and writer.
#[derive(Debug, Clone, Copy)]
pub struct GalleryLayout<'a> {
  /// Folder inside each network directory holding one subdirectory per asset.
  pub assets_dir_name: &'a str,
  /// Descriptor file name inside every asset directory.
  pub descriptor_file: &'a str,
  /// File name of the per-network manifest.
  pub network_manifest_file: &'a str,
  /// Shape of the flattened global manifest.
  pub global_manifest_mode: GlobalManifestMode,
  /// Sort directory listings instead of keeping enumeration order.
  pub sort_entries: bool,
  /// Pretty-print written manifests.
  pub pretty: bool,
}

impl GalleryLayout<'_> {
  /// Folder listing the asset directories of a network.
  pub fn assets_dir(&self, network_dir: &Path) -> PathBuf {
    network_dir.join(self.assets_dir_name)
  }

  /// Descriptor path for a given asset directory name.
  pub fn descriptor_path(&self, network_dir: &Path, asset_dir: &str) -> PathBuf {
    self.assets_dir(network_dir).join(asset_dir).join(self.descriptor_file)
  }

  /// Destination of the manifest written into a network directory.
  pub fn network_manifest_path(&self, network_dir: &Path) -> PathBuf {
    network_dir.join(self.network_manifest_file)
  }
}

impl Default for GalleryLayout<'static> {
  fn default() -> Self {
    Self {
      assets_dir_name: "assets",
      descriptor_file: "info.json",
      network_manifest_file: "metadata.json",
      global_manifest_mode: GlobalManifestMode::Full,
      sort_entries: false,
      pretty: false,
    }
  }
}
