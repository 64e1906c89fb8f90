//! Build orchestrator: scan the icon tree, load descriptors, aggregate and write manifests.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::GalleryConfig;
use crate::error::ManifestResult;
use crate::manifest::{AssetDirectoryScanner, AssetRecordLoader, ManifestWriter, aggregate_manifests};
use crate::models::{LoadedNetwork, ManifestSet, NetworkDirectory};
use crate::project::GalleryLayout;

/// Outcome of a complete generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
  /// Number of networks discovered.
  pub networks: usize,
  /// Number of assets across every network.
  pub assets: usize,
  /// Manifest files written, per-network first and the global manifest last.
  pub written: Vec<PathBuf>,
}

/// High-level helper for regenerating every manifest of an icon tree.
#[derive(Debug, Clone)]
pub struct ManifestBuilder<'a> {
  root: PathBuf,
  layout: GalleryLayout<'a>,
}

impl<'a> ManifestBuilder<'a> {
  /// Create a builder over the directory holding one subdirectory per network.
  pub fn new(root: impl Into<PathBuf>, layout: GalleryLayout<'a>) -> Self {
    Self {
      root: root.into(),
      layout,
    }
  }

  /// Create a builder from project configuration.
  pub fn from_config(config: &'a GalleryConfig, project_dir: &Path) -> Self {
    Self::new(config.blockchains_dir_path(project_dir), config.to_layout())
  }

  /// Scan and load the icon tree, returning every manifest without touching the disk.
  pub fn build(&self) -> ManifestResult<ManifestSet> {
    let networks = AssetDirectoryScanner::new(&self.root, self.layout)
      .scan()?
      .collect::<ManifestResult<Vec<NetworkDirectory>>>()?;

    let loader = AssetRecordLoader::new(self.layout);
    let loaded = networks
      .par_iter()
      .map(|network| loader.load_network(network))
      .collect::<ManifestResult<Vec<LoadedNetwork>>>()?;

    Ok(aggregate_manifests(loaded, self.layout.global_manifest_mode))
  }

  /// Write a previously built manifest set.
  pub fn write(&self, set: &ManifestSet, global_path: &Path) -> ManifestResult<Vec<PathBuf>> {
    ManifestWriter::new(self.layout).write_all(set, global_path)
  }

  /// Build and write in one go.
  pub fn generate(&self, global_path: &Path) -> ManifestResult<BuildSummary> {
    let set = self.build()?;
    let written = self.write(&set, global_path)?;
    let summary = BuildSummary {
      networks: set.networks.len(),
      assets: set.global.len(),
      written,
    };

    tracing::info!(
      networks = summary.networks,
      assets = summary.assets,
      "generated manifests under {}",
      self.root.display()
    );
    Ok(summary)
  }
}

/// Build every manifest for the icon tree under `root`.
pub fn build_manifests(root: &Path, layout: GalleryLayout<'_>) -> ManifestResult<ManifestSet> {
  ManifestBuilder::new(root, layout).build()
}
