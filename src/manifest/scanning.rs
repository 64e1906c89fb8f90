//! Directory scanning for the per-network icon tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ManifestError, ManifestResult};
use crate::models::{NetworkDirectory, NetworkName};
use crate::project::GalleryLayout;

/// Enumerates network directories and the asset directories inside each of them.
#[derive(Debug, Clone)]
pub struct AssetDirectoryScanner<'a> {
  root: PathBuf,
  layout: GalleryLayout<'a>,
}

impl<'a> AssetDirectoryScanner<'a> {
  /// Create a scanner over the directory holding one subdirectory per network.
  pub fn new(root: impl Into<PathBuf>, layout: GalleryLayout<'a>) -> Self {
    Self {
      root: root.into(),
      layout,
    }
  }

  /// List the networks under the root.
  ///
  /// The root listing happens eagerly so a missing root fails immediately; the `assets`
  /// folder of each network is only listed when the iterator reaches it.
  pub fn scan(&self) -> ManifestResult<NetworkScan<'a>> {
    let networks = list_subdirectories(&self.root, self.layout.sort_entries, true)?;
    Ok(NetworkScan {
      root: self.root.clone(),
      layout: self.layout,
      pending: networks.into_iter(),
    })
  }
}

/// Single-pass iterator over the networks found by [`AssetDirectoryScanner::scan`].
#[derive(Debug)]
pub struct NetworkScan<'a> {
  root: PathBuf,
  layout: GalleryLayout<'a>,
  pending: std::vec::IntoIter<String>,
}

impl Iterator for NetworkScan<'_> {
  type Item = ManifestResult<NetworkDirectory>;

  fn next(&mut self) -> Option<Self::Item> {
    let name = self.pending.next()?;
    Some(self.describe_network(name))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.pending.size_hint()
  }
}

impl NetworkScan<'_> {
  fn describe_network(&self, name: String) -> ManifestResult<NetworkDirectory> {
    let name = NetworkName::new(name)?;
    let path = self.root.join(name.as_str());
    let assets_dir = self.layout.assets_dir(&path);
    let assets = list_subdirectories(&assets_dir, self.layout.sort_entries, false)?;
    tracing::debug!(network = %name, assets = assets.len(), "scanned network");

    Ok(NetworkDirectory { name, path, assets })
  }
}

/// List the names of the subdirectories of `dir`.
///
/// Regular files are skipped, as are `.`-prefixed names when `skip_hidden` is set. Enumeration
/// order is preserved unless `sorted` is set.
pub fn list_subdirectories(
  dir: &Path,
  sorted: bool,
  skip_hidden: bool,
) -> ManifestResult<Vec<String>> {
  let entries = fs::read_dir(dir).map_err(|err| ManifestError::io(dir, err))?;
  let mut names = Vec::new();

  for entry in entries {
    let entry = entry.map_err(|err| ManifestError::io(dir, err))?;
    let name = entry.file_name().to_string_lossy().to_string();
    if skip_hidden && name.starts_with('.') {
      continue;
    }

    if !entry.path().is_dir() {
      continue;
    }

    names.push(name);
  }

  if sorted {
    names.sort();
  }

  Ok(names)
}
