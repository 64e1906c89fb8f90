//! Persisting generated manifests as JSON documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ManifestError, ManifestResult};
use crate::models::ManifestSet;
use crate::project::GalleryLayout;

/// Writes per-network manifests into their network directory and the global manifest to its
/// configured destination.
#[derive(Debug, Clone, Copy)]
pub struct ManifestWriter<'a> {
  layout: GalleryLayout<'a>,
}

impl<'a> ManifestWriter<'a> {
  /// Create a writer for the given layout.
  pub fn new(layout: GalleryLayout<'a>) -> Self {
    Self { layout }
  }

  /// Write every manifest in `set`, returning the paths written in order.
  ///
  /// Existing files are overwritten. A failure part-way leaves earlier files in place.
  pub fn write_all(&self, set: &ManifestSet, global_path: &Path) -> ManifestResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(set.networks.len() + 1);

    for manifest in &set.networks {
      let target = self.layout.network_manifest_path(&manifest.path);
      write_json(&target, &manifest.assets, self.layout.pretty)?;
      written.push(target);
    }

    write_json(global_path, &set.global, self.layout.pretty)?;
    written.push(global_path.to_path_buf());

    Ok(written)
  }
}

/// Serialise `value` to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> ManifestResult<()> {
  let mut bytes = if pretty {
    serde_json::to_vec_pretty(value)
  } else {
    serde_json::to_vec(value)
  }
  .map_err(|source| ManifestError::Serialize {
    path: path.to_path_buf(),
    source,
  })?;
  bytes.push(b'\n');

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(|err| ManifestError::io(parent, err))?;
  }

  fs::write(path, bytes).map_err(|err| ManifestError::io(path, err))?;
  tracing::debug!("wrote {}", path.display());
  Ok(())
}
