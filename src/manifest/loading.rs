//! Descriptor loading: one `info.json` becomes one [`AssetRecord`].

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde_json::Value;

use crate::error::{ManifestError, ManifestResult};
use crate::models::{AssetId, AssetRecord, LoadedNetwork, NetworkDirectory, NetworkName};
use crate::project::GalleryLayout;

/// Reads asset descriptors and tags them with the network they were found under.
#[derive(Debug, Clone, Copy)]
pub struct AssetRecordLoader<'a> {
  layout: GalleryLayout<'a>,
}

impl<'a> AssetRecordLoader<'a> {
  /// Create a loader for the given layout.
  pub fn new(layout: GalleryLayout<'a>) -> Self {
    Self { layout }
  }

  /// Load every descriptor of a network in parallel.
  ///
  /// Records come back in the order the scanner listed the asset directories. The first
  /// failing descriptor aborts the whole network.
  pub fn load_network(&self, network: &NetworkDirectory) -> ManifestResult<LoadedNetwork> {
    let records = network
      .assets
      .par_iter()
      .map(|asset_dir| {
        let descriptor = self.layout.descriptor_path(&network.path, asset_dir);
        load_descriptor(&descriptor, &network.name)
      })
      .collect::<ManifestResult<Vec<_>>>()?;

    Ok(LoadedNetwork {
      name: network.name.clone(),
      path: network.path.clone(),
      records,
    })
  }
}

/// Read and validate a single descriptor file.
pub fn load_descriptor(path: &Path, chain: &NetworkName) -> ManifestResult<AssetRecord> {
  let content = fs::read_to_string(path).map_err(|err| ManifestError::io(path, err))?;
  parse_descriptor(path, &content, chain)
}

/// Validate descriptor JSON and turn it into a record.
///
/// `id` must be a non-empty string. A `chain` field in the descriptor is replaced by the
/// enclosing network name.
pub fn parse_descriptor(
  path: &Path,
  content: &str,
  chain: &NetworkName,
) -> ManifestResult<AssetRecord> {
  let value: Value = serde_json::from_str(content).map_err(|source| ManifestError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  let Value::Object(mut fields) = value else {
    return Err(ManifestError::schema(path, "descriptor must be a JSON object"));
  };

  let id = match fields.shift_remove("id") {
    Some(Value::String(id)) => {
      AssetId::new(id).ok_or_else(|| ManifestError::schema(path, "`id` must not be empty"))?
    }
    Some(_) => return Err(ManifestError::schema(path, "`id` must be a string")),
    None => return Err(ManifestError::schema(path, "missing required field `id`")),
  };

  if let Some(declared) = fields.shift_remove("chain") {
    if declared.as_str() != Some(chain.as_str()) {
      tracing::warn!(
        "{} declares chain {declared}, using network {chain}",
        path.display()
      );
    }
  }

  Ok(AssetRecord {
    id,
    chain: chain.clone(),
    extra: fields,
  })
}
