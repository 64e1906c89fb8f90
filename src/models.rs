//! Data structures produced while building icon manifests.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ManifestError;

/// Name of a blockchain network, taken from its directory under the blockchains root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NetworkName(String);

impl NetworkName {
  /// Validate a directory name as a network name.
  pub fn new(name: impl Into<String>) -> Result<Self, ManifestError> {
    let name = name.into();
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
      return Err(ManifestError::InvalidNetworkName { name });
    }
    Ok(Self(name))
  }

  /// Borrow the network name.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for NetworkName {
  type Error = ManifestError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<NetworkName> for String {
  fn from(value: NetworkName) -> Self {
    value.0
  }
}

impl fmt::Display for NetworkName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Chain-specific identifier of an asset, usually its contract address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
  /// Wrap a non-empty identifier.
  pub fn new(id: impl Into<String>) -> Option<Self> {
    let id = id.into();
    (!id.is_empty()).then_some(Self(id))
  }

  /// Borrow the identifier.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for AssetId {
  type Error = &'static str;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value).ok_or("asset id must not be empty")
  }
}

impl From<AssetId> for String {
  fn from(value: AssetId) -> Self {
    value.0
  }
}

impl fmt::Display for AssetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// One icon entry loaded from an `info.json` descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
  /// Identifier read from the descriptor.
  pub id: AssetId,
  /// Network the descriptor was found under.
  pub chain: NetworkName,
  /// Remaining descriptor fields, passed through untouched.
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl AssetRecord {
  /// Lightweight `{id, chain}` projection of the record.
  pub fn to_index_entry(&self) -> AssetIndexEntry {
    AssetIndexEntry {
      id: self.id.clone(),
      chain: self.chain.clone(),
    }
  }
}

/// Lookup table row pairing an asset identifier with its network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetIndexEntry {
  /// Asset identifier.
  pub id: AssetId,
  /// Network holding the asset.
  pub chain: NetworkName,
}

/// Network directory discovered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDirectory {
  /// Network name derived from the directory.
  pub name: NetworkName,
  /// Absolute or root-relative path of the network directory.
  pub path: PathBuf,
  /// Names of the asset subdirectories, in enumeration order.
  pub assets: Vec<String>,
}

/// Records loaded for a single network, in scanner order.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedNetwork {
  /// Network the records belong to.
  pub name: NetworkName,
  /// Directory the per-network manifest is written into.
  pub path: PathBuf,
  /// Loaded records.
  pub records: Vec<AssetRecord>,
}

/// Manifests derived for a single network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkManifest {
  /// Network the manifest describes.
  pub network: NetworkName,
  /// Directory the manifest is written into.
  pub path: PathBuf,
  /// Full records.
  pub assets: Vec<AssetRecord>,
  /// `{id, chain}` projections in the same order as `assets`.
  pub index: Vec<AssetIndexEntry>,
}

/// Shape of the flattened global manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalManifestMode {
  /// Full descriptor records, as consumed by the gallery.
  #[default]
  Full,
  /// `{id, chain}` pairs, as bundled with the address resolver.
  Index,
}

/// Flattened manifest spanning every network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GlobalManifest {
  /// Full descriptor records.
  Full(Vec<AssetRecord>),
  /// `{id, chain}` pairs.
  Index(Vec<AssetIndexEntry>),
}

impl GlobalManifest {
  /// Number of entries in the manifest.
  pub fn len(&self) -> usize {
    match self {
      Self::Full(records) => records.len(),
      Self::Index(entries) => entries.len(),
    }
  }

  /// Returns `true` when no network contributed any asset.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Complete output of a build run, before anything is written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSet {
  /// Per-network manifests in discovery order.
  pub networks: Vec<NetworkManifest>,
  /// Flattened manifest across all networks.
  pub global: GlobalManifest,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn rejects_unusable_network_names() {
    assert!(NetworkName::new("ethereum").is_ok());
    assert!(NetworkName::new("").is_err());
    assert!(NetworkName::new(".git").is_err());
    assert!(NetworkName::new("a/b").is_err());
  }

  #[test]
  fn serialises_records_with_identity_first() {
    let mut extra = Map::new();
    extra.insert("symbol".into(), json!("USDT"));
    extra.insert("decimals".into(), json!(6));
    let record = AssetRecord {
      id: AssetId::new("0xabc").unwrap(),
      chain: NetworkName::new("arbitrum").unwrap(),
      extra,
    };

    let text = serde_json::to_string(&record).unwrap();
    assert_eq!(
      text,
      r#"{"id":"0xabc","chain":"arbitrum","symbol":"USDT","decimals":6}"#
    );
  }

  #[test]
  fn index_entries_ignore_descriptor_fields() {
    let entry: AssetIndexEntry =
      serde_json::from_str(r#"{"id":"0xabc","chain":"bsc","name":"Token"}"#).unwrap();
    assert_eq!(entry.id.as_str(), "0xabc");
    assert_eq!(entry.chain.as_str(), "bsc");
  }

  #[test]
  fn empty_ids_fail_to_deserialise() {
    let result = serde_json::from_str::<AssetIndexEntry>(r#"{"id":"","chain":"bsc"}"#);
    assert!(result.is_err());
  }
}
