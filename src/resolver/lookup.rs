//! Bundled `{id, chain}` table and the first-match lookup over it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::MapLoadError;
use crate::models::{AssetIndexEntry, GlobalManifest};
use crate::resolver::address::NormalizedAddress;

/// Global index manifest prepared for address lookups.
///
/// Duplicated ids (the same address on several chains) resolve to the entry that comes first
/// in manifest order.
#[derive(Debug, Clone, Default)]
pub struct AddressMap {
  entries: Vec<AssetIndexEntry>,
  first_position: HashMap<String, usize>,
}

impl AddressMap {
  /// Index the given entries, keeping their order.
  pub fn from_entries(entries: Vec<AssetIndexEntry>) -> Self {
    let mut first_position = HashMap::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
      first_position
        .entry(entry.id.as_str().to_string())
        .or_insert(position);
    }

    Self {
      entries,
      first_position,
    }
  }

  /// Parse a JSON array of `{id, chain}` objects. Extra fields, as found in full manifests,
  /// are ignored.
  pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
    let entries: Vec<AssetIndexEntry> = serde_json::from_str(json)?;
    Ok(Self::from_entries(entries))
  }

  /// Load a map written by the manifest builder.
  pub fn load(path: &Path) -> Result<Self, MapLoadError> {
    let content = fs::read_to_string(path).map_err(|source| MapLoadError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json_str(&content).map_err(|source| MapLoadError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// First entry whose id is exactly `id`.
  pub fn find_id(&self, id: &str) -> Option<&AssetIndexEntry> {
    self
      .first_position
      .get(id)
      .and_then(|position| self.entries.get(*position))
  }

  /// First entry matching the checksummed form, falling back to the lowercased input.
  pub fn find(&self, address: &NormalizedAddress) -> Option<&AssetIndexEntry> {
    self
      .find_id(address.checksummed())
      .or_else(|| self.find_id(address.lowercase()))
  }

  /// Number of entries, duplicates included.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` for an empty map.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl From<&GlobalManifest> for AddressMap {
  fn from(manifest: &GlobalManifest) -> Self {
    let entries = match manifest {
      GlobalManifest::Full(records) => records.iter().map(|record| record.to_index_entry()).collect(),
      GlobalManifest::Index(entries) => entries.clone(),
    };
    Self::from_entries(entries)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolver::address::normalize_address;
  use tempfile::tempdir;

  const MAP: &str = r#"[
    {"id":"0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9","chain":"arbitrum"},
    {"id":"0x55d398326f99059ff775485246999027b3197955","chain":"bsc"},
    {"id":"0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9","chain":"ethereum"}
  ]"#;

  #[test]
  fn first_entry_wins_for_duplicate_ids() {
    let map = AddressMap::from_json_str(MAP).unwrap();
    let address = normalize_address("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9").unwrap();
    assert_eq!(map.find(&address).unwrap().chain.as_str(), "arbitrum");
    assert_eq!(map.len(), 3);
  }

  #[test]
  fn lowercase_ids_match_lowercased_input() {
    let map = AddressMap::from_json_str(MAP).unwrap();
    let address = normalize_address("0x55d398326f99059fF775485246999027B3197955").unwrap();
    assert_eq!(map.find(&address).unwrap().chain.as_str(), "bsc");
  }

  #[test]
  fn checksum_match_takes_precedence_over_lowercase_match() {
    let map = AddressMap::from_json_str(
      r#"[
        {"id":"0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9","chain":"optimism"},
        {"id":"0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9","chain":"arbitrum"}
      ]"#,
    )
    .unwrap();
    let address = normalize_address("0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9").unwrap();
    assert_eq!(map.find(&address).unwrap().chain.as_str(), "arbitrum");
  }

  #[test]
  fn absent_address_is_none() {
    let map = AddressMap::from_json_str(MAP).unwrap();
    let address = normalize_address("0x0000000000000000000000000000000000000001").unwrap();
    assert!(map.find(&address).is_none());
  }

  #[test]
  fn load_reports_path_on_failure() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("map.json");
    assert!(matches!(AddressMap::load(&path), Err(MapLoadError::Io { .. })));

    fs::write(&path, "{}").unwrap();
    assert!(matches!(AddressMap::load(&path), Err(MapLoadError::Parse { .. })));

    fs::write(&path, MAP).unwrap();
    assert_eq!(AddressMap::load(&path).unwrap().len(), 3);
  }
}
