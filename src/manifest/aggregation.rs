//! Pure assembly of loaded records into per-network and global manifests.

use crate::models::{GlobalManifest, GlobalManifestMode, LoadedNetwork, ManifestSet, NetworkManifest};

/// Build the per-network manifests and flatten them into the global manifest.
///
/// Networks are concatenated in the order given and records keep their loading order.
/// Identifiers repeated across networks are kept as distinct entries.
pub fn aggregate_manifests(networks: Vec<LoadedNetwork>, mode: GlobalManifestMode) -> ManifestSet {
  let manifests: Vec<NetworkManifest> = networks
    .into_iter()
    .map(|network| {
      let index = network.records.iter().map(|record| record.to_index_entry()).collect();
      NetworkManifest {
        network: network.name,
        path: network.path,
        assets: network.records,
        index,
      }
    })
    .collect();

  let global = match mode {
    GlobalManifestMode::Full => GlobalManifest::Full(
      manifests
        .iter()
        .flat_map(|manifest| manifest.assets.iter().cloned())
        .collect(),
    ),
    GlobalManifestMode::Index => GlobalManifest::Index(
      manifests
        .iter()
        .flat_map(|manifest| manifest.index.iter().cloned())
        .collect(),
    ),
  };

  ManifestSet {
    networks: manifests,
    global,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{AssetId, AssetRecord, NetworkName};
  use serde_json::{Map, json};
  use std::path::PathBuf;

  fn record(id: &str, chain: &str, name: &str) -> AssetRecord {
    let mut extra = Map::new();
    extra.insert("name".into(), json!(name));
    AssetRecord {
      id: AssetId::new(id).unwrap(),
      chain: NetworkName::new(chain).unwrap(),
      extra,
    }
  }

  fn network(chain: &str, records: Vec<AssetRecord>) -> LoadedNetwork {
    LoadedNetwork {
      name: NetworkName::new(chain).unwrap(),
      path: PathBuf::from(chain),
      records,
    }
  }

  fn sample() -> Vec<LoadedNetwork> {
    vec![
      network("arbitrum", vec![record("0xA", "arbitrum", "A"), record("0xB", "arbitrum", "B")]),
      network("empty", Vec::new()),
      network("bsc", vec![record("0xA", "bsc", "A on bsc")]),
    ]
  }

  #[test]
  fn global_length_is_sum_of_networks() {
    let set = aggregate_manifests(sample(), GlobalManifestMode::Full);
    let total: usize = set.networks.iter().map(|n| n.assets.len()).sum();
    assert_eq!(set.global.len(), total);
    assert_eq!(total, 3);
  }

  #[test]
  fn concatenates_networks_in_discovery_order_without_dedup() {
    let set = aggregate_manifests(sample(), GlobalManifestMode::Index);
    let GlobalManifest::Index(entries) = &set.global else {
      panic!("expected index manifest");
    };

    let pairs: Vec<(&str, &str)> = entries
      .iter()
      .map(|entry| (entry.id.as_str(), entry.chain.as_str()))
      .collect();
    assert_eq!(pairs, vec![("0xA", "arbitrum"), ("0xB", "arbitrum"), ("0xA", "bsc")]);
  }

  #[test]
  fn per_network_index_mirrors_full_records() {
    let set = aggregate_manifests(sample(), GlobalManifestMode::Full);
    for manifest in &set.networks {
      assert_eq!(manifest.assets.len(), manifest.index.len());
      for (record, entry) in manifest.assets.iter().zip(&manifest.index) {
        assert_eq!(record.id, entry.id);
        assert_eq!(entry.chain, manifest.network);
      }
    }
  }

  #[test]
  fn full_mode_keeps_descriptor_fields() {
    let set = aggregate_manifests(sample(), GlobalManifestMode::Full);
    let GlobalManifest::Full(records) = &set.global else {
      panic!("expected full manifest");
    };
    assert_eq!(records[2].extra["name"], json!("A on bsc"));
    let chains: Vec<&str> = records.iter().map(|record| record.chain.as_str()).collect();
    assert_eq!(chains, vec!["arbitrum", "arbitrum", "bsc"]);
  }
}
