#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod project;
pub mod resolver;

pub use builder::{BuildSummary, ManifestBuilder, build_manifests};
pub use config::GalleryConfig;
pub use error::{InvalidAddressError, ManifestError, ManifestResult, MapLoadError};
pub use models::{
  AssetId, AssetIndexEntry, AssetRecord, GlobalManifest, GlobalManifestMode, ManifestSet,
  NetworkManifest, NetworkName,
};
pub use project::GalleryLayout;
pub use resolver::{AddressMap, IconResolver, IconUrlTemplate, normalize_address};
