//! Manifest generation broken into focused submodules for easier testing.

mod aggregation;
mod loading;
mod scanning;
mod writing;

pub use aggregation::aggregate_manifests;
pub use loading::{AssetRecordLoader, load_descriptor, parse_descriptor};
pub use scanning::{AssetDirectoryScanner, NetworkScan, list_subdirectories};
pub use writing::{ManifestWriter, write_json};
