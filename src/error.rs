//! Error types shared by the manifest builder and the address resolver.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning, loading or writing icon manifests.
///
/// Every variant is fatal for a build run: a manifest with missing entries is
/// worse than no manifest at all.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// A directory or file could not be listed, read or written.
  #[error("failed to access {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// A descriptor file is not well-formed JSON.
  #[error("failed to parse {}: {source}", path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// A descriptor parsed but does not have the required shape.
  #[error("invalid descriptor {}: {reason}", path.display())]
  Schema {
    /// Path that caused the error.
    path: PathBuf,
    /// What was wrong with the descriptor.
    reason: String,
  },
  /// A network directory name cannot be used as a chain name.
  #[error("invalid network directory name {name:?}")]
  InvalidNetworkName {
    /// Offending directory name.
    name: String,
  },
  /// A manifest could not be serialised before writing.
  #[error("failed to serialise manifest for {}: {source}", path.display())]
  Serialize {
    /// Destination path of the manifest.
    path: PathBuf,
    /// Source serialisation error.
    source: serde_json::Error,
  },
}

impl ManifestError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }

  pub(crate) fn schema(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
    Self::Schema {
      path: path.into(),
      reason: reason.into(),
    }
  }
}

/// Result alias used throughout the manifest builder.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// A string handed to the resolver is not a syntactically valid address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAddressError {
  /// Address does not contain exactly 40 hex digits.
  #[error("invalid address {input:?}: expected 40 hex digits, found {found}")]
  Length {
    /// Address as supplied by the caller.
    input: String,
    /// Number of characters after the optional `0x` prefix.
    found: usize,
  },
  /// Address contains a character outside the hex alphabet.
  #[error("invalid address {input:?}: unexpected character {character:?}")]
  Character {
    /// Address as supplied by the caller.
    input: String,
    /// First offending character.
    character: char,
  },
  /// Mixed-case address whose casing does not match its checksum.
  #[error("invalid address {input:?}: checksum mismatch, expected {expected}")]
  Checksum {
    /// Address as supplied by the caller.
    input: String,
    /// Correctly checksummed form of the same address.
    expected: String,
  },
}

/// Errors that can occur while loading a bundled address map from disk.
#[derive(Debug, Error)]
pub enum MapLoadError {
  /// Failed to read the map file.
  #[error("failed to read {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the map file.
  #[error("failed to parse {}: {source}", path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}
