//! Resolve a chain address to the URL of its icon.
//!
//! Resolution normalises the address first, so malformed input is rejected before the map is
//! consulted. A well-formed address that is not in the map resolves to `None`.

mod address;
mod lookup;
mod url;

pub use address::{NormalizedAddress, normalize_address};
pub use lookup::AddressMap;
pub use url::IconUrlTemplate;

use crate::error::InvalidAddressError;

/// Immutable address map paired with the template its URLs are rendered with.
#[derive(Debug, Clone, Default)]
pub struct IconResolver {
  map: AddressMap,
  template: IconUrlTemplate,
}

impl IconResolver {
  /// Create a resolver over a bundled map.
  pub fn new(map: AddressMap, template: IconUrlTemplate) -> Self {
    Self { map, template }
  }

  /// Icon URL for `address`, or `None` when the address is valid but unknown.
  pub fn resolve(&self, address: &str) -> Result<Option<String>, InvalidAddressError> {
    let normalized = normalize_address(address)?;
    Ok(
      self
        .map
        .find(&normalized)
        .map(|entry| self.template.render(entry)),
    )
  }
}
