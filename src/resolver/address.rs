//! Address syntax checks and EIP-55 checksum normalisation.

use std::str::FromStr;
use std::sync::OnceLock;

use alloy_primitives::Address;
use regex::Regex;

use crate::error::InvalidAddressError;

fn address_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").expect("invalid address regex"))
}

/// The two spellings of an address that manifest ids are compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAddress {
  checksummed: String,
  lowercase: String,
}

impl NormalizedAddress {
  /// Mixed-case checksum form, always `0x`-prefixed.
  pub fn checksummed(&self) -> &str {
    &self.checksummed
  }

  /// The caller's input, lowercased.
  ///
  /// The `0x` prefix is not added, so unprefixed input only matches unprefixed ids.
  pub fn lowercase(&self) -> &str {
    &self.lowercase
  }
}

/// Validate `input` and compute its checksum form.
///
/// All-lowercase and all-uppercase hex digits are accepted as-is. Mixed-case input must already
/// carry a correct checksum.
pub fn normalize_address(input: &str) -> Result<NormalizedAddress, InvalidAddressError> {
  let digits = input.strip_prefix("0x").unwrap_or(input);

  if !address_pattern().is_match(input) {
    return Err(diagnose(input, digits));
  }

  let address = Address::from_str(digits).map_err(|_| InvalidAddressError::Length {
    input: input.to_string(),
    found: digits.len(),
  })?;
  let checksummed = address.to_checksum(None);

  let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
  if has_upper && has_lower && checksummed[2..] != *digits {
    return Err(InvalidAddressError::Checksum {
      input: input.to_string(),
      expected: checksummed,
    });
  }

  Ok(NormalizedAddress {
    checksummed,
    lowercase: input.to_lowercase(),
  })
}

fn diagnose(input: &str, digits: &str) -> InvalidAddressError {
  match digits.chars().find(|c| !c.is_ascii_hexdigit()) {
    Some(character) => InvalidAddressError::Character {
      input: input.to_string(),
      character,
    },
    None => InvalidAddressError::Length {
      input: input.to_string(),
      found: digits.len(),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const USDT_ARBITRUM: &str = "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";

  #[test]
  fn checksummed_input_round_trips() {
    let normalized = normalize_address(USDT_ARBITRUM).unwrap();
    assert_eq!(normalized.checksummed(), USDT_ARBITRUM);
    assert_eq!(normalized.lowercase(), USDT_ARBITRUM.to_lowercase());
  }

  #[test]
  fn lowercase_and_uppercase_inputs_gain_checksum() {
    let lower = normalize_address(&USDT_ARBITRUM.to_lowercase()).unwrap();
    assert_eq!(lower.checksummed(), USDT_ARBITRUM);

    let upper = format!("0x{}", USDT_ARBITRUM[2..].to_uppercase());
    assert_eq!(normalize_address(&upper).unwrap().checksummed(), USDT_ARBITRUM);
  }

  #[test]
  fn prefix_is_optional() {
    let normalized = normalize_address(&USDT_ARBITRUM[2..]).unwrap();
    assert_eq!(normalized.checksummed(), USDT_ARBITRUM);
  }

  #[test]
  fn unprefixed_input_keeps_unprefixed_lowercase() {
    let normalized = normalize_address(&USDT_ARBITRUM[2..].to_lowercase()).unwrap();
    assert_eq!(normalized.lowercase(), "fd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9");
    assert!(normalized.checksummed().starts_with("0x"));
  }

  #[test]
  fn rejects_bad_checksum() {
    let tampered = "0xfD086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";
    assert_eq!(
      normalize_address(tampered),
      Err(InvalidAddressError::Checksum {
        input: tampered.into(),
        expected: USDT_ARBITRUM.into(),
      })
    );
  }

  #[test]
  fn rejects_wrong_length_and_characters() {
    assert!(matches!(
      normalize_address("0x1234"),
      Err(InvalidAddressError::Length { found: 4, .. })
    ));
    assert!(matches!(
      normalize_address("0xZd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9"),
      Err(InvalidAddressError::Character { character: 'Z', .. })
    ));
    assert!(matches!(
      normalize_address("not an address"),
      Err(InvalidAddressError::Character { character: 'n', .. })
    ));
  }
}
