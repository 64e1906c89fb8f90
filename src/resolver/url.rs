//! Icon URL synthesis.

use serde::Deserialize;

use crate::models::AssetIndexEntry;

/// Where icons are served from. Only the chain and id vary per icon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconUrlTemplate {
  /// Host serving raw repository files.
  pub host: String,
  /// Repository owner.
  pub org: String,
  /// Repository name.
  pub repo: String,
  /// Branch the icons are published from.
  pub branch: String,
}

impl Default for IconUrlTemplate {
  fn default() -> Self {
    Self {
      host: "raw.githubusercontent.com".into(),
      org: "albertocevallos".into(),
      repo: "token-icons".into(),
      branch: "main".into(),
    }
  }
}

impl IconUrlTemplate {
  /// URL of the logo for `id` on `chain`.
  pub fn url_for(&self, chain: &str, id: &str) -> String {
    format!(
      "https://{host}/{org}/{repo}/{branch}/assets/blockchains/{chain}/assets/{id}/logo.png",
      host = self.host,
      org = self.org,
      repo = self.repo,
      branch = self.branch,
    )
  }

  /// URL of the logo for a resolved manifest entry.
  pub fn render(&self, entry: &AssetIndexEntry) -> String {
    self.url_for(entry.chain.as_str(), entry.id.as_str())
  }
}
