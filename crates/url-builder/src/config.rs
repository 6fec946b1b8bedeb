use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Schemes that always carry an authority and therefore must be handled by
/// the primary splitter.
pub const DEFAULT_NETWORK_SCHEMES: [&str; 5] = ["http", "https", "ftp", "sftp", "ssh"];

/// Schemes for which a URL without host is never valid.
pub const DEFAULT_HOST_REQUIRED_SCHEMES: [&str; 2] = ["http", "https"];

/// Scheme tables consulted while parsing, validating, and serializing URLs.
///
/// Embedding tools can load this from a TOML section; every key is optional
/// and falls back to the built-in tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Network schemes: never parsed through the host-less `file://` fallback,
    /// and never given an extra leading `/` before a relative path.
    pub network_schemes: Vec<String>,
    /// Schemes that make a URL without host invalid.
    pub host_required_schemes: Vec<String>,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            network_schemes: DEFAULT_NETWORK_SCHEMES.iter().map(|s| s.to_string()).collect(),
            host_required_schemes: DEFAULT_HOST_REQUIRED_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl UrlConfig {
    /// Process-wide default used by every operation that takes no explicit config.
    pub fn shared() -> &'static UrlConfig {
        static SHARED: OnceLock<UrlConfig> = OnceLock::new();
        SHARED.get_or_init(UrlConfig::default)
    }

    pub fn is_network_scheme(&self, scheme: &str) -> bool {
        self.network_schemes.iter().any(|s| s == scheme)
    }

    pub fn requires_host(&self, scheme: &str) -> bool {
        self.host_required_schemes.iter().any(|s| s == scheme)
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: UrlConfig = toml::from_str(data).context("invalid URL config")?;
        Ok(cfg)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading URL config {}", path.display()))?;
        let cfg = Self::from_toml_str(&data)
            .with_context(|| format!("parsing URL config {}", path.display()))?;
        tracing::debug!("loaded URL config from {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }
}
