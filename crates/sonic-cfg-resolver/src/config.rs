//! Resolver configuration
//!
//! Loaded from TOML. Every field has a default matching the standard switch
//! image, so an absent file is not an error.
//!
//! ```toml
//! default_vrf_name = "vrf_default"
//! switch_namespace = "swns"
//! namespace_prefix = "VRF_"
//! all_protocol_key = "all"
//! reject_duplicate_names = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ResolverError, ResolverResult};
use crate::tables::{
    DEFAULT_VRF_NAME, NAMESPACE_NAME_PREFIX, SOURCE_INTERFACE_ALL_PROTOCOL, SWITCH_NAMESPACE,
};

/// Naming conventions and lookup policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Name of the default VRF
    #[serde(default = "default_vrf_name")]
    pub default_vrf_name: String,

    /// Namespace of the default VRF (table id 0)
    #[serde(default = "default_switch_namespace")]
    pub switch_namespace: String,

    /// Prefix for per-VRF namespaces
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,

    /// Protocol key holding the VRF-wide source fallback
    #[serde(default = "default_all_protocol_key")]
    pub all_protocol_key: String,

    /// Reject snapshots with duplicate port or VRF names on load
    #[serde(default)]
    pub reject_duplicate_names: bool,
}

fn default_vrf_name() -> String {
    DEFAULT_VRF_NAME.to_string()
}

fn default_switch_namespace() -> String {
    SWITCH_NAMESPACE.to_string()
}

fn default_namespace_prefix() -> String {
    NAMESPACE_NAME_PREFIX.to_string()
}

fn default_all_protocol_key() -> String {
    SOURCE_INTERFACE_ALL_PROTOCOL.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_vrf_name: default_vrf_name(),
            switch_namespace: default_switch_namespace(),
            namespace_prefix: default_namespace_prefix(),
            all_protocol_key: default_all_protocol_key(),
            reject_duplicate_names: false,
        }
    }
}

impl ResolverConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ResolverResult<Self> {
        let config: ResolverConfig = toml::from_str(content)
            .map_err(|e| ResolverError::invalid_config("toml", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> ResolverResult<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml_str(&content)?;
                info!("Loaded resolver config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Resolver config {} not found, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(e) => Err(ResolverError::io(path.display().to_string(), e)),
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> ResolverResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| ResolverError::invalid_config("toml", e.to_string()))?;
        fs::write(path, content).map_err(|e| ResolverError::io(path.display().to_string(), e))
    }

    /// Validate configuration
    pub fn validate(&self) -> ResolverResult<()> {
        if self.default_vrf_name.is_empty() {
            return Err(ResolverError::invalid_config(
                "default_vrf_name",
                "must not be empty",
            ));
        }
        if self.switch_namespace.is_empty() {
            return Err(ResolverError::invalid_config(
                "switch_namespace",
                "must not be empty",
            ));
        }
        if self.namespace_prefix.is_empty() {
            return Err(ResolverError::invalid_config(
                "namespace_prefix",
                "must not be empty",
            ));
        }
        if self.switch_namespace.contains('/') {
            return Err(ResolverError::invalid_config(
                "switch_namespace",
                "namespace names must not contain '/'",
            ));
        }
        if self.namespace_prefix.contains('/') {
            return Err(ResolverError::invalid_config(
                "namespace_prefix",
                "namespace names must not contain '/'",
            ));
        }
        if self.all_protocol_key.is_empty() {
            return Err(ResolverError::invalid_config(
                "all_protocol_key",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
