//! ConfigResolver - read-only queries over a table snapshot
//!
//! The query methods live next to the data they read: `mgmt`, `l3`,
//! `source_interface` and `vrf`.

use crate::config::ResolverConfig;
use crate::store::TableStore;

/// Read-only configuration lookups against a [`TableStore`].
///
/// Holds no state besides the borrowed store and naming config, so the
/// same query against an unchanged store always returns the same result.
/// It is `Send + Sync` whenever the store is.
#[derive(Debug)]
pub struct ConfigResolver<'a, S> {
    pub(crate) store: &'a S,
    pub(crate) config: ResolverConfig,
}

impl<'a, S: TableStore> ConfigResolver<'a, S> {
    /// Create a resolver with default naming conventions
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, ResolverConfig::default())
    }

    /// Create a resolver with explicit naming conventions
    pub fn with_config(store: &'a S, config: ResolverConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Snapshot;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_resolver_is_send_sync() {
        assert_send_sync::<ConfigResolver<'static, Snapshot>>();
    }

    #[test]
    fn test_with_config() {
        let snapshot = Snapshot::new();
        let config = ResolverConfig {
            switch_namespace: "default".to_string(),
            ..ResolverConfig::default()
        };
        let resolver = ConfigResolver::with_config(&snapshot, config);
        assert_eq!(resolver.config().switch_namespace, "default");
    }
}
