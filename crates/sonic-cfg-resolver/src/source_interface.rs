//! Source interface / source IP lookups for protocols such as TACACS+,
//! RADIUS and TFTP.

use tracing::{debug, instrument, warn};

use crate::resolver::ConfigResolver;
use crate::store::TableStore;
use crate::types::ProtocolSource;

impl<S: TableStore> ConfigResolver<'_, S> {
    /// Source configured for `protocol` in `vrf_name`, falling back to the
    /// VRF-wide `all` entry when the protocol has none of its own.
    #[instrument(skip(self))]
    pub fn protocol_source(&self, protocol: &str, vrf_name: &str) -> Option<ProtocolSource> {
        if let Some(source) = self.configured_protocol_source(protocol, vrf_name) {
            return Some(source);
        }

        let all = self.config.all_protocol_key.as_str();
        if protocol == all {
            return None;
        }

        debug!(
            "No source for {} in VRF {}, trying '{}'",
            protocol, vrf_name, all
        );
        self.configured_protocol_source(all, vrf_name)
    }

    /// Source configured for exactly `protocol` in `vrf_name`.
    ///
    /// A non-empty source IP takes priority over a source interface. A
    /// source interface pointing at a port missing from the store is
    /// treated as not configured.
    #[instrument(skip(self))]
    pub fn configured_protocol_source(
        &self,
        protocol: &str,
        vrf_name: &str,
    ) -> Option<ProtocolSource> {
        let Some(vrf) = self.store.vrf_by_name(vrf_name) else {
            debug!("VRF {} not found", vrf_name);
            return None;
        };

        if let Some(ip) = vrf.source_ip_for(protocol) {
            return Some(ProtocolSource::Ip(ip.to_string()));
        }

        let port_ref = vrf.source_interface_for(protocol)?;
        match self.store.port_by_ref(port_ref) {
            Some(port) => Some(ProtocolSource::Interface(port.name.clone())),
            None => {
                warn!(
                    "VRF {} source interface for {} references missing port {}",
                    vrf_name, protocol, port_ref.0
                );
                None
            }
        }
    }
}
