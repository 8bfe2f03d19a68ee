//! Management interface lookups

use tracing::{debug, instrument};

use crate::resolver::ConfigResolver;
use crate::store::TableStore;
use crate::tables::keys;

impl<S: TableStore> ConfigResolver<'_, S> {
    /// IP address of the management interface.
    ///
    /// Reads `mgmt_intf_status["ip"]` from the System row. Returns `None`
    /// when there is no System row, the status map is empty, or it has no
    /// `ip` key.
    #[instrument(skip(self))]
    pub fn management_ip(&self) -> Option<String> {
        let ip = self
            .store
            .system_rows()
            .filter(|row| !row.mgmt_intf_status.is_empty())
            .find_map(|row| row.mgmt_intf_status.get(keys::MGMT_INTF_IP))
            .cloned();

        debug!("Management IP: {:?}", ip);
        ip
    }
}
