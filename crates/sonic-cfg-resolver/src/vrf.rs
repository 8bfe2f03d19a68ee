//! VRF lookups and VRF -> namespace mapping

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::resolver::ConfigResolver;
use crate::store::TableStore;
use crate::tables::keys;
use crate::types::VrfRow;

impl<'a, S: TableStore> ConfigResolver<'a, S> {
    /// VRF row by name (first match).
    pub fn vrf_lookup(&self, vrf_name: &str) -> Option<&'a VrfRow> {
        self.store.vrf_by_name(vrf_name)
    }

    /// The default VRF row, if present.
    pub fn default_vrf(&self) -> Option<&'a VrfRow> {
        self.vrf_lookup(&self.config.default_vrf_name)
    }

    /// VRF row owning a routing table id.
    pub fn vrf_by_table_id(&self, table_id: i64) -> Option<&'a VrfRow> {
        self.store.vrf_by_table_id(table_id)
    }

    /// Network namespace of a VRF.
    ///
    /// An unprovisioned VRF (no table id) or table id 0 maps to the switch
    /// namespace; any other id maps to `VRF_<table_id>`. Returns `None` if
    /// the VRF does not exist.
    #[instrument(skip(self))]
    pub fn vrf_namespace(&self, vrf_name: &str) -> Option<String> {
        let vrf = self.vrf_lookup(vrf_name)?;
        let namespace = self.namespace_for(vrf.table_id);
        debug!("VRF {} namespace {}", vrf_name, namespace);
        Some(namespace)
    }

    /// Network namespace for a routing table id.
    ///
    /// Table id 0 is the switch namespace and needs no VRF row; any other id
    /// must belong to a VRF.
    #[instrument(skip(self))]
    pub fn vrf_namespace_by_table_id(&self, table_id: i64) -> Option<String> {
        if table_id == 0 {
            return Some(self.config.switch_namespace.clone());
        }
        let vrf = self.vrf_by_table_id(table_id)?;
        Some(self.namespace_for(vrf.table_id))
    }

    pub fn vrf_uuid_by_name(&self, vrf_name: &str) -> Option<Uuid> {
        self.vrf_lookup(vrf_name).map(|vrf| vrf.uuid)
    }

    pub fn vrf_uuid_by_table_id(&self, table_id: i64) -> Option<Uuid> {
        self.vrf_by_table_id(table_id).map(|vrf| vrf.uuid)
    }

    /// Routing table id of the VRF with this UUID. `None` if the VRF is
    /// missing or not yet provisioned.
    pub fn vrf_table_id_by_uuid(&self, uuid: &Uuid) -> Option<i64> {
        self.store.vrf_by_uuid(uuid).and_then(|vrf| vrf.table_id)
    }

    pub fn vrf_name_by_uuid(&self, uuid: &Uuid) -> Option<&'a str> {
        self.store.vrf_by_uuid(uuid).map(|vrf| vrf.name.as_str())
    }

    /// False for the default VRF and the switch namespace, true for any
    /// other name.
    pub fn is_nondefault_vrf(&self, vrf_name: &str) -> bool {
        vrf_name != self.config.default_vrf_name && vrf_name != self.config.switch_namespace
    }

    /// Whether the VRF's namespace has been created.
    ///
    /// The default VRF is always ready. Any other VRF must exist and carry
    /// `status["namespace_ready"] == "true"`.
    #[instrument(skip(self))]
    pub fn vrf_is_ready(&self, vrf_name: &str) -> bool {
        if !self.is_nondefault_vrf(vrf_name) {
            return true;
        }

        self.vrf_lookup(vrf_name)
            .and_then(|vrf| vrf.status.get(keys::VRF_STATUS_NAMESPACE_READY))
            .is_some_and(|value| value == keys::VRF_STATUS_READY_VALUE)
    }

    fn namespace_for(&self, table_id: Option<i64>) -> String {
        match table_id {
            None | Some(0) => self.config.switch_namespace.clone(),
            Some(id) => format!("{}{}", self.config.namespace_prefix, id),
        }
    }
}
