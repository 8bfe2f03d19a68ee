//! Typed access to the System, Port and VRF tables.
//!
//! The resolver only needs to enumerate rows and follow port references,
//! so each table is exposed through a narrow repository trait. [`Snapshot`]
//! is the in-memory implementation, loadable from a JSON dump of the form
//!
//! ```json
//! {
//!   "System": [{ "mgmt_intf_status": { "ip": "10.0.0.1" } }],
//!   "Port":   [{ "name": "eth0", "ip4_address": "192.168.1.5/24" }],
//!   "VRF":    [{ "name": "vrf_default", "table_id": 0 }]
//! }
//! ```
//!
//! Lookups by name return the first row in enumeration order. Use
//! [`Snapshot::validate`] to reject duplicate names instead.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ResolverConfig;
use crate::error::{ResolverError, ResolverResult};
use crate::tables::{PORT_TABLE, SYSTEM_TABLE, VRF_TABLE};
use crate::types::{PortRef, PortRow, SystemRow, VrfRow};

/// Read access to the System table.
pub trait SystemRepository {
    fn system_rows(&self) -> impl Iterator<Item = &SystemRow>;
}

/// Read access to the Port table.
pub trait PortRepository {
    fn port_rows(&self) -> impl Iterator<Item = &PortRow>;

    /// First port with the given name.
    fn port_by_name(&self, name: &str) -> Option<&PortRow> {
        self.port_rows().find(|row| row.name == name)
    }

    /// Follows a port reference.
    fn port_by_ref(&self, port: PortRef) -> Option<&PortRow> {
        self.port_rows().find(|row| row.uuid == port.0)
    }
}

/// Read access to the VRF table.
pub trait VrfRepository {
    fn vrf_rows(&self) -> impl Iterator<Item = &VrfRow>;

    /// First VRF with the given name.
    fn vrf_by_name(&self, name: &str) -> Option<&VrfRow> {
        self.vrf_rows().find(|row| row.name == name)
    }

    fn vrf_by_uuid(&self, uuid: &Uuid) -> Option<&VrfRow> {
        self.vrf_rows().find(|row| row.uuid == *uuid)
    }

    /// First VRF whose routing table id is `table_id`. Rows without a table
    /// id never match.
    fn vrf_by_table_id(&self, table_id: i64) -> Option<&VrfRow> {
        self.vrf_rows().find(|row| row.table_id == Some(table_id))
    }
}

/// A store exposing all three tables.
pub trait TableStore: SystemRepository + PortRepository + VrfRepository {}

impl<T> TableStore for T where T: SystemRepository + PortRepository + VrfRepository {}

/// In-memory table snapshot.
///
/// Rows keep their insertion order, which is the enumeration order used
/// by every lookup. Every decode path rebuilds the port index, so it is
/// always in sync with the rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "SnapshotDump")]
pub struct Snapshot {
    #[serde(rename = "System", default)]
    system: Vec<SystemRow>,
    #[serde(rename = "Port", default)]
    ports: Vec<PortRow>,
    #[serde(rename = "VRF", default)]
    vrfs: Vec<VrfRow>,
    /// Port UUID -> index into `ports`
    #[serde(skip)]
    port_index: HashMap<Uuid, usize>,
}

/// On-disk layout of a snapshot
#[derive(Deserialize)]
struct SnapshotDump {
    #[serde(rename = "System", default)]
    system: Vec<SystemRow>,
    #[serde(rename = "Port", default)]
    ports: Vec<PortRow>,
    #[serde(rename = "VRF", default)]
    vrfs: Vec<VrfRow>,
}

impl From<SnapshotDump> for Snapshot {
    fn from(dump: SnapshotDump) -> Self {
        let mut snapshot = Snapshot {
            system: dump.system,
            vrfs: dump.vrfs,
            ..Snapshot::default()
        };
        for row in dump.ports {
            snapshot.insert_port(row);
        }
        snapshot
    }
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(mut self, row: SystemRow) -> Self {
        self.insert_system(row);
        self
    }

    pub fn with_port(mut self, row: PortRow) -> Self {
        self.insert_port(row);
        self
    }

    pub fn with_vrf(mut self, row: VrfRow) -> Self {
        self.insert_vrf(row);
        self
    }

    pub fn insert_system(&mut self, row: SystemRow) {
        self.system.push(row);
    }

    pub fn insert_port(&mut self, row: PortRow) {
        // Keep the first index so reference lookups agree with name lookups.
        self.port_index.entry(row.uuid).or_insert(self.ports.len());
        self.ports.push(row);
    }

    pub fn insert_vrf(&mut self, row: VrfRow) {
        self.vrfs.push(row);
    }

    /// Decodes a JSON dump.
    pub fn from_json_str(json: &str) -> ResolverResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON dump from disk, applying the duplicate-name policy of
    /// `config`.
    pub fn load(path: impl AsRef<Path>, config: &ResolverConfig) -> ResolverResult<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ResolverError::io(path.display().to_string(), e))?;
        let snapshot = Self::from_json_str(&content)?;

        if config.reject_duplicate_names {
            snapshot.validate()?;
        }

        info!(
            "Loaded snapshot {}: {} system, {} port, {} vrf rows",
            path.display(),
            snapshot.system.len(),
            snapshot.ports.len(),
            snapshot.vrfs.len()
        );
        Ok(snapshot)
    }

    /// Serializes the snapshot back to a JSON dump.
    pub fn to_json_string(&self) -> ResolverResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects snapshots where two Port rows or two VRF rows share a name.
    pub fn validate(&self) -> ResolverResult<()> {
        if self.system.len() > 1 {
            warn!(
                "{} table has {} rows, using the first",
                SYSTEM_TABLE,
                self.system.len()
            );
        }

        if let Some(name) = first_duplicate(self.ports.iter().map(|p| p.name.as_str())) {
            return Err(ResolverError::duplicate_row(PORT_TABLE, name));
        }
        if let Some(name) = first_duplicate(self.vrfs.iter().map(|v| v.name.as_str())) {
            return Err(ResolverError::duplicate_row(VRF_TABLE, name));
        }
        Ok(())
    }
}

fn first_duplicate<'a>(names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}

impl SystemRepository for Snapshot {
    fn system_rows(&self) -> impl Iterator<Item = &SystemRow> {
        self.system.iter()
    }
}

impl PortRepository for Snapshot {
    fn port_rows(&self) -> impl Iterator<Item = &PortRow> {
        self.ports.iter()
    }

    fn port_by_ref(&self, port: PortRef) -> Option<&PortRow> {
        self.port_index.get(&port.0).map(|&idx| &self.ports[idx])
    }
}

impl VrfRepository for Snapshot {
    fn vrf_rows(&self) -> impl Iterator<Item = &VrfRow> {
        self.vrfs.iter()
    }
}
