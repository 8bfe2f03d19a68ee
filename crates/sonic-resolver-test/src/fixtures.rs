//! Snapshot fixtures for resolver testing
//!
//! Provides reusable rows and a reference snapshot modelled on a small
//! switch: a management port, two front-panel ports and two VRFs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sonic_cfg_resolver::{PortRow, ResolverConfig, Snapshot, SystemRow, VrfRow};
use tempfile::TempDir;
use tracing::info;

/// Common port fixtures
pub mod port_fixtures {
    use super::*;

    /// Port with only a primary address
    pub fn primary_only(name: &str, address: &str) -> PortRow {
        PortRow::new(name).with_ip4(address)
    }

    /// Port with no primary and the given secondary addresses
    pub fn secondaries_only(name: &str, addresses: &[&str]) -> PortRow {
        addresses
            .iter()
            .fold(PortRow::new(name), |row, addr| row.with_ip4_secondary(*addr))
    }

    /// Port with no addresses at all
    pub fn unnumbered(name: &str) -> PortRow {
        PortRow::new(name)
    }

    /// Dual-stack port
    pub fn dual_stack(name: &str, v4: &str, v6: &str) -> PortRow {
        PortRow::new(name).with_ip4(v4).with_ip6(v6)
    }
}

/// Common VRF fixtures
pub mod vrf_fixtures {
    use super::*;

    /// Default VRF, table id 0
    pub fn default_vrf() -> VrfRow {
        VrfRow::new("vrf_default").with_table_id(0)
    }

    /// Provisioned VRF with a ready namespace
    pub fn ready_vrf(name: &str, table_id: i64) -> VrfRow {
        VrfRow::new(name)
            .with_table_id(table_id)
            .with_status("namespace_ready", "true")
    }

    /// VRF without a table id
    pub fn unprovisioned_vrf(name: &str) -> VrfRow {
        VrfRow::new(name)
    }
}

/// Common system fixtures
pub mod system_fixtures {
    use super::*;

    /// System row with a management IP
    pub fn with_mgmt_ip(ip: &str) -> SystemRow {
        SystemRow::new()
            .with_mgmt_status("ip", ip)
            .with_mgmt_status("subnet_mask", "255.255.255.0")
    }
}

/// Reference snapshot.
///
/// | Row | Contents |
/// |-----|----------|
/// | System | mgmt ip `10.0.0.1` |
/// | Port `eth0` | primary `192.168.1.5/24` |
/// | Port `eth1` | secondaries `10.0.0.9/24`, `10.0.0.100/24`, `9.0.0.1/24` |
/// | Port `mgmt1` | primary `172.16.0.10/24`, `2001:db8::10/64` |
/// | VRF `vrf_default` | table 0; `bgp` ip `1.1.1.1` + interface `eth1`; `all` ip `2.2.2.2`; ports `eth0`, `eth1`, `mgmt1` |
/// | VRF `red` | table 5, ready; `tacacs` interface `mgmt1` |
pub fn reference_snapshot() -> Snapshot {
    let eth0 = port_fixtures::primary_only("eth0", "192.168.1.5/24");
    let eth1 = port_fixtures::secondaries_only("eth1", &["10.0.0.9/24", "10.0.0.100/24", "9.0.0.1/24"]);
    let mgmt1 = port_fixtures::dual_stack("mgmt1", "172.16.0.10/24", "2001:db8::10/64");

    let vrf_default = vrf_fixtures::default_vrf()
        .with_source_ip("bgp", "1.1.1.1")
        .with_source_interface("bgp", &eth1)
        .with_source_ip("all", "2.2.2.2")
        .with_port(&eth0)
        .with_port(&eth1)
        .with_port(&mgmt1);

    let red = vrf_fixtures::ready_vrf("red", 5).with_source_interface("tacacs", &mgmt1);

    Snapshot::new()
        .with_system(system_fixtures::with_mgmt_ip("10.0.0.1"))
        .with_port(eth0)
        .with_port(eth1)
        .with_port(mgmt1)
        .with_vrf(vrf_default)
        .with_vrf(red)
}

/// A snapshot written to a temporary directory
pub struct SnapshotFile {
    dir: TempDir,
    path: PathBuf,
}

impl SnapshotFile {
    /// Write `snapshot` as a JSON dump
    pub fn write(snapshot: &Snapshot) -> Result<Self> {
        let json = snapshot
            .to_json_string()
            .context("Failed to encode snapshot")?;
        Self::write_raw(&json)
    }

    /// Write raw JSON text, for malformed-dump tests
    pub fn write_raw(json: &str) -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp dir")?;
        let path = dir.path().join("snapshot.json");
        fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote snapshot fixture {}", path.display());
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Load the file back with the given config
    pub fn load(&self, config: &ResolverConfig) -> Result<Snapshot> {
        Snapshot::load(&self.path, config)
            .with_context(|| format!("Failed to load {}", self.path.display()))
    }
}
