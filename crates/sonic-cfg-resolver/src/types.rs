//! Row types for the System, Port and VRF tables

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ResolverError;
use crate::tables::SOURCE_INTERFACE_ALL_PROTOCOL;

/// Reference from one row to a Port row, by UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortRef(pub Uuid);

impl From<&PortRow> for PortRef {
    fn from(row: &PortRow) -> Self {
        PortRef(row.uuid)
    }
}

/// System table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRow {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// Management interface status (`ip`, `subnet_mask`, ...)
    #[serde(default)]
    pub mgmt_intf_status: BTreeMap<String, String>,
}

impl SystemRow {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            mgmt_intf_status: BTreeMap::new(),
        }
    }

    pub fn with_mgmt_status(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.mgmt_intf_status.insert(key.into(), value.into());
        self
    }
}

impl Default for SystemRow {
    fn default() -> Self {
        Self::new()
    }
}

/// Port table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRow {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    pub name: String,
    /// Primary IPv4 address, `a.b.c.d/len`
    #[serde(default)]
    pub ip4_address: Option<String>,
    #[serde(default)]
    pub ip4_address_secondary: BTreeSet<String>,
    /// Primary IPv6 address, `addr/len`
    #[serde(default)]
    pub ip6_address: Option<String>,
    #[serde(default)]
    pub ip6_address_secondary: BTreeSet<String>,
}

impl PortRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            ip4_address: None,
            ip4_address_secondary: BTreeSet::new(),
            ip6_address: None,
            ip6_address_secondary: BTreeSet::new(),
        }
    }

    pub fn with_ip4(mut self, address: impl Into<String>) -> Self {
        self.ip4_address = Some(address.into());
        self
    }

    pub fn with_ip4_secondary(mut self, address: impl Into<String>) -> Self {
        self.ip4_address_secondary.insert(address.into());
        self
    }

    pub fn with_ip6(mut self, address: impl Into<String>) -> Self {
        self.ip6_address = Some(address.into());
        self
    }

    pub fn with_ip6_secondary(mut self, address: impl Into<String>) -> Self {
        self.ip6_address_secondary.insert(address.into());
        self
    }

    /// Primary IPv4 address, if set to a non-empty value.
    pub fn primary_ip4(&self) -> Option<&str> {
        self.ip4_address.as_deref().filter(|a| !a.is_empty())
    }

    /// Primary IPv6 address, if set to a non-empty value.
    pub fn primary_ip6(&self) -> Option<&str> {
        self.ip6_address.as_deref().filter(|a| !a.is_empty())
    }
}

/// VRF table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrfRow {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    pub name: String,
    /// Kernel routing table id; unset until the VRF is provisioned
    #[serde(default)]
    pub table_id: Option<i64>,
    /// Protocol -> source IP
    #[serde(default)]
    pub source_ip: BTreeMap<String, String>,
    /// Protocol -> source interface
    #[serde(default)]
    pub source_interface: BTreeMap<String, PortRef>,
    #[serde(default)]
    pub ports: Vec<PortRef>,
    #[serde(default)]
    pub status: BTreeMap<String, String>,
}

impl VrfRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            table_id: None,
            source_ip: BTreeMap::new(),
            source_interface: BTreeMap::new(),
            ports: Vec::new(),
            status: BTreeMap::new(),
        }
    }

    pub fn with_table_id(mut self, table_id: i64) -> Self {
        self.table_id = Some(table_id);
        self
    }

    pub fn with_source_ip(mut self, protocol: impl Into<String>, ip: impl Into<String>) -> Self {
        self.source_ip.insert(protocol.into(), ip.into());
        self
    }

    pub fn with_source_interface(mut self, protocol: impl Into<String>, port: &PortRow) -> Self {
        self.source_interface.insert(protocol.into(), port.into());
        self
    }

    pub fn with_port(mut self, port: &PortRow) -> Self {
        self.ports.push(port.into());
        self
    }

    pub fn with_status(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.status.insert(key.into(), value.into());
        self
    }

    /// Source IP for the protocol, if configured to a non-empty value.
    pub fn source_ip_for(&self, protocol: &str) -> Option<&str> {
        self.source_ip
            .get(protocol)
            .map(String::as_str)
            .filter(|ip| !ip.is_empty())
    }

    /// Source interface reference for the protocol.
    pub fn source_interface_for(&self, protocol: &str) -> Option<PortRef> {
        self.source_interface.get(protocol).copied()
    }
}

/// Protocols with a well-known source-interface key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceProtocol {
    Tftp,
    Tacacs,
    Radius,
    /// VRF-wide default for every protocol
    All,
}

impl SourceProtocol {
    /// Returns the map key used in `source_ip` / `source_interface`.
    pub fn key(&self) -> &'static str {
        match self {
            SourceProtocol::Tftp => "tftp",
            SourceProtocol::Tacacs => "tacacs",
            SourceProtocol::Radius => "radius",
            SourceProtocol::All => SOURCE_INTERFACE_ALL_PROTOCOL,
        }
    }
}

impl fmt::Display for SourceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SourceProtocol {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tftp" => Ok(SourceProtocol::Tftp),
            "tacacs" => Ok(SourceProtocol::Tacacs),
            "radius" => Ok(SourceProtocol::Radius),
            SOURCE_INTERFACE_ALL_PROTOCOL => Ok(SourceProtocol::All),
            other => Err(ResolverError::invalid_input(
                "protocol",
                format!("unknown source protocol '{}'", other),
            )),
        }
    }
}

/// Configured packet source for a protocol in a VRF
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolSource {
    /// Explicit source address
    Ip(String),
    /// Name of the port whose address is used
    Interface(String),
}

impl ProtocolSource {
    pub fn ip(&self) -> Option<&str> {
        match self {
            ProtocolSource::Ip(ip) => Some(ip),
            ProtocolSource::Interface(_) => None,
        }
    }

    pub fn interface(&self) -> Option<&str> {
        match self {
            ProtocolSource::Ip(_) => None,
            ProtocolSource::Interface(name) => Some(name),
        }
    }
}
