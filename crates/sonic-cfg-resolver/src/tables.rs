//! Table and column name constants for the configuration store

/// System table (exactly one row)
pub const SYSTEM_TABLE: &str = "System";

/// Port table
pub const PORT_TABLE: &str = "Port";

/// VRF table
pub const VRF_TABLE: &str = "VRF";

/// Column names, as they appear in the store and in snapshot dumps
pub mod columns {
    // System
    /// Management interface status map
    pub const MGMT_INTF_STATUS: &str = "mgmt_intf_status";

    // Port
    /// Port name
    pub const NAME: &str = "name";

    /// Primary IPv4 address (`a.b.c.d/len`)
    pub const IP4_ADDRESS: &str = "ip4_address";

    /// Secondary IPv4 addresses
    pub const IP4_ADDRESS_SECONDARY: &str = "ip4_address_secondary";

    /// Primary IPv6 address
    pub const IP6_ADDRESS: &str = "ip6_address";

    /// Secondary IPv6 addresses
    pub const IP6_ADDRESS_SECONDARY: &str = "ip6_address_secondary";

    // VRF
    /// Kernel routing table id
    pub const TABLE_ID: &str = "table_id";

    /// Protocol -> source IP map
    pub const SOURCE_IP: &str = "source_ip";

    /// Protocol -> source interface (port reference) map
    pub const SOURCE_INTERFACE: &str = "source_interface";

    /// Ports bound to the VRF
    pub const PORTS: &str = "ports";

    /// VRF status map
    pub const STATUS: &str = "status";
}

/// Map keys read from status columns
pub mod keys {
    /// IP key in `mgmt_intf_status`
    pub const MGMT_INTF_IP: &str = "ip";

    /// Namespace readiness key in VRF `status`
    pub const VRF_STATUS_NAMESPACE_READY: &str = "namespace_ready";

    /// Value of `namespace_ready` once the namespace exists
    pub const VRF_STATUS_READY_VALUE: &str = "true";
}

/// Name of the default VRF
pub const DEFAULT_VRF_NAME: &str = "vrf_default";

/// Switch default namespace
pub const SWITCH_NAMESPACE: &str = "swns";

/// Prefix of per-VRF namespace names (`VRF_<table_id>`)
pub const NAMESPACE_NAME_PREFIX: &str = "VRF_";

/// Protocol key holding the VRF-wide default source
pub const SOURCE_INTERFACE_ALL_PROTOCOL: &str = "all";
