//! Read-only configuration lookups for the switch control plane.
//!
//! Answers narrow questions against a snapshot of the `System`, `Port` and
//! `VRF` tables:
//!
//! - management interface IP ([`ConfigResolver::management_ip`])
//! - IPv4 address of a port ([`ConfigResolver::interface_ip`])
//! - packet source for a protocol in a VRF ([`ConfigResolver::protocol_source`])
//! - network namespace of a VRF ([`ConfigResolver::vrf_namespace`])
//!
//! plus VRF lookups by name, table id and UUID, namespace readiness and
//! subnet overlap checks.
//!
//! A missing row or key is reported as `None`, never as an error. Errors
//! ([`ResolverError`]) mean the stored data cannot be interpreted.
//!
//! # Example
//!
//! ```
//! use sonic_cfg_resolver::{ConfigResolver, PortRow, Snapshot, SystemRow, VrfRow};
//!
//! let snapshot = Snapshot::new()
//!     .with_system(SystemRow::new().with_mgmt_status("ip", "10.0.0.1"))
//!     .with_port(PortRow::new("eth0").with_ip4("192.168.1.5/24"))
//!     .with_vrf(VrfRow::new("red").with_table_id(5));
//!
//! let resolver = ConfigResolver::new(&snapshot);
//! assert_eq!(resolver.management_ip().as_deref(), Some("10.0.0.1"));
//! assert_eq!(resolver.interface_ip("eth0").unwrap().unwrap().to_string(), "192.168.1.5");
//! assert_eq!(resolver.vrf_namespace("red").as_deref(), Some("VRF_5"));
//! ```

pub mod config;
pub mod error;
pub mod l3;
mod mgmt;
mod resolver;
mod source_interface;
pub mod store;
pub mod tables;
pub mod types;
mod vrf;

pub use config::ResolverConfig;
pub use error::{ResolverError, ResolverResult};
pub use l3::lowest_secondary_address;
pub use resolver::ConfigResolver;
pub use store::{PortRepository, Snapshot, SystemRepository, TableStore, VrfRepository};
pub use types::{PortRef, PortRow, ProtocolSource, SourceProtocol, SystemRow, VrfRow};
