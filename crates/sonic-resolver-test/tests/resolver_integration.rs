//! End-to-end resolver tests against the reference snapshot
//!
//! Each test resolves through the public API only, either on an in-memory
//! snapshot or on one reloaded from a JSON dump.

use pretty_assertions::assert_eq;
use sonic_cfg_resolver::{
    ConfigResolver, PortRow, ProtocolSource, ResolverConfig, ResolverError, Snapshot,
    SourceProtocol, SystemRow, VrfRow,
};
use sonic_resolver_test::{
    init_test_logging, port_fixtures, reference_snapshot, vrf_fixtures, SnapshotFile,
};

#[test]
fn test_management_ip() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);
    assert_eq!(resolver.management_ip(), Some("10.0.0.1".to_string()));

    let empty = Snapshot::new().with_system(SystemRow::new());
    assert_eq!(ConfigResolver::new(&empty).management_ip(), None);
    assert_eq!(ConfigResolver::new(&Snapshot::new()).management_ip(), None);
}

#[test]
fn test_interface_ip_primary_and_secondary() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);

    let eth0 = resolver.interface_ip("eth0").unwrap().unwrap();
    assert_eq!(eth0.to_string(), "192.168.1.5");

    // Lexical order would pick 10.0.0.100
    let eth1 = resolver.interface_ip("eth1").unwrap().unwrap();
    assert_eq!(eth1.to_string(), "9.0.0.1");

    assert_eq!(resolver.interface_ip("eth42").unwrap(), None);
}

#[test]
fn test_interface_ip_without_addresses_is_rejected() {
    init_test_logging();
    let snapshot = Snapshot::new().with_port(port_fixtures::unnumbered("eth3"));
    let err = ConfigResolver::new(&snapshot)
        .interface_ip("eth3")
        .unwrap_err();
    assert!(matches!(err, ResolverError::InvalidInput { .. }));
}

#[test]
fn test_protocol_source_and_fallback() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);

    // IP wins over the eth1 interface configured for bgp
    assert_eq!(
        resolver.protocol_source("bgp", "vrf_default"),
        Some(ProtocolSource::Ip("1.1.1.1".to_string()))
    );
    assert_eq!(
        resolver.protocol_source("ospf", "vrf_default"),
        Some(ProtocolSource::Ip("2.2.2.2".to_string()))
    );
    assert_eq!(
        resolver.protocol_source(SourceProtocol::Tacacs.key(), "red"),
        Some(ProtocolSource::Interface("mgmt1".to_string()))
    );
    assert_eq!(resolver.protocol_source("radius", "red"), None);
    assert_eq!(resolver.protocol_source("bgp", "blue"), None);
}

#[test]
fn test_vrf_namespaces() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);

    assert_eq!(resolver.vrf_namespace("vrf_default"), Some("swns".to_string()));
    assert_eq!(resolver.vrf_namespace("red"), Some("VRF_5".to_string()));
    assert_eq!(resolver.vrf_namespace("blue"), None);
    assert_eq!(resolver.vrf_namespace_by_table_id(5), Some("VRF_5".to_string()));
    assert!(resolver.vrf_is_ready("red"));
}

#[test]
fn test_overlap_against_reference() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);

    assert!(resolver
        .is_address_overlapping("192.168.1.9/24", "eth1", false, "vrf_default")
        .unwrap());
    assert!(resolver
        .is_address_overlapping("2001:db8::77/64", "eth0", false, "vrf_default")
        .unwrap());
    assert!(!resolver
        .is_address_overlapping("203.0.113.1/24", "eth0", false, "vrf_default")
        .unwrap());
}

#[test]
fn test_queries_are_idempotent() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);

    for _ in 0..2 {
        assert_eq!(resolver.management_ip(), Some("10.0.0.1".to_string()));
        assert_eq!(
            resolver.interface_ip("eth1").unwrap().map(|ip| ip.to_string()),
            Some("9.0.0.1".to_string())
        );
        assert_eq!(
            resolver.protocol_source("ospf", "vrf_default"),
            Some(ProtocolSource::Ip("2.2.2.2".to_string()))
        );
        assert_eq!(resolver.vrf_namespace("red"), Some("VRF_5".to_string()));
    }
}

#[test]
fn test_duplicate_names_first_match() {
    init_test_logging();
    let snapshot = Snapshot::new()
        .with_port(port_fixtures::primary_only("eth0", "10.1.1.1/24"))
        .with_port(port_fixtures::primary_only("eth0", "10.2.2.2/24"))
        .with_vrf(vrf_fixtures::ready_vrf("red", 5))
        .with_vrf(vrf_fixtures::ready_vrf("red", 6));
    let resolver = ConfigResolver::new(&snapshot);

    assert_eq!(
        resolver.interface_ip("eth0").unwrap().map(|ip| ip.to_string()),
        Some("10.1.1.1".to_string())
    );
    assert_eq!(resolver.vrf_namespace("red"), Some("VRF_5".to_string()));
}

#[test]
fn test_duplicate_names_rejected_on_strict_load() {
    init_test_logging();
    let snapshot = Snapshot::new()
        .with_port(PortRow::new("eth0"))
        .with_port(PortRow::new("eth0"));
    let file = SnapshotFile::write(&snapshot).unwrap();

    assert!(file.load(&ResolverConfig::default()).is_ok());

    let strict = ResolverConfig {
        reject_duplicate_names: true,
        ..ResolverConfig::default()
    };
    let err = file.load(&strict).unwrap_err();
    let err = err.downcast_ref::<ResolverError>().unwrap();
    assert!(matches!(err, ResolverError::DuplicateRow { .. }));
}

#[test]
fn test_resolve_from_json_dump() {
    init_test_logging();
    let file = SnapshotFile::write_raw(
        r#"{
            "System": [ { "mgmt_intf_status": { "ip": "10.10.10.10" } } ],
            "Port": [
                { "uuid": "0b5c6c2e-2f6b-4c59-8d3f-6e1e2b3c4d5e",
                  "name": "eth7",
                  "ip4_address_secondary": ["10.0.0.20/24", "10.0.0.3/24"] }
            ],
            "VRF": [
                { "name": "vrf_default", "table_id": 0,
                  "source_interface": { "all": "0b5c6c2e-2f6b-4c59-8d3f-6e1e2b3c4d5e" } },
                { "name": "green", "table_id": 12 }
            ]
        }"#,
    )
    .unwrap();

    let snapshot = file.load(&ResolverConfig::default()).unwrap();
    let resolver = ConfigResolver::new(&snapshot);

    assert_eq!(resolver.management_ip(), Some("10.10.10.10".to_string()));
    assert_eq!(
        resolver.interface_ip("eth7").unwrap().map(|ip| ip.to_string()),
        Some("10.0.0.3".to_string())
    );
    assert_eq!(
        resolver.protocol_source("tftp", "vrf_default"),
        Some(ProtocolSource::Interface("eth7".to_string()))
    );
    assert_eq!(resolver.vrf_namespace("green"), Some("VRF_12".to_string()));
}

#[test]
fn test_resolve_from_serde_decoded_snapshot() {
    init_test_logging();
    let json = reference_snapshot().to_json_string().unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    let resolver = ConfigResolver::new(&snapshot);

    assert_eq!(
        resolver.protocol_source("tacacs", "red"),
        Some(ProtocolSource::Interface("mgmt1".to_string()))
    );
    assert!(resolver
        .is_address_overlapping("192.168.1.9/24", "eth1", false, "vrf_default")
        .unwrap());
}

#[test]
fn test_malformed_dump() {
    init_test_logging();
    let file = SnapshotFile::write_raw(r#"{ "Port": [ { "ip4_address": "1.2.3.4/8" } ] }"#).unwrap();
    let err = file.load(&ResolverConfig::default()).unwrap_err();
    let err = err.downcast_ref::<ResolverError>().unwrap();
    assert!(matches!(err, ResolverError::Json(_)));
}

#[test]
fn test_custom_config_file() {
    init_test_logging();
    let file = SnapshotFile::write(&reference_snapshot()).unwrap();
    let config_path = file.dir().join("resolver.toml");
    std::fs::write(
        &config_path,
        "switch_namespace = \"default\"\nnamespace_prefix = \"ns-\"\nall_protocol_key = \"any\"\n",
    )
    .unwrap();

    let config = ResolverConfig::load_or_default(&config_path).unwrap();
    let snapshot = file.load(&config).unwrap();
    let resolver = ConfigResolver::with_config(&snapshot, config);

    assert_eq!(resolver.vrf_namespace("vrf_default"), Some("default".to_string()));
    assert_eq!(resolver.vrf_namespace("red"), Some("ns-5".to_string()));
    // "all" is no longer the fallback key
    assert_eq!(resolver.protocol_source("ospf", "vrf_default"), None);
    assert!(resolver.vrf_is_ready("default"));
}

#[test]
fn test_unprovisioned_vrf() {
    init_test_logging();
    let snapshot = Snapshot::new().with_vrf(VrfRow::new("pending"));
    let resolver = ConfigResolver::new(&snapshot);
    assert_eq!(resolver.vrf_namespace("pending"), Some("swns".to_string()));
    assert!(!resolver.vrf_is_ready("pending"));
    assert_eq!(
        resolver.vrf_table_id_by_uuid(&resolver.vrf_uuid_by_name("pending").unwrap()),
        None
    );
}
