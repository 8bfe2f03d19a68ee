//! Concurrent read tests
//!
//! Several threads share one snapshot and one resolver; every thread must
//! see the same answers.

use std::thread;

use pretty_assertions::assert_eq;
use sonic_cfg_resolver::{ConfigResolver, ProtocolSource};
use sonic_resolver_test::{init_test_logging, reference_snapshot};
use uuid::Uuid;

#[derive(Debug, PartialEq)]
struct Answers {
    mgmt_ip: Option<String>,
    eth1_ip: Option<String>,
    bgp_source: Option<ProtocolSource>,
    red_namespace: Option<String>,
    red_uuid: Option<Uuid>,
}

#[test]
fn test_threads_agree() {
    init_test_logging();
    let snapshot = reference_snapshot();
    let resolver = ConfigResolver::new(&snapshot);

    let query = || Answers {
        mgmt_ip: resolver.management_ip(),
        eth1_ip: resolver
            .interface_ip("eth1")
            .unwrap()
            .map(|ip| ip.to_string()),
        bgp_source: resolver.protocol_source("bgp", "vrf_default"),
        red_namespace: resolver.vrf_namespace("red"),
        red_uuid: resolver.vrf_uuid_by_name("red"),
    };

    let expected = query();
    let results: Vec<Answers> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(query)).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), 8);
    for answers in results {
        assert_eq!(answers, expected);
    }
}
