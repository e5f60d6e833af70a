#![cfg(test)]
use nodeprobe_common::error::ResolveError;
use nodeprobe_common::network::interface::InterfaceClass;
use nodeprobe_common::network::prefix::AddressPrefix;
use nodeprobe_common::system::InterfaceSource;
use nodeprobe_core::resolver;

use crate::util::{enp9s0, eth1, eth2, lo, source, tun0, wlan0};

#[test]
fn mesh_interface_yields_node_address() {
    let interfaces = source(&[lo(), enp9s0(), wlan0(), eth2()]);
    let identity = resolver::resolve(&interfaces, &AddressPrefix::default()).unwrap();

    assert_eq!(identity.client_address(), "10.23.0.42");
    assert_eq!(identity.node_address(), "10.23.0.1");
}

#[test]
fn classification_covers_every_interface() {
    let interfaces = source(&[lo(), enp9s0(), wlan0(), eth2(), tun0()]);
    let identity = resolver::resolve(&interfaces, &AddressPrefix::default()).unwrap();
    let classes = identity.interface_classification();

    assert_eq!(classes.len(), 5);
    assert_eq!(classes["wlan0"], InterfaceClass::Matched);
    assert_eq!(classes["eth2"], InterfaceClass::Disconnected);
    assert_eq!(classes["tun0"], InterfaceClass::NonMatching);
    assert_eq!(classes["lo"], InterfaceClass::NonMatching);

    let legacy = identity.legacy_classification();
    assert!(legacy["eth2"]);
    assert!(!legacy["wlan0"]);
    assert!(!legacy["enp9s0"]);
}

#[test]
fn no_mesh_interface_is_fatal() {
    let interfaces = source(&[lo(), enp9s0(), eth2(), tun0()]);
    let result = resolver::resolve(&interfaces, &AddressPrefix::default());
    assert_eq!(result, Err(ResolveError::NoCommotionAddressFound));
}

#[test]
fn disconnected_interfaces_never_raise() {
    let interfaces = source(&[eth2()]).interfaces().unwrap();
    let (classes, candidate) = resolver::classify_interfaces(&interfaces, &AddressPrefix::default());
    assert!(candidate.is_none());
    assert_eq!(classes["eth2"], InterfaceClass::Disconnected);
}

#[test]
fn last_matching_interface_wins() {
    let wifi_first = source(&[wlan0(), eth1()]);
    let identity = resolver::resolve(&wifi_first, &AddressPrefix::default()).unwrap();
    assert_eq!(identity.client_address(), "10.99.1.7");
    assert_eq!(identity.node_address(), "10.99.1.1");

    let cable_first = source(&[eth1(), wlan0()]);
    let identity = resolver::resolve(&cable_first, &AddressPrefix::default()).unwrap();
    assert_eq!(identity.client_address(), "10.23.0.42");
    assert_eq!(identity.node_address(), "10.23.0.1");
}

#[test]
fn carrier_grade_nat_is_not_the_mesh() {
    // 100.64.0.0/10 starts with "10" textually but not with "10."
    let interfaces = source(&[tun0()]);
    let result = resolver::resolve(&interfaces, &AddressPrefix::default());
    assert_eq!(result, Err(ResolveError::NoCommotionAddressFound));
}

#[test]
fn narrower_prefix_skips_other_ten_networks() {
    let interfaces = source(&[wlan0(), eth1()]);
    let prefix: AddressPrefix = "10.23".parse().unwrap();
    let identity = resolver::resolve(&interfaces, &prefix).unwrap();
    assert_eq!(identity.node_address(), "10.23.0.1");
    assert_eq!(identity.interface_classification()["eth1"], InterfaceClass::NonMatching);
}

#[test]
fn node_address_keeps_first_three_octets() {
    assert_eq!(resolver::derive_node_address("10.23.0.42").unwrap(), "10.23.0.1");
    assert!(matches!(
        resolver::derive_node_address(""),
        Err(ResolveError::InvalidAddressFormat { .. })
    ));
}
