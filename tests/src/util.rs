#![cfg(test)]
use nodeprobe_common::network::interface::InterfaceAddress;
use nodeprobe_core::system::FixedInterfaces;
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/// Runs pnet interfaces through the same conversion the live source uses.
pub fn source(interfaces: &[NetworkInterface]) -> FixedInterfaces {
    FixedInterfaces::new(interfaces.iter().map(InterfaceAddress::from).collect())
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

pub fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

pub fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 5, 77, 24),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

/// Joined to a Commotion mesh access point.
pub fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x3c, 0x22, 0xfb, 0x10, 0x20, 0x30)),
        &[v4(10, 23, 0, 42, 8), v6("fe80::3e22:fbff:fe10:2030", 64)],
        69699,
    )
}

/// Cable plugged into the router's LAN port.
pub fn eth1() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x00, 0x1b, 0x21, 0x3a, 0x4b, 0x5c)),
        &[v4(10, 99, 1, 7, 24)],
        69699,
    )
}

/// Unplugged; only a link-local v6 remains.
pub fn eth2() -> NetworkInterface {
    ni(
        "eth2",
        5,
        Some(MacAddr::new(0x00, 0x1b, 0x21, 0x3a, 0x4b, 0x5d)),
        &[v6("fe80::21b:21ff:fe3a:4b5d", 64)],
        4099,
    )
}

pub fn tun0() -> NetworkInterface {
    ni("tun0", 6, None, &[v4(100, 64, 0, 2, 10)], 69841)
}
