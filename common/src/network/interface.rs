use std::fmt;

use pnet::datalink::NetworkInterface;

use crate::utils::interface::NetworkInterfaceExtension;

/// Snapshot of one OS interface as the resolver sees it.
///
/// Only the first IPv4 address counts. An interface without one is treated
/// as disconnected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    pub interface_name: String,
    pub ipv4_address: Option<String>,
}

impl InterfaceAddress {
    pub fn new(interface_name: impl Into<String>, ipv4_address: Option<&str>) -> Self {
        Self {
            interface_name: interface_name.into(),
            ipv4_address: ipv4_address.map(str::to_string),
        }
    }

    pub fn connected(interface_name: impl Into<String>, ipv4_address: &str) -> Self {
        Self::new(interface_name, Some(ipv4_address))
    }

    pub fn disconnected(interface_name: impl Into<String>) -> Self {
        Self::new(interface_name, None)
    }
}

impl From<&NetworkInterface> for InterfaceAddress {
    fn from(interface: &NetworkInterface) -> Self {
        Self {
            interface_name: interface.name.clone(),
            ipv4_address: interface.first_ipv4().map(|ip| ip.to_string()),
        }
    }
}

/// How an interface relates to the private mesh network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceClass {
    /// No IPv4 address assigned.
    Disconnected,
    /// Has an address outside the private prefix.
    NonMatching,
    /// Has an address inside the private prefix.
    Matched,
}

impl InterfaceClass {
    /// The boolean the old harness logged per interface: `true` only for
    /// disconnected interfaces, `false` for anything with an address.
    pub fn legacy_flag(self) -> bool {
        matches!(self, InterfaceClass::Disconnected)
    }

    pub fn label(self) -> &'static str {
        match self {
            InterfaceClass::Disconnected => "disconnected",
            InterfaceClass::NonMatching => "not valid",
            InterfaceClass::Matched => "commotion",
        }
    }
}

impl fmt::Display for InterfaceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
