//! # Network Identity Resolver
//!
//! Works out which local interface sits on the router's private network,
//! the host's address there, and a guess for the router's own address.
//!
//! The guess is textual: the router is assumed to own the `.1` address of
//! whatever network the host was handed an address on.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use nodeprobe_common::error::ResolveError;
use nodeprobe_common::network::identity::NetworkIdentity;
use nodeprobe_common::network::interface::{InterfaceAddress, InterfaceClass};
use nodeprobe_common::network::prefix::AddressPrefix;
use nodeprobe_common::system::InterfaceSource;

/// Classifies every interface and picks the candidate client address.
///
/// When more than one interface matches, the last one in `interfaces`
/// wins. OS enumeration order is not guaranteed, so callers that care
/// should sort first.
pub fn classify_interfaces(
    interfaces: &[InterfaceAddress],
    prefix: &AddressPrefix,
) -> (BTreeMap<String, InterfaceClass>, Option<String>) {
    let mut classification: BTreeMap<String, InterfaceClass> = BTreeMap::new();
    let mut candidate: Option<String> = None;

    for interface in interfaces {
        let name = &interface.interface_name;
        let class = match interface.ipv4_address.as_deref() {
            None => {
                debug!("{name} has been disconnected");
                InterfaceClass::Disconnected
            }
            Some(address) if prefix.matches(address) => {
                if let Some(previous) = &candidate {
                    warn!("{name} also matches, replacing {previous} with {address}");
                }
                info!("{name} has a valid Commotion IP address: {address}");
                candidate = Some(address.to_string());
                InterfaceClass::Matched
            }
            Some(address) => {
                debug!("{name} not valid ({address})");
                InterfaceClass::NonMatching
            }
        };
        classification.insert(name.clone(), class);
    }

    (classification, candidate)
}

/// Replaces the trailing octet of `client_address` with `1`.
///
/// No range checks are made; `10.0.0.999` becomes `10.0.0.1`.
pub fn derive_node_address(client_address: &str) -> Result<String, ResolveError> {
    let head = client_address.trim_end_matches(|c: char| c.is_ascii_digit());
    if head.len() == client_address.len() {
        return Err(ResolveError::InvalidAddressFormat {
            address: client_address.to_string(),
        });
    }

    Ok(format!("{head}1"))
}

/// Enumerates interfaces from `source` and builds the session's identity.
pub fn resolve(
    source: &dyn InterfaceSource,
    prefix: &AddressPrefix,
) -> Result<NetworkIdentity, ResolveError> {
    let interfaces: Vec<InterfaceAddress> = source.interfaces()?;
    debug!("Identified {} network interface(s)", interfaces.len());

    let (classification, candidate) = classify_interfaces(&interfaces, prefix);
    let client_address = candidate.ok_or(ResolveError::NoCommotionAddressFound)?;
    info!("Commotion client IP is {client_address}");

    let node_address = derive_node_address(&client_address)?;
    info!("Commotion node IP is {node_address}");

    Ok(NetworkIdentity::new(client_address, node_address, classification))
}
