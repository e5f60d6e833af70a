//! # Network Identity
//!
//! The result of a single resolution pass: who we are on the mesh and where
//! we expect the router to be.

use std::collections::BTreeMap;

use crate::network::interface::InterfaceClass;

/// Resolved addresses for one test session.
///
/// Built once by the resolver and never mutated afterwards. The
/// classification is kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkIdentity {
    client_address: String,
    node_address: String,
    interface_classification: BTreeMap<String, InterfaceClass>,
}

impl NetworkIdentity {
    pub fn new(
        client_address: String,
        node_address: String,
        interface_classification: BTreeMap<String, InterfaceClass>,
    ) -> Self {
        Self {
            client_address,
            node_address,
            interface_classification,
        }
    }

    /// This host's address on the private network.
    pub fn client_address(&self) -> &str {
        &self.client_address
    }

    /// Best guess for the router's management address.
    pub fn node_address(&self) -> &str {
        &self.node_address
    }

    pub fn interface_classification(&self) -> &BTreeMap<String, InterfaceClass> {
        &self.interface_classification
    }

    /// Name to boolean view, `true` meaning disconnected.
    pub fn legacy_classification(&self) -> BTreeMap<String, bool> {
        self.interface_classification
            .iter()
            .map(|(name, class)| (name.clone(), class.legacy_flag()))
            .collect()
    }
}
