use pnet::datalink::{self, NetworkInterface};
use tracing::trace;

use nodeprobe_common::error::ResolveError;
use nodeprobe_common::network::interface::InterfaceAddress;
use nodeprobe_common::system::InterfaceSource;

/// Reads the live interface list from the OS via `pnet`.
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceAddress>, ResolveError> {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();
        if interfaces.is_empty() {
            return Err(ResolveError::Enumeration(
                "the OS reported no network interfaces".to_string(),
            ));
        }

        Ok(interfaces
            .iter()
            .inspect(|iface| trace!("{} reports {} address(es)", iface.name, iface.ips.len()))
            .map(InterfaceAddress::from)
            .collect())
    }
}

/// A canned interface list, in the order given.
#[derive(Debug, Clone, Default)]
pub struct FixedInterfaces {
    interfaces: Vec<InterfaceAddress>,
}

impl FixedInterfaces {
    pub fn new(interfaces: Vec<InterfaceAddress>) -> Self {
        Self { interfaces }
    }
}

impl InterfaceSource for FixedInterfaces {
    fn interfaces(&self) -> Result<Vec<InterfaceAddress>, ResolveError> {
        Ok(self.interfaces.clone())
    }
}
