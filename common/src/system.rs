use crate::error::ResolveError;
use crate::network::interface::InterfaceAddress;

/// Anything that can list the host's interfaces.
///
/// The resolver only ever asks once per session, so implementations are
/// free to be slow or to return a fixed list.
pub trait InterfaceSource {
    fn interfaces(&self) -> Result<Vec<InterfaceAddress>, ResolveError>;
}
