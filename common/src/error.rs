use thiserror::Error;

/// Failures while working out which address the router lives on.
///
/// Both resolution failures are fatal for a test session: every page
/// URL is built from the node address, so nothing can run without it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No interface carries an address inside the private network prefix.
    #[error("no valid Commotion IP address found on any network interface")]
    NoCommotionAddressFound,

    /// A matched address has no trailing octet to rewrite.
    #[error("address '{address}' has no trailing octet to derive a node address from")]
    InvalidAddressFormat { address: String },

    /// The operating system refused to list its interfaces.
    #[error("failed to enumerate network interfaces: {0}")]
    Enumeration(String),
}

/// Failures around the resolver: settings, page loads and I/O.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The page never showed its known-good landmark.
    #[error("page {url} did not load: landmark '{landmark}' not found")]
    PageNotLoaded { url: String, landmark: String },

    #[error("settings error: {0}")]
    Settings(String),

    #[error("browser driver error: {0}")]
    Driver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for HarnessError {
    fn from(err: toml::de::Error) -> Self {
        HarnessError::Settings(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
