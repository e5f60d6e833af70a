pub mod identity;
pub mod interfaces;
pub mod locators;
pub mod urls;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use nodeprobe_common::network::interface::InterfaceAddress;
use nodeprobe_common::network::prefix::AddressPrefix;
use nodeprobe_common::system::InterfaceSource;
use nodeprobe_core::session::SETTINGS_FILE;
use nodeprobe_core::system::{FixedInterfaces, SystemInterfaces};

#[derive(Parser)]
#[command(name = "nodeprobe")]
#[command(about = "Locate a Commotion router and prepare its admin pages for acceptance checks.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file, bootstrapped from example-nodeprobe.toml when missing
    #[arg(long, global = true, default_value = SETTINGS_FILE, env = "NODEPROBE_SETTINGS")]
    pub settings: PathBuf,

    /// Leading octets of the router's private network (e.g. 10 or 10.23)
    #[arg(long, global = true, env = "NODEPROBE_PREFIX")]
    pub prefix: Option<AddressPrefix>,

    /// URL scheme of the admin interface
    #[arg(long, global = true)]
    pub scheme: Option<String>,

    /// Use these interfaces instead of asking the OS, as NAME=ADDR or NAME= when disconnected
    #[arg(long = "interface", global = true, value_parser = parse_interface)]
    pub interfaces: Vec<InterfaceAddress>,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output, twice for bare values only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve this host's Commotion address and the router's node address
    #[command(alias = "id")]
    Identity,
    /// Show how each local interface was classified
    #[command(alias = "i")]
    Interfaces,
    /// Print the router's admin page URLs
    #[command(alias = "u")]
    Urls,
    /// List the page landmarks the checks look for
    #[command(alias = "l")]
    Locators,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn interface_source(&self) -> Box<dyn InterfaceSource> {
        if self.interfaces.is_empty() {
            Box::new(SystemInterfaces)
        } else {
            Box::new(FixedInterfaces::new(self.interfaces.clone()))
        }
    }
}

fn parse_interface(s: &str) -> Result<InterfaceAddress, String> {
    let (name, address) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid interface: {s} (expected NAME=ADDR)"))?;
    if name.is_empty() {
        return Err(format!("invalid interface: {s} (missing name)"));
    }
    let address = address.trim();
    Ok(InterfaceAddress::new(name, (!address.is_empty()).then_some(address)))
}
