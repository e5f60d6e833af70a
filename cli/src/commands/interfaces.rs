use colored::*;
use nodeprobe_common::config::Config;
use nodeprobe_common::network::interface::InterfaceAddress;
use nodeprobe_common::system::InterfaceSource;
use nodeprobe_core::resolver;

use crate::terminal::{colors, network_fmt, print};

/// Diagnostic listing; unlike `identity` it succeeds even without a match.
pub fn interfaces(source: &dyn InterfaceSource, cfg: &Config) -> anyhow::Result<()> {
    let interfaces: Vec<InterfaceAddress> = source.interfaces()?;
    let (classification, candidate) = resolver::classify_interfaces(&interfaces, &cfg.prefix);

    for (idx, interface) in interfaces.iter().enumerate() {
        let Some(class) = classification.get(&interface.interface_name) else {
            continue;
        };
        if cfg.quiet > 1 {
            print::print(&format!("{}\t{}", interface.interface_name, class));
            continue;
        }
        network_fmt::print_interface(interface, *class, idx);
    }

    if cfg.quiet > 1 {
        return Ok(());
    }

    print::fat_separator();
    let summary: ColoredString = match candidate {
        Some(address) => {
            format!("Commotion client address: {}", address.bold()).color(colors::MATCHED)
        }
        None => format!("No interface matches prefix {}", cfg.prefix).color(colors::DISCONNECTED),
    };
    print::centerln(&summary.to_string());
    Ok(())
}
