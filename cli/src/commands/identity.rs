use colored::*;
use nodeprobe_common::config::Config;
use nodeprobe_common::system::InterfaceSource;
use nodeprobe_core::session::Session;

use crate::terminal::{colors, print};

pub fn identity(source: &dyn InterfaceSource, cfg: Config) -> anyhow::Result<()> {
    let session = Session::start(cfg, source)?;
    let identity = session.identity();
    let quiet = session.config().quiet;

    if quiet > 1 {
        print::print(identity.node_address());
        return Ok(());
    }

    print::aligned_line("Prefix", session.config().prefix.to_string());
    print::aligned_line("Client IP", identity.client_address().color(colors::IPV4_ADDR));
    print::aligned_line("Node IP", identity.node_address().color(colors::IPV4_ADDR).bold());
    print::aligned_line("Admin URL", session.target().base_url().color(colors::URL));
    print::end_of_program(quiet);
    Ok(())
}
