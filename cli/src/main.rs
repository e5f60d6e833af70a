mod commands;
mod terminal;

use commands::{CommandLine, Commands, identity, interfaces, locators, urls};
use nodeprobe_common::config::Config;
use nodeprobe_core::session;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = build_config(&commands)?;
    let source = commands.interface_source();

    match commands.command {
        Commands::Identity => {
            print::header("resolving network identity", cfg.quiet);
            identity::identity(source.as_ref(), cfg)
        }
        Commands::Interfaces => {
            print::header("local interfaces", cfg.quiet);
            interfaces::interfaces(source.as_ref(), &cfg)
        }
        Commands::Urls => {
            print::header("router admin pages", cfg.quiet);
            urls::urls(source.as_ref(), cfg)
        }
        Commands::Locators => {
            print::header("page landmarks", cfg.quiet);
            locators::locators(&cfg);
            Ok(())
        }
    }
}

/// Settings file first, command-line flags on top.
fn build_config(commands: &CommandLine) -> anyhow::Result<Config> {
    let settings = session::load_settings(&commands.settings)?;
    let mut cfg = settings.into_config(commands.quiet);

    if let Some(prefix) = &commands.prefix {
        cfg.prefix = prefix.clone();
    }
    if let Some(scheme) = &commands.scheme {
        cfg.scheme = scheme.clone();
    }

    Ok(cfg)
}
