use colored::*;
use nodeprobe_common::config::Config;
use nodeprobe_common::router::page::Page;
use nodeprobe_common::system::InterfaceSource;
use nodeprobe_core::session::Session;

use crate::terminal::{colors, print};

pub fn urls(source: &dyn InterfaceSource, cfg: Config) -> anyhow::Result<()> {
    let session = Session::start(cfg, source)?;
    let quiet = session.config().quiet;

    for page in Page::ALL {
        let url = session.target().url(page);
        if quiet > 1 {
            print::print(&url);
            continue;
        }
        let label = if page.requires_token() {
            format!("{page} (token)")
        } else {
            page.to_string()
        };
        print::aligned_line(&label, url.color(colors::URL));
    }

    print::end_of_program(quiet);
    Ok(())
}
