use colored::*;
use nodeprobe_common::config::Config;
use nodeprobe_common::router::locator;

use crate::terminal::{colors, print};

pub fn locators(cfg: &Config) {
    let mut current_page: Option<&str> = None;
    let mut idx: usize = 0;
    let mut rows: Vec<(String, ColoredString)> = Vec::new();

    for (page, name, loc) in locator::table() {
        if current_page != Some(page) {
            flush(&mut rows);
            if cfg.quiet == 0 {
                print::tree_head(idx, page);
            }
            idx += 1;
            current_page = Some(page);
        }
        if cfg.quiet > 0 {
            print::print(&format!("{page}.{name}\t{loc}"));
        } else {
            rows.push((name.to_string(), loc.to_string().color(colors::ACCENT)));
        }
    }
    flush(&mut rows);
}

fn flush(rows: &mut Vec<(String, ColoredString)>) {
    if !rows.is_empty() {
        print::as_tree_one_level(std::mem::take(rows));
    }
}
