#![cfg(test)]
use std::fs;

use nodeprobe_common::config::Config;
use nodeprobe_common::error::ResolveError;
use nodeprobe_common::router::page::Page;
use nodeprobe_core::session::{self, Session, SETTINGS_FILE, SETTINGS_TEMPLATE};

use crate::util::{enp9s0, lo, source, wlan0};

#[test]
fn session_targets_router_admin_pages() {
    let session = Session::start(Config::default(), &source(&[lo(), wlan0()])).unwrap();
    let target = session.target();

    assert_eq!(target.url(Page::Home), "https://10.23.0.1/cgi-bin/luci");
    assert_eq!(target.url(Page::Login), "https://10.23.0.1/cgi-bin/luci/admin");
}

#[test]
fn session_refuses_to_start_off_mesh() {
    let err = Session::start(Config::default(), &source(&[lo(), enp9s0()])).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ResolveError>(),
        Some(&ResolveError::NoCommotionAddressFound)
    );
}

#[test]
fn bootstrapped_settings_drive_the_session() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(SETTINGS_TEMPLATE),
        "[network]\nprefix = \"192.168\"\n\n[router]\nscheme = \"http\"\n",
    )
    .unwrap();

    let path = dir.path().join(SETTINGS_FILE);
    let config = session::load_settings(&path).unwrap().into_config(0);
    assert!(path.is_file());

    let session = Session::start(config, &source(&[lo(), enp9s0(), wlan0()])).unwrap();
    assert_eq!(session.identity().client_address(), "192.168.5.77");
    assert_eq!(session.target().url(Page::Home), "http://192.168.5.1/cgi-bin/luci");
}
