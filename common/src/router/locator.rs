//! Landmark elements for each page.
//!
//! Each entry names an element the checks wait for or inspect, together
//! with the strategy a browser driver should use to find it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    Id,
    ClassName,
    Name,
    LinkText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator {
    pub by: LocatorKind,
    pub value: &'static str,
}

impl Locator {
    pub const fn new(by: LocatorKind, value: &'static str) -> Self {
        Self { by, value }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}={}", self.by, self.value)
    }
}

/// Present on every page rendered by the router's template.
pub mod common {
    use super::{Locator, LocatorKind};

    pub const COMMOTION_LOGO: Locator = Locator::new(LocatorKind::Id, "device");
    /// Footer text; holds the release string among other credits.
    pub const VERSION: Locator = Locator::new(LocatorKind::ClassName, "credits");
}

pub mod login {
    use super::{Locator, LocatorKind};

    pub const USERNAME_FIELD: Locator = Locator::new(LocatorKind::Name, "username");
    pub const PASSWORD_FIELD: Locator = Locator::new(LocatorKind::Id, "focus_password");
    pub const ERROR: Locator = Locator::new(LocatorKind::ClassName, "error");
    pub const SUBMIT: Locator = Locator::new(LocatorKind::ClassName, "cbi-button-apply");
    pub const RESET: Locator = Locator::new(LocatorKind::ClassName, "cbi-button-reset");
}

pub mod home {
    use super::{Locator, LocatorKind};

    pub const APPS_HEADER: Locator = Locator::new(LocatorKind::ClassName, "appsH2");
    pub const USER_ADD_APP: Locator = Locator::new(LocatorKind::Id, "add_app");
}

pub mod admin {
    use super::{Locator, LocatorKind};

    pub const LOGOUT: Locator = Locator::new(LocatorKind::LinkText, "Logout");
}

/// Every known landmark, grouped by page, for listing and diagnostics.
pub fn table() -> Vec<(&'static str, &'static str, Locator)> {
    vec![
        ("common", "commotion_logo", common::COMMOTION_LOGO),
        ("common", "version", common::VERSION),
        ("login", "username_field", login::USERNAME_FIELD),
        ("login", "password_field", login::PASSWORD_FIELD),
        ("login", "error", login::ERROR),
        ("login", "submit", login::SUBMIT),
        ("login", "reset", login::RESET),
        ("home", "apps_header", home::APPS_HEADER),
        ("home", "user_add_app", home::USER_ADD_APP),
        ("admin", "logout", admin::LOGOUT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_landmark_once() {
        let table = table();
        assert_eq!(table.len(), 10);

        let mut keys: Vec<(&str, &str)> = table.iter().map(|(page, name, _)| (*page, *name)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn logo_is_looked_up_by_id() {
        assert_eq!(common::COMMOTION_LOGO.by, LocatorKind::Id);
        assert_eq!(common::COMMOTION_LOGO.to_string(), "Id=device");
    }
}
