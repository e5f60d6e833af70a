use std::fmt;

use crate::network::identity::NetworkIdentity;

/// Pages the acceptance checks know how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page shown to unprivileged users.
    Home,
    /// Admin entry point; shows the login form without a session token.
    Login,
    /// Admin pages proper, reachable only with a session token.
    Admin,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Login, Page::Admin];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/cgi-bin/luci",
            Page::Login | Page::Admin => "/cgi-bin/luci/admin",
        }
    }

    pub fn requires_token(self) -> bool {
        matches!(self, Page::Admin)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// Base URL of the router's admin interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterTarget {
    base_url: String,
}

impl RouterTarget {
    pub fn new(identity: &NetworkIdentity, scheme: &str) -> Self {
        Self {
            base_url: format!("{}://{}", scheme, identity.node_address()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, page: Page) -> String {
        format!("{}{}", self.base_url, page.path())
    }

    /// Admin URL carrying a LuCI session token (`;stok=`).
    pub fn admin_url_with_token(&self, stok: &str) -> String {
        format!("{}/cgi-bin/luci/;stok={}/admin", self.base_url, stok)
    }
}
