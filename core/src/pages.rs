//! # Router Page Checks
//!
//! Thin assertions over the router's LuCI pages, written against the
//! [`BrowserDriver`] capability so they can run on any WebDriver binding.

use tracing::{debug, info, warn};

use nodeprobe_common::browser::BrowserDriver;
use nodeprobe_common::error::{HarnessError, Result};
use nodeprobe_common::router::locator::{admin, common, home, login};
use nodeprobe_common::router::page::Page;

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The logout link appeared, so the admin area is open.
    Accepted,
    /// The login form showed its error message.
    Rejected,
    /// Neither landmark showed up.
    Inconclusive,
}

/// One loaded router page and the checks that apply to it.
pub struct RouterPage<'a, D: BrowserDriver> {
    driver: &'a mut D,
    session: &'a Session,
    page: Page,
}

impl<'a, D: BrowserDriver> RouterPage<'a, D> {
    /// Navigates to `page` and waits for the router template to render.
    pub fn open(driver: &'a mut D, session: &'a Session, page: Page) -> Result<Self> {
        let url = session.target().url(page);
        driver.open(&url)?;

        debug!("Waiting for presence of known-good page element");
        if !driver.wait_for(common::COMMOTION_LOGO, session.config().page_timeout) {
            return Err(HarnessError::PageNotLoaded {
                url,
                landmark: common::COMMOTION_LOGO.value.to_string(),
            });
        }

        let rendered = driver.current_url();
        if rendered == url {
            info!("{rendered} loaded successfully");
        } else {
            warn!("Rendered url {rendered} does not match expected url {url}");
        }

        Ok(Self {
            driver,
            session,
            page,
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Whether the footer carries `expected` somewhere in its text.
    pub fn shows_revision(&mut self, expected: &str) -> bool {
        let timeout = self.session.config().page_timeout;
        if !self.driver.wait_for(common::VERSION, timeout) {
            warn!("Footer element {} not found", common::VERSION);
            return false;
        }

        match self.driver.find_text(common::VERSION) {
            Some(footer) if footer.contains(expected) => true,
            Some(footer) => {
                warn!("Footer version '{footer}' does not match test version '{expected}'");
                false
            }
            None => false,
        }
    }

    /// Unprivileged users get an "add app" button only when the admin has
    /// enabled it; the default is off.
    pub fn users_can_add_apps(&self) -> bool {
        let present = self.driver.is_present(home::USER_ADD_APP);
        if present {
            info!("Users can add applications from the homepage");
        }
        present
    }

    /// Admin pages must show a password field when no session token is set.
    pub fn password_required(&self) -> bool {
        let present = self.driver.is_present(login::PASSWORD_FIELD);
        if !present {
            warn!("Login page element {} not found", login::PASSWORD_FIELD);
        }
        present
    }

    /// Submits `password` through the login form.
    ///
    /// A password ending in a newline submits itself, so the button is
    /// only clicked when there is none.
    pub fn login(&mut self, password: &str) -> Result<LoginOutcome> {
        self.driver.type_into(login::PASSWORD_FIELD, password)?;
        if !password.contains('\n') {
            self.driver.click(login::SUBMIT)?;
        }

        let timeout = self.session.config().page_timeout;
        if self.driver.wait_for(admin::LOGOUT, timeout) && self.driver.is_displayed(admin::LOGOUT)
        {
            info!("Login successful");
            return Ok(LoginOutcome::Accepted);
        }
        if self.driver.is_displayed(login::ERROR) {
            info!("Login page displays error message on incorrect password");
            return Ok(LoginOutcome::Rejected);
        }

        warn!("Login neither succeeded nor showed an error");
        Ok(LoginOutcome::Inconclusive)
    }
}
