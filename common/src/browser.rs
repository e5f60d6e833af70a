use std::time::Duration;

use crate::error::Result;
use crate::router::locator::Locator;

/// The browser capability the page checks are written against.
///
/// nodeprobe does not drive a browser itself. Implementations wrap a real
/// WebDriver session; tests use a scripted fake.
pub trait BrowserDriver {
    fn open(&mut self, url: &str) -> Result<()>;

    fn current_url(&self) -> String;

    /// Blocks until `locator` is present or `timeout` passes.
    fn wait_for(&mut self, locator: Locator, timeout: Duration) -> bool;

    /// Text of the first matching element, `None` if absent.
    fn find_text(&self, locator: Locator) -> Option<String>;

    fn is_displayed(&self, locator: Locator) -> bool;

    fn type_into(&mut self, locator: Locator, text: &str) -> Result<()>;

    fn click(&mut self, locator: Locator) -> Result<()>;

    fn is_present(&self, locator: Locator) -> bool {
        self.find_text(locator).is_some()
    }
}
