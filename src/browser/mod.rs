// src/browser/mod.rs
//
// The browser collaborator. The scrape loop only needs to load a URL,
// wait (bounded) for a selector, and read the rendered HTML; element
// lookup and text happen on the parsed HTML (`core::html`).

mod chrome;
mod replay;

use std::time::Duration;

use crate::error::BrowserError;

pub use chrome::ChromeSession;
pub use replay::ReplayBrowser;

pub trait Browser {
    /// Navigate and block until the load settles (or the session's own
    /// navigation timeout fires).
    fn load(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Block until `selector` matches something, or fail after `timeout`.
    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// Rendered HTML of the current page.
    fn content(&mut self) -> Result<String, BrowserError>;

    fn current_url(&self) -> Option<&str>;
}
