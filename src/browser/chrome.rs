// src/browser/chrome.rs
use std::{fmt::Display, sync::Arc, time::Duration};

use headless_chrome::{Browser as Chrome, LaunchOptions, Tab};

use super::Browser;
use crate::error::BrowserError;

/// One Chrome process + one tab for the whole run. Dropping the session
/// closes the browser (headless_chrome kills the child process on drop).
pub struct ChromeSession {
    // dropped in order: tab, then the browser process
    tab: Arc<Tab>,
    _chrome: Chrome,
    url: Option<String>,
}

impl ChromeSession {
    pub fn launch(headless: bool, nav_timeout: Duration) -> Result<Self, BrowserError> {
        let options = LaunchOptions {
            headless,
            window_size: Some((1366, 900)),
            idle_browser_timeout: nav_timeout.max(Duration::from_secs(60)) * 2,
            ..Default::default()
        };

        let chrome = Chrome::new(options).map_err(|e| BrowserError::Launch(e.to_string()))?;
        let tab = chrome.new_tab().map_err(|e| BrowserError::Launch(e.to_string()))?;
        tab.set_default_timeout(nav_timeout);

        logf!("Browser: launched (headless={headless}, nav_timeout={}s)", nav_timeout.as_secs());
        Ok(Self { tab, _chrome: chrome, url: None })
    }
}

fn navigation_error<E: Display>(url: &str) -> impl FnOnce(E) -> BrowserError + '_ {
    move |e| BrowserError::Navigation { url: s!(url), reason: e.to_string() }
}

impl Browser for ChromeSession {
    fn load(&mut self, url: &str) -> Result<(), BrowserError> {
        logd!("Browser: load {url}");
        self.tab.navigate_to(url).map_err(navigation_error(url))?;
        self.tab.wait_until_navigated().map_err(navigation_error(url))?;
        self.url = Some(s!(url));
        Ok(())
    }

    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|e| {
                logd!("Browser: wait for {selector} failed: {e}");
                BrowserError::Timeout { selector: s!(selector), secs: timeout.as_secs() }
            })
    }

    fn content(&mut self) -> Result<String, BrowserError> {
        self.tab.get_content().map_err(|e| BrowserError::Content(e.to_string()))
    }

    fn current_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        logf!("Browser: session released");
    }
}
