// src/browser/replay.rs
//
// Serves saved pages instead of a live site. Used for offline runs
// (`--replay <dir>`), fixtures and benches. Waits never sleep: the selector
// is either in the saved page or the wait times out immediately.

use std::{collections::HashMap, fs, io, path::Path, time::Duration};

use super::Browser;
use crate::core::html::document_has;
use crate::error::BrowserError;
use crate::specs::search::page_url;

#[derive(Clone, Debug, Default)]
pub struct ReplayBrowser {
    pages: HashMap<String, String>,
    current: Option<String>,
    history: Vec<String>,
}

impl ReplayBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(s!(url), s!(html));
        self
    }

    /// `{dir}/1.html`, `{dir}/2.html`, … mapped onto the page URLs of
    /// `base_url`. Missing files are simply absent (loading them fails like
    /// a dead link would).
    pub fn from_dir(dir: &Path, base_url: &str, pages: u32) -> io::Result<Self> {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("replay dir not found: {}", dir.display()),
            ));
        }
        let mut out = Self::new();
        for n in 1..=pages {
            let path = dir.join(format!("{n}.html"));
            if path.is_file() {
                out.pages.insert(page_url(base_url, n), fs::read_to_string(&path)?);
            } else {
                logd!("Replay: no saved page {}", path.display());
            }
        }
        logf!("Replay: {} saved page(s) from {}", out.pages.len(), dir.display());
        Ok(out)
    }

    /// URLs loaded so far, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn current_html(&self) -> Option<&str> {
        self.current.as_ref().and_then(|u| self.pages.get(u)).map(String::as_str)
    }
}

impl Browser for ReplayBrowser {
    fn load(&mut self, url: &str) -> Result<(), BrowserError> {
        self.history.push(s!(url));
        if !self.pages.contains_key(url) {
            return Err(BrowserError::Navigation {
                url: s!(url),
                reason: s!("no saved page for this URL"),
            });
        }
        self.current = Some(s!(url));
        Ok(())
    }

    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
        let found = match self.current_html() {
            Some(html) => document_has(html, selector)?,
            None => false,
        };
        if found {
            Ok(())
        } else {
            Err(BrowserError::Timeout { selector: s!(selector), secs: timeout.as_secs() })
        }
    }

    fn content(&mut self) -> Result<String, BrowserError> {
        self.current_html()
            .map(String::from)
            .ok_or_else(|| BrowserError::Content(s!("no page loaded")))
    }

    fn current_url(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
