// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::error::ConfigError;
use crate::record::FieldSet;
use crate::specs::search::SearchQuery;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// How the loop decides a page is ready for extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitStrategy {
    /// Block until the listing container is present, or fail after the timeout.
    Condition(Duration),
    /// Sleep, then extract whatever is in the DOM.
    Fixed(Duration),
}

impl Default for WaitStrategy {
    fn default() -> Self {
        WaitStrategy::Condition(Duration::from_secs(WAIT_TIMEOUT_SECS))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub query: SearchQuery,
    pub pages: u32,
    pub wait: WaitStrategy,
    pub fields: FieldSet,
    pub headless: bool,
    /// Scheme + host the search path is appended to.
    pub site_root: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            query: SearchQuery::new(DEFAULT_TITLE, DEFAULT_LOCATION),
            pages: DEFAULT_PAGES,
            wait: WaitStrategy::default(),
            fields: FieldSet::WithExperience,
            headless: true,
            site_root: s!(SITE_ROOT),
        }
    }
}

impl ScrapeOptions {
    /// Checked once per run, before a browser is opened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages == 0 {
            return Err(ConfigError::Invalid {
                key: s!("pages"),
                value: s!("0"),
                reason: s!("at least one page is required"),
            });
        }
        Ok(())
    }

    pub fn base_url(&self) -> String {
        self.query.base_url(&self.site_root)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Parse user text into the output path. A trailing separator or an
    /// existing directory means "default file name inside this dir".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = PathBuf::from(s);
        self.out_path = if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            p.join(join!("job_postings.", self.format.ext()))
        } else {
            p
        };
    }

    /// Switch format. The extension follows along only if it still matches
    /// the old format's; a user-typed extension is left alone.
    pub fn set_format(&mut self, fmt: ExportFormat) {
        let old_ext = self.format.ext();
        let matches_old = self
            .out_path
            .extension()
            .map(|e| e.eq_ignore_ascii_case(old_ext))
            .unwrap_or(false);
        if matches_old {
            self.out_path.set_extension(fmt.ext());
        }
        self.format = fmt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_switch_follows_default_extension() {
        let mut export = ExportOptions::default();
        export.set_format(ExportFormat::Tsv);
        assert_eq!(export.out_path(), Path::new("job_postings.tsv"));
    }

    #[test]
    fn format_switch_keeps_custom_extension() {
        let mut export = ExportOptions::default();
        export.set_path("out/jobs.data");
        export.set_format(ExportFormat::Tsv);
        assert_eq!(export.out_path(), Path::new("out/jobs.data"));
        assert_eq!(export.format, ExportFormat::Tsv);
    }

    #[test]
    fn dir_hint_gets_default_file_name() {
        let mut export = ExportOptions::default();
        export.set_path("out/");
        assert_eq!(export.out_path(), Path::new("out/job_postings.csv"));
    }

    #[test]
    fn zero_pages_rejected() {
        let mut scrape = ScrapeOptions::default();
        assert!(scrape.validate().is_ok());
        scrape.pages = 0;
        assert!(matches!(scrape.validate(), Err(ConfigError::Invalid { .. })));
    }
}
