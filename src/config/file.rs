// src/config/file.rs
//
// Optional `key=value` settings file. Blank lines and `#` comments are
// skipped; unknown keys are logged and ignored. Values land on top of the
// built-in defaults; CLI flags land on top of these.

use std::{fs, path::Path, time::Duration};

use super::consts::{FIXED_WAIT_SECS, WAIT_TIMEOUT_SECS};
use super::options::{AppOptions, ExportFormat, WaitStrategy};
use crate::error::ConfigError;
use crate::record::FieldSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub location: Option<String>,
    pub pages: Option<u32>,
    pub wait: Option<String>,
    pub timeout_secs: Option<u64>,
    pub experience: Option<bool>,
    pub headless: Option<bool>,
    pub format: Option<ExportFormat>,
    pub out: Option<String>,
    pub site_root: Option<String>,
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid { key: s!(key), value: s!(value), reason: s!(reason) }
}

fn parse_bool(key: &str, val: &str) -> Result<bool, ConfigError> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, val, "expected true/false")),
    }
}

/// Load from disk. A missing file is not an error: all fields stay `None`.
pub fn load(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse(&text)?;
    logf!("Config: loaded {}", path.display());
    Ok(cfg)
}

pub fn parse(text: &str) -> Result<ConfigFile, ConfigError> {
    let mut cfg = ConfigFile::default();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let Some(eq) = line.find('=') else {
            return Err(ConfigError::Syntax { line: n + 1, text: s!(line) });
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        match key {
            "title" => cfg.title = Some(s!(val)),
            "location" => cfg.location = Some(s!(val)),
            "pages" => {
                let v: u32 = val.parse().map_err(|_| invalid(key, val, "expected a number"))?;
                if v == 0 { return Err(invalid(key, val, "at least one page is required")); }
                cfg.pages = Some(v);
            }
            "wait" => match val.to_ascii_lowercase().as_str() {
                "condition" | "fixed" => cfg.wait = Some(val.to_ascii_lowercase()),
                _ => return Err(invalid(key, val, "expected condition or fixed")),
            },
            "timeout_secs" => {
                cfg.timeout_secs = Some(val.parse().map_err(|_| invalid(key, val, "expected seconds"))?);
            }
            "experience" => cfg.experience = Some(parse_bool(key, val)?),
            "headless" => cfg.headless = Some(parse_bool(key, val)?),
            "format" => {
                cfg.format = Some(ExportFormat::parse(val).ok_or_else(|| invalid(key, val, "expected csv or tsv"))?);
            }
            "out" => cfg.out = Some(s!(val)),
            "site_root" => cfg.site_root = Some(s!(val.trim_end_matches('/'))),
            other => logd!("Config: ignoring unknown key {other:?}"),
        }
    }
    Ok(cfg)
}

impl ConfigFile {
    pub fn apply(&self, opts: &mut AppOptions) {
        let scrape = &mut opts.scrape;
        if let Some(t) = &self.title { scrape.query.title = t.clone(); }
        if let Some(l) = &self.location { scrape.query.location = l.clone(); }
        if let Some(p) = self.pages { scrape.pages = p; }
        if let Some(e) = self.experience {
            scrape.fields = if e { FieldSet::WithExperience } else { FieldSet::Standard };
        }
        if let Some(h) = self.headless { scrape.headless = h; }
        if let Some(root) = &self.site_root { scrape.site_root = root.clone(); }

        // timeout applies to whichever strategy ends up selected; switching
        // strategy without one picks that strategy's default
        let secs = self.timeout_secs.map(Duration::from_secs);
        scrape.wait = match (self.wait.as_deref(), scrape.wait) {
            (Some("fixed") | None, WaitStrategy::Fixed(d)) => WaitStrategy::Fixed(secs.unwrap_or(d)),
            (Some("fixed"), WaitStrategy::Condition(_)) => {
                WaitStrategy::Fixed(secs.unwrap_or(Duration::from_secs(FIXED_WAIT_SECS)))
            }
            (Some(_), WaitStrategy::Fixed(_)) => {
                WaitStrategy::Condition(secs.unwrap_or(Duration::from_secs(WAIT_TIMEOUT_SECS)))
            }
            (_, WaitStrategy::Condition(d)) => WaitStrategy::Condition(secs.unwrap_or(d)),
        };

        if let Some(f) = self.format { opts.export.set_format(f); }
        if let Some(o) = &self.out { opts.export.set_path(o); }
    }
}
