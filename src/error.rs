// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// A required sub-field was not found on a listing card.
/// The card is dropped; the page carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing {field} ({selector})")]
    Missing { field: &'static str, selector: &'static str },
}

/// Failures from the browser collaborator. Any of these ends the page loop.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("could not start browser: {0}")]
    Launch(String),
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },
    #[error("timed out after {secs}s waiting for {selector}")]
    Timeout { selector: String, secs: u64 },
    #[error("could not read page content: {0}")]
    Content(String),
    #[error("invalid selector {0:?}")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error("interrupted by user")]
    Interrupted,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("line {line}: expected key=value, got {text:?}")]
    Syntax { line: usize, text: String },
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid { key: String, value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Whole-run failures (before or after the page loop; the loop itself
/// never fails a run, it only stops early).
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
