// src/runner.rs
//
// One full run: open a session → page loop → flatten → write. The session
// lives in this scope only, so it is released exactly once whichever way
// the run ends. A loop that stops early still flattens and writes what it
// collected.

use std::{
    path::PathBuf,
    sync::atomic::AtomicBool,
    time::{Duration, Instant},
};

use crate::{
    browser::{Browser, ChromeSession, ReplayBrowser},
    config::options::{AppOptions, WaitStrategy},
    error::{BrowserError, RunError},
    file,
    progress::Progress,
    scrape::{self, ScrapeOutcome},
    specs::job_card::CardSelectors,
    store::DataSet,
    table,
};

/// Where pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Live site through headless (or headed) Chrome.
    Chrome,
    /// Saved pages `1.html`, `2.html`, … in a directory.
    Replay(PathBuf),
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub table: DataSet,
    pub out_path: PathBuf,
    pub pages_planned: u32,
    pub pages_done: u32,
    pub dropped_cards: usize,
    pub skill_columns: usize,
    pub elapsed: Duration,
    /// Why the page loop ended early, if it did.
    pub stopped: Option<String>,
    pub interrupted: bool,
}

impl RunSummary {
    pub fn record_count(&self) -> usize {
        self.table.row_count()
    }
}

fn nav_timeout(wait: WaitStrategy) -> Duration {
    match wait {
        WaitStrategy::Condition(d) | WaitStrategy::Fixed(d) => d.max(Duration::from_secs(10)) * 3,
    }
}

fn open_session(opts: &AppOptions, source: &Source) -> Result<Box<dyn Browser>, BrowserError> {
    match source {
        Source::Chrome => {
            let s = ChromeSession::launch(opts.scrape.headless, nav_timeout(opts.scrape.wait))?;
            Ok(Box::new(s))
        }
        Source::Replay(dir) => {
            let s = ReplayBrowser::from_dir(dir, &opts.scrape.base_url(), opts.scrape.pages)
                .map_err(|e| BrowserError::Launch(e.to_string()))?;
            Ok(Box::new(s))
        }
    }
}

/// Top-level: acquire the session, run, release, write.
pub fn run(
    opts: &AppOptions,
    source: &Source,
    interrupt: &AtomicBool,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    opts.scrape.validate()?;
    let started = Instant::now();
    let outcome = {
        let mut session = open_session(opts, source)?;
        collect(session.as_mut(), opts, interrupt, progress)?
        // session dropped here: browser released before any file I/O
    };
    finish(opts, outcome, started)
}

/// Same as `run` but over a caller-owned browser.
pub fn run_with(
    browser: &mut dyn Browser,
    opts: &AppOptions,
    interrupt: &AtomicBool,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    opts.scrape.validate()?;
    let started = Instant::now();
    let outcome = collect(browser, opts, interrupt, progress)?;
    finish(opts, outcome, started)
}

fn collect(
    browser: &mut dyn Browser,
    opts: &AppOptions,
    interrupt: &AtomicBool,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome, RunError> {
    let sels = CardSelectors::compile(opts.scrape.fields)?;
    Ok(scrape::run_pages(browser, &opts.scrape, &sels, interrupt, progress))
}

fn finish(opts: &AppOptions, outcome: ScrapeOutcome, started: Instant) -> Result<RunSummary, RunError> {
    let interrupted = outcome.was_interrupted();
    let stopped = outcome.stopped.as_ref().map(|e| e.to_string());
    if !outcome.is_complete() {
        logf!(
            "Run: partial {}/{} page(s) ({}); writing what was collected",
            outcome.pages_done,
            outcome.pages_planned,
            stopped.as_deref().unwrap_or("no reason")
        );
    }

    let k = outcome.max_skills;
    debug_assert_eq!(k, table::max_skill_count(&outcome.records), "K is not the global maximum");
    let table = table::flatten(&outcome.records, opts.scrape.fields, k);
    let out_path = file::write_export(&opts.export, &table)?;

    Ok(RunSummary {
        table,
        out_path,
        pages_planned: outcome.pages_planned,
        pages_done: outcome.pages_done,
        dropped_cards: outcome.dropped_cards,
        skill_columns: k,
        elapsed: started.elapsed(),
        stopped,
        interrupted,
    })
}
