// src/scrape.rs
//
// The page loop. Strictly sequential: load → wait → read → extract, one
// page at a time. The first failure (or an interrupt) ends the loop; what
// was collected before it is returned, never rolled back.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use crate::{
    browser::Browser,
    config::consts::SEL_CARD,
    config::options::{ScrapeOptions, WaitStrategy},
    error::ScrapeError,
    progress::Progress,
    record::JobRecord,
    specs::job_card::{extract_page, CardSelectors, PageExtract},
    specs::search::page_url,
};

const PAUSE_SLICE: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Encounter order: page by page, card by card.
    pub records: Vec<JobRecord>,
    /// Global maximum skill count across every page scraped.
    pub max_skills: usize,
    pub pages_planned: u32,
    pub pages_done: u32,
    pub dropped_cards: usize,
    /// Why the loop ended early, if it did.
    pub stopped: Option<ScrapeError>,
}

impl ScrapeOutcome {
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none() && self.pages_done == self.pages_planned
    }

    pub fn was_interrupted(&self) -> bool {
        matches!(self.stopped, Some(ScrapeError::Interrupted))
    }
}

fn check(interrupt: &AtomicBool) -> Result<(), ScrapeError> {
    if interrupt.load(Ordering::SeqCst) {
        Err(ScrapeError::Interrupted)
    } else {
        Ok(())
    }
}

/// Sleep that still notices Ctrl-C within a slice.
fn pause(total: Duration, interrupt: &AtomicBool) -> Result<(), ScrapeError> {
    let until = Instant::now() + total;
    loop {
        check(interrupt)?;
        let now = Instant::now();
        if now >= until {
            return Ok(());
        }
        thread::sleep(PAUSE_SLICE.min(until - now));
    }
}

fn scrape_page(
    browser: &mut dyn Browser,
    opts: &ScrapeOptions,
    sels: &CardSelectors,
    interrupt: &AtomicBool,
    url: &str,
) -> Result<PageExtract, ScrapeError> {
    check(interrupt)?;
    browser.load(url)?;
    check(interrupt)?;

    match opts.wait {
        WaitStrategy::Condition(timeout) => browser.wait_for(SEL_CARD, timeout)?,
        WaitStrategy::Fixed(delay) => pause(delay, interrupt)?,
    }
    check(interrupt)?;

    let html = browser.content()?;
    Ok(extract_page(&html, sels))
}

/// Scrape `opts.pages` pages starting at the search's base URL.
pub fn run_pages(
    browser: &mut dyn Browser,
    opts: &ScrapeOptions,
    sels: &CardSelectors,
    interrupt: &AtomicBool,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeOutcome {
    let base = opts.base_url();
    let mut out = ScrapeOutcome { pages_planned: opts.pages, ..ScrapeOutcome::default() };

    logf!("Scrape: Begin base={base} pages={} wait={:?}", opts.pages, opts.wait);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.pages);
    }

    for page in 1..=opts.pages {
        let url = page_url(&base, page);

        match scrape_page(browser, opts, sels, interrupt, &url) {
            Ok(extract) => {
                let kept = extract.records.len();
                if let Some(p) = progress.as_deref_mut() {
                    for card in &extract.dropped {
                        p.card_dropped(page, card);
                    }
                }
                out.max_skills = out.max_skills.max(extract.max_skills);
                out.dropped_cards += extract.dropped.len();
                out.records.extend(extract.records);
                out.pages_done = page;

                logf!("Scrape: page {page} OK kept={kept} total={}", out.records.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(page, kept);
                }
            }
            Err(e) => {
                let at = browser.current_url().unwrap_or(url.as_str());
                loge!("Scrape: page {page} aborted loop at {at}: {e}");
                // Ctrl-C also reaches the Chrome child, so a raised flag
                // takes precedence over whatever browser error it caused
                let e = match e {
                    ScrapeError::Browser(_) if interrupt.load(Ordering::SeqCst) => ScrapeError::Interrupted,
                    other => other,
                };
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page, &e.to_string());
                }
                out.stopped = Some(e);
                break;
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        if !out.is_complete() {
            p.log(&format!(
                "Stopped after {}/{} page(s); writing what was collected",
                out.pages_done, out.pages_planned
            ));
        }
        p.finish();
    }
    logf!(
        "Scrape: End pages={}/{} records={} max_skills={}",
        out.pages_done,
        out.pages_planned,
        out.records.len(),
        out.max_skills
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::ReplayBrowser;
    use crate::progress::NullProgress;
    use crate::record::FieldSet;

    const CARD: &str = r#"<div class="srp-jobtuple-wrapper">
        <a class="title">Analyst</a><a class="comp-name">Acme</a>
        <span class="sal">-</span><span class="locWdth">Pune</span>
        <span class="job-desc">x</span><span class="job-post-day">Today</span>
        <ul class="tags-gt"><li class="dot-gt">SQL</li><li class="dot-gt">R</li></ul>
    </div>"#;

    #[test]
    fn global_max_spans_pages() {
        let mut opts = ScrapeOptions { pages: 2, fields: FieldSet::Standard, ..ScrapeOptions::default() };
        opts.wait = WaitStrategy::Fixed(Duration::ZERO);
        let base = opts.base_url();
        let two_cards = format!("<html><body>{CARD}{CARD}</body></html>");
        let one_card = format!("<html><body>{}</body></html>", CARD.replace("<li class=\"dot-gt\">R</li>", ""));
        let mut browser = ReplayBrowser::new()
            .with_page(&base, &one_card)
            .with_page(&page_url(&base, 2), &two_cards);

        let sels = CardSelectors::compile(FieldSet::Standard).unwrap();
        let flag = AtomicBool::new(false);
        let out = run_pages(&mut browser, &opts, &sels, &flag, Some(&mut NullProgress));

        assert!(out.is_complete());
        assert_eq!(out.records.len(), 3);
        assert_eq!(out.max_skills, 2);
        assert_eq!(out.records[0].skills, vec!["SQL"]);
    }

    /// Page 2's load raises the interrupt flag and then fails, as when
    /// Ctrl-C takes the browser process down with it.
    struct DiesOnInterrupt<'a> {
        inner: ReplayBrowser,
        fail_at: String,
        flag: &'a AtomicBool,
    }

    impl Browser for DiesOnInterrupt<'_> {
        fn load(&mut self, url: &str) -> Result<(), crate::error::BrowserError> {
            if url == self.fail_at {
                self.flag.store(true, Ordering::SeqCst);
                return Err(crate::error::BrowserError::Navigation {
                    url: s!(url),
                    reason: s!("connection closed"),
                });
            }
            self.inner.load(url)
        }
        fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), crate::error::BrowserError> {
            self.inner.wait_for(selector, timeout)
        }
        fn content(&mut self) -> Result<String, crate::error::BrowserError> {
            self.inner.content()
        }
        fn current_url(&self) -> Option<&str> {
            self.inner.current_url()
        }
    }

    #[derive(Default)]
    struct Lines {
        logged: Vec<String>,
        failed: Vec<String>,
    }

    impl Progress for Lines {
        fn log(&mut self, msg: &str) { self.logged.push(s!(msg)); }
        fn page_failed(&mut self, _page: u32, reason: &str) { self.failed.push(s!(reason)); }
    }

    #[test]
    fn browser_error_after_interrupt_counts_as_interrupt() {
        let mut opts = ScrapeOptions { pages: 3, fields: FieldSet::Standard, ..ScrapeOptions::default() };
        opts.wait = WaitStrategy::Fixed(Duration::ZERO);
        let base = opts.base_url();
        let page = format!("<html><body>{CARD}</body></html>");
        let flag = AtomicBool::new(false);
        let mut browser = DiesOnInterrupt {
            inner: ReplayBrowser::new().with_page(&base, &page),
            fail_at: page_url(&base, 2),
            flag: &flag,
        };
        let sels = CardSelectors::compile(FieldSet::Standard).unwrap();
        let mut lines = Lines::default();

        let out = run_pages(&mut browser, &opts, &sels, &flag, Some(&mut lines));

        assert!(out.was_interrupted());
        assert_eq!(out.pages_done, 1);
        assert_eq!(out.records.len(), 1);
        assert_eq!(lines.failed, strings!["interrupted by user"]);
        assert_eq!(lines.logged, strings!["Stopped after 1/3 page(s); writing what was collected"]);
    }

    #[test]
    fn browser_error_without_interrupt_is_kept() {
        let mut opts = ScrapeOptions { pages: 2, fields: FieldSet::Standard, ..ScrapeOptions::default() };
        opts.wait = WaitStrategy::Fixed(Duration::ZERO);
        let base = opts.base_url();
        let mut browser = ReplayBrowser::new().with_page(&base, &format!("<html><body>{CARD}</body></html>"));
        let sels = CardSelectors::compile(FieldSet::Standard).unwrap();
        let flag = AtomicBool::new(false);

        let out = run_pages(&mut browser, &opts, &sels, &flag, None);

        assert!(!out.was_interrupted());
        assert!(matches!(out.stopped, Some(ScrapeError::Browser(_))));
    }

    #[test]
    fn preset_interrupt_loads_nothing() {
        let opts = ScrapeOptions::default();
        let mut browser = ReplayBrowser::new();
        let sels = CardSelectors::compile(opts.fields).unwrap();
        let flag = AtomicBool::new(true);
        let out = run_pages(&mut browser, &opts, &sels, &flag, None);

        assert!(out.was_interrupted());
        assert!(!out.is_complete());
        assert_eq!(out.pages_done, 0);
        assert!(browser.history().is_empty());
    }

    #[test]
    fn pause_stops_on_interrupt() {
        let flag = AtomicBool::new(true);
        let started = Instant::now();
        let res = pause(Duration::from_secs(30), &flag);
        assert!(matches!(res, Err(ScrapeError::Interrupted)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn pause_runs_to_completion() {
        let flag = AtomicBool::new(false);
        assert!(pause(Duration::from_millis(20), &flag).is_ok());
    }
}
