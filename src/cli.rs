// src/cli.rs
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{
        consts::{CONFIG_FILE, FIXED_WAIT_SECS, WAIT_TIMEOUT_SECS},
        file::{self as config_file, ConfigFile},
        options::{AppOptions, ExportFormat, WaitStrategy},
    },
    progress::Progress,
    record::FieldSet,
    runner::{self, RunSummary, Source},
    specs::job_card::DroppedCard,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WaitArg {
    /// Wait until job cards are present (bounded by --timeout)
    Condition,
    /// Sleep --timeout seconds, then read whatever loaded
    Fixed,
}

/// Scrape naukri.com search results into a flat CSV/TSV file.
#[derive(Debug, Parser)]
#[command(name = "naukri_scrape", version, about)]
pub struct Args {
    /// Job title to search for (prompted if missing)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Location to search in (prompted if missing)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Don't prompt; use the configured (or built-in) search terms
    #[arg(long)]
    pub defaults: bool,

    /// Number of result pages to scrape
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: Option<u32>,

    /// Output file (a trailing '/' means a directory)
    #[arg(short, long)]
    pub out: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Leave out the Experience column (and don't require it on cards)
    #[arg(long)]
    pub no_experience: bool,

    #[arg(long, value_enum)]
    pub wait: Option<WaitArg>,

    /// Seconds for the wait strategy
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Run Chrome with a visible window
    #[arg(long)]
    pub show_browser: bool,

    /// Read saved pages (1.html, 2.html, ...) from a directory instead of the live site
    #[arg(long, value_name = "DIR")]
    pub replay: Option<PathBuf>,

    /// Override scheme+host of the listing site
    #[arg(long, value_name = "URL")]
    pub site_root: Option<String>,

    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Debug log destination
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn source(&self) -> Source {
        match &self.replay {
            Some(dir) => Source::Replay(dir.clone()),
            None => Source::Chrome,
        }
    }
}

/// Defaults < config file < flags. Search terms that came from neither
/// the file nor a flag are asked for through `ask` unless `--defaults`.
pub fn resolve_options<F>(args: &Args, cfg: &ConfigFile, mut ask: F) -> io::Result<AppOptions>
where
    F: FnMut(&str) -> io::Result<String>,
{
    let mut opts = AppOptions::default();
    cfg.apply(&mut opts);
    let scrape = &mut opts.scrape;

    match (&args.title, &cfg.title) {
        (Some(t), _) => scrape.query.title = t.clone(),
        (None, None) if !args.defaults => {
            let answer = ask("Enter the job title (e.g., Data Analyst): ")?;
            if !answer.trim().is_empty() { scrape.query.title = answer; }
        }
        _ => {}
    }
    match (&args.location, &cfg.location) {
        (Some(l), _) => scrape.query.location = l.clone(),
        (None, None) if !args.defaults => {
            let answer = ask("Enter the location (e.g., Bangalore): ")?;
            if !answer.trim().is_empty() { scrape.query.location = answer; }
        }
        _ => {}
    }

    if let Some(p) = args.pages { scrape.pages = p; }
    if args.no_experience { scrape.fields = FieldSet::Standard; }
    if args.show_browser { scrape.headless = false; }
    if let Some(root) = &args.site_root { scrape.site_root = s!(root.trim_end_matches('/')); }

    let secs = args.timeout.map(Duration::from_secs);
    scrape.wait = match (args.wait, scrape.wait) {
        (Some(WaitArg::Fixed) | None, WaitStrategy::Fixed(d)) => WaitStrategy::Fixed(secs.unwrap_or(d)),
        (Some(WaitArg::Fixed), WaitStrategy::Condition(_)) => {
            WaitStrategy::Fixed(secs.unwrap_or(Duration::from_secs(FIXED_WAIT_SECS)))
        }
        (Some(WaitArg::Condition), WaitStrategy::Fixed(_)) => {
            WaitStrategy::Condition(secs.unwrap_or(Duration::from_secs(WAIT_TIMEOUT_SECS)))
        }
        (_, WaitStrategy::Condition(d)) => WaitStrategy::Condition(secs.unwrap_or(d)),
    };

    if let Some(f) = args.format {
        opts.export.set_format(match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        });
    }
    if let Some(o) = &args.out { opts.export.set_path(o); }

    Ok(opts)
}

fn ask_stdin(prompt: &str) -> io::Result<String> {
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = s!();
    io::stdin().lock().read_line(&mut line)?;
    Ok(s!(line.trim_end_matches(['\r', '\n'])))
}

/* ---------------- Console progress ---------------- */

pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    pub fn new() -> Self {
        Self { bar: ProgressBar::hidden() }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, pages: u32) {
        let style = ProgressStyle::with_template(
            "Scraping Pages {bar:30.cyan/blue} {pos}/{len} [{elapsed_precise}] {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        self.bar = ProgressBar::new(u64::from(pages)).with_style(style);
    }
    fn log(&mut self, msg: &str) {
        self.bar.println(msg);
    }
    fn card_dropped(&mut self, page: u32, card: &DroppedCard) {
        self.bar.println(format!(
            "Error extracting job posting (page {page}, card {}): {}",
            card.index + 1,
            card.error
        ));
    }
    fn page_done(&mut self, page: u32, records: usize) {
        self.bar.set_message(format!("page {page}: {records} jobs"));
        self.bar.inc(1);
    }
    fn page_failed(&mut self, page: u32, reason: &str) {
        self.bar.println(format!("Error during page navigation (page {page}): {reason}"));
    }
    fn finish(&mut self) {
        self.bar.finish();
    }
}

fn report(summary: &RunSummary) {
    if summary.interrupted {
        println!("Script interrupted by user.");
    }
    println!(
        "Saved {} job posting(s) from {}/{} page(s), {} skill column(s) → {}",
        summary.record_count(),
        summary.pages_done,
        summary.pages_planned,
        summary.skill_columns,
        summary.out_path.display()
    );
    if summary.dropped_cards > 0 {
        println!("Skipped {} incomplete card(s).", summary.dropped_cards);
    }
    println!("Scraping completed in {:.2} seconds.", summary.elapsed.as_secs_f64());
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(p) = &args.log_file {
        crate::log::init(p);
    }

    let cfg = config_file::load(&args.config)?;
    let opts = resolve_options(&args, &cfg, ask_stdin).wrap_err("reading search terms")?;
    let source = args.source();

    let interrupt = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&interrupt);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .wrap_err("failed to set ctrl-c handler")?;
    }

    logf!("CLI: source={source:?} base={} pages={}", opts.scrape.base_url(), opts.scrape.pages);
    println!("Searching {}", opts.scrape.base_url());

    let mut progress = CliProgress::new();
    let summary = runner::run(&opts, &source, &interrupt, Some(&mut progress))?;
    report(&summary);
    Ok(())
}
