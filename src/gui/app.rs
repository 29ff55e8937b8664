// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, TryRecvError},
        Arc, Mutex,
    },
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    runner::{self, RunSummary, Source},
    store::{self, DataSet},
    table,
};

use super::progress::GuiProgress;

const SHUTDOWN_GRACE_SECS: u64 = 5;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Naukri Job Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Status writes tolerate a poisoned lock; the text is display-only.
pub(crate) fn set_status(status: &Mutex<String>, msg: impl Into<String>) {
    let mut guard = status.lock().unwrap_or_else(|e| e.into_inner());
    *guard = msg.into();
}

pub(crate) fn read_status(status: &Mutex<String>) -> String {
    status.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

/// A scrape running on a worker thread.
pub struct Job {
    pub interrupt: Arc<AtomicBool>,
    pub rx: Receiver<Result<RunSummary, String>>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last scraped table (also the on-disk cache)
    pub data: DataSet,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub job: Option<Job>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let mut status = s!("Idle");

        let data = match store::load_dataset() {
            Ok(ds) if !ds.is_empty() => {
                logf!("Cache: Loaded (rows={}, headers={})", ds.row_count(), ds.header_count());
                status = s!("Loaded local data");
                ds
            }
            Ok(_) => {
                logd!("Cache: empty, starting blank");
                DataSet { headers: Some(table::headers(state.options.scrape.fields, 0)), rows: Vec::new() }
            }
            Err(e) => {
                logd!("Cache: Missing ({e})");
                DataSet { headers: Some(table::headers(state.options.scrape.fields, 0)), rows: Vec::new() }
            }
        };

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            data,
            status: Arc::new(Mutex::new(status)),
            job: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        set_status(&self.status, msg);
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.job.is_some()
    }

    /// Commit a hand-edited output path before it is used.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            self.out_path_dirty = false;
            logf!("UI: Out path set → {}", self.out_path_text);
        }
    }

    /// Spawn the page loop with the current options.
    pub fn start_scrape(&mut self, ctx: &egui::Context) {
        if self.running() { return; }
        self.commit_out_path();

        let opts = self.state.options.clone();
        let interrupt = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let status = Arc::clone(&self.status);
        let flag = Arc::clone(&interrupt);
        let ctx2 = ctx.clone();

        logf!("Scrape: Begin {} pages={}", opts.scrape.base_url(), opts.scrape.pages);
        self.status(format!("Opening browser for {}", opts.scrape.base_url()));

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, Some(ctx2.clone()));
            let res = runner::run(&opts, &Source::Chrome, &flag, Some(&mut prog))
                .map_err(|e| e.to_string());
            // receiver gone means the window closed; nothing left to tell
            let _ = tx.send(res);
            ctx2.request_repaint();
        });

        self.job = Some(Job { interrupt, rx });
    }

    pub fn stop_scrape(&self) {
        if let Some(job) = &self.job {
            job.interrupt.store(true, Ordering::SeqCst);
            self.status("Stopping…");
        }
    }

    /// Pick up a finished worker, if any.
    fn poll_job(&mut self) {
        let Some(job) = &self.job else { return };
        let res = match job.rx.try_recv() {
            Ok(res) => res,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(s!("scrape worker exited unexpectedly")),
        };
        self.job = None;

        match res {
            Ok(summary) => {
                logf!(
                    "Scrape: OK rows={} skills={} → {}",
                    summary.record_count(),
                    summary.skill_columns,
                    summary.out_path.display()
                );
                match store::save_dataset(&summary.table) {
                    Ok(p) => logf!("Cache: Saved → {}", p.display()),
                    Err(e) => loge!("Cache: Save failed: {e}"),
                }
                let lead = if summary.interrupted {
                    s!("Interrupted. ")
                } else if let Some(reason) = &summary.stopped {
                    format!("Stopped early ({reason}). ")
                } else {
                    s!()
                };
                self.status(format!(
                    "{lead}{} job(s) from {}/{} page(s) → {} ({:.2}s)",
                    summary.record_count(),
                    summary.pages_done,
                    summary.pages_planned,
                    summary.out_path.display(),
                    summary.elapsed.as_secs_f64()
                ));
                self.data = summary.table;
            }
            Err(e) => {
                loge!("Scrape: Error: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job();

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            super::components::search_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);
            ui.separator();
            super::components::data_table::draw(ui, self);
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // let a running worker drop its browser session before we exit
        if let Some(job) = self.job.take() {
            job.interrupt.store(true, Ordering::SeqCst);
            let _ = job.rx.recv_timeout(Duration::from_secs(SHUTDOWN_GRACE_SECS));
        }
    }
}
