// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{progress::Progress, specs::job_card::DroppedCard};

/// Writes loop progress into the shared status line and asks for a repaint.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<egui::Context>,
    done: u32,
    total: u32,
    jobs: usize,
    dropped: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: Option<egui::Context>) -> Self {
        Self { status, ctx, done: 0, total: 0, jobs: 0, dropped: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        super::app::set_status(&self.status, msg);
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, pages: u32) {
        self.total = pages;
        self.set_status(format!("Scraping… 0/{pages} page(s)"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn card_dropped(&mut self, _page: u32, _card: &DroppedCard) {
        self.dropped += 1;
    }
    fn page_done(&mut self, _page: u32, records: usize) {
        self.done += 1;
        self.jobs += records;
        self.set_status(format!(
            "Scraping… {}/{} page(s), {} job(s)",
            self.done, self.total, self.jobs
        ));
    }
    fn page_failed(&mut self, page: u32, reason: &str) {
        self.set_status(format!("Stopped at page {page}: {reason}"));
    }
    fn finish(&mut self) {
        if self.dropped > 0 {
            logd!("GUI: {} incomplete card(s) skipped", self.dropped);
        }
    }
}
