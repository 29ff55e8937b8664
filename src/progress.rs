// src/progress.rs
use crate::specs::job_card::DroppedCard;

/// Lightweight progress reporting for the page loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages planned.
    fn begin(&mut self, _pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A card on `page` was skipped because a required field was missing.
    fn card_dropped(&mut self, _page: u32, _card: &DroppedCard) {}

    /// One page was extracted; `records` is how many cards it contributed.
    fn page_done(&mut self, _page: u32, _records: usize) {}

    /// The loop stopped at `page`; nothing after it will be scraped.
    fn page_failed(&mut self, _page: u32, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
