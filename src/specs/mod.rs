// src/specs/mod.rs
//! # Page specs
//!
//! Everything that knows **where the data lives** on the listing site.
//!
//! ## What lives here
//! - `search`: how a search (title + location) becomes listing URLs, and
//!   how page N's URL is derived from the base.
//! - `job_card`: selector choice for one job card and the per-card /
//!   per-page extraction into `JobRecord`s.
//!
//! ## What does **not** live here
//! - Browser control, waits and navigation (`browser`, `scrape`).
//! - Skill flattening and file output (`table`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::run_pages → browser.content()
//!                            ↘ specs::job_card::extract_page(html)
//!        → table::flatten → file::write_table
//! ```
//!
//! ## Conventions
//! - Specs are pure functions over HTML strings, so they are testable offline
//!   against saved pages (`tests/fixtures/`).
//! - A missing required element is the only card-level failure; empty text
//!   is a value.
pub mod job_card;
pub mod search;
