// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod record;
pub mod specs;
pub mod table;

pub mod browser;
pub mod file;
pub mod progress;
pub mod scrape;
pub mod store;

pub mod cli;
pub mod runner;

#[cfg(feature = "gui")]
pub mod gui;
