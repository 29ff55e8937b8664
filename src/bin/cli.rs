// src/bin/cli.rs
use naukri_scrape::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("An unexpected error occurred: {e:?}");
        std::process::exit(1);
    }
}
