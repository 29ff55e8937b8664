// src/config/consts.rs

// Site
pub const SITE_ROOT: &str = "https://www.naukri.com";
pub const DEFAULT_TITLE: &str = "data analyst";
pub const DEFAULT_LOCATION: &str = "bangalore";

// Selectors (search results page)
pub const SEL_CARD: &str = "div.srp-jobtuple-wrapper";
pub const SEL_TITLE: &str = "a.title";
pub const SEL_COMPANY: &str = "a.comp-name";
pub const SEL_EXPERIENCE: &str = "span.expwdth";
pub const SEL_SALARY: &str = "span.sal";
pub const SEL_LOCATION: &str = "span.locWdth";
pub const SEL_DESCRIPTION: &str = "span.job-desc";
pub const SEL_POSTED: &str = "span.job-post-day";
pub const SEL_SKILLS: &str = "ul.tags-gt";
pub const SEL_SKILL: &str = "li.dot-gt";

// Scrape
pub const DEFAULT_PAGES: u32 = 2;
pub const WAIT_TIMEOUT_SECS: u64 = 10;
pub const FIXED_WAIT_SECS: u64 = 5;

// Export
pub const DEFAULT_OUT_FILE: &str = "job_postings.csv";
pub const SKILL_PREFIX: &str = "Skill";

// Local store / logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CACHE_FILE: &str = "last_scrape.csv";
pub const CONFIG_FILE: &str = "naukri_scrape.conf";
