// src/specs/search.rs
use crate::core::sanitize::hyphenate;

/// A listing search as typed by the user ("Data Analyst", "Bangalore").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(title: &str, location: &str) -> Self {
        Self { title: s!(title), location: s!(location) }
    }

    /// `{root}/{title}-jobs-in-{location}`, terms hyphenated.
    pub fn base_url(&self, site_root: &str) -> String {
        format!(
            "{}/{}-jobs-in-{}",
            site_root.trim_end_matches('/'),
            hyphenate(&self.title),
            hyphenate(&self.location)
        )
    }
}

/// Page 1 is the base URL itself; page n ≥ 2 appends `-n`.
pub fn page_url(base: &str, page: u32) -> String {
    if page <= 1 {
        s!(base)
    } else {
        format!("{base}-{page}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_hyphenates_terms() {
        let q = SearchQuery::new("Data Analyst", "New Delhi");
        assert_eq!(
            q.base_url("https://www.naukri.com/"),
            "https://www.naukri.com/Data-Analyst-jobs-in-New-Delhi"
        );
    }

    #[test]
    fn page_urls() {
        let base = "https://www.naukri.com/data-analyst-jobs-in-bangalore";
        assert_eq!(page_url(base, 1), base);
        assert_eq!(page_url(base, 2), join!(base, "-2"));
        assert_eq!(page_url(base, 10), join!(base, "-10"));
    }
}
