// src/core/html.rs
//
// Thin helpers over `scraper` for the element capabilities the extractor
// needs: find one, find many, read text.

use scraper::{ElementRef, Html, Selector};

use crate::error::BrowserError;
use super::sanitize::normalize_ws;

pub fn selector(css: &str) -> Result<Selector, BrowserError> {
    Selector::parse(css).map_err(|_| BrowserError::Selector(s!(css)))
}

/// Visible text of an element and its descendants, whitespace-normalized.
pub fn element_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

pub fn find_first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

pub fn find_all<'a>(el: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    el.select(sel).collect()
}

/// Whether `css` matches anything in a full document.
pub fn document_has(html: &str, css: &str) -> Result<bool, BrowserError> {
    let sel = selector(css)?;
    let doc = Html::parse_document(html);
    Ok(doc.select(&sel).next().is_some())
}
