// src/specs/job_card.rs
//
// One search-results page → job records.
//
// Card shape (only what we read):
//   div.srp-jobtuple-wrapper
//     a.title, a.comp-name, span.expwdth, span.sal, span.locWdth,
//     span.job-desc, span.job-post-day
//     ul.tags-gt > li.dot-gt*          (optional)

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{SEL_CARD, SEL_SKILL, SEL_SKILLS};
use crate::core::html::{element_text, find_all, find_first, selector};
use crate::error::{BrowserError, FieldError};
use crate::record::{FieldSet, JobRecord};

struct FieldSel {
    name: &'static str,
    css: &'static str,
    sel: Selector,
}

/// Selectors compiled once per run.
pub struct CardSelectors {
    field_set: FieldSet,
    card: Selector,
    fields: Vec<FieldSel>,
    skills: Selector,
    skill: Selector,
}

impl CardSelectors {
    pub fn compile(field_set: FieldSet) -> Result<Self, BrowserError> {
        let fields = field_set
            .fields()
            .iter()
            .map(|&(name, css)| Ok(FieldSel { name, css, sel: selector(css)? }))
            .collect::<Result<Vec<_>, BrowserError>>()?;

        Ok(Self {
            field_set,
            card: selector(SEL_CARD)?,
            fields,
            skills: selector(SEL_SKILLS)?,
            skill: selector(SEL_SKILL)?,
        })
    }

    pub fn field_set(&self) -> FieldSet {
        self.field_set
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedCard {
    /// 0-based position of the card on its page
    pub index: usize,
    pub error: FieldError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtract {
    pub records: Vec<JobRecord>,
    /// Longest skill list seen on this page only.
    pub max_skills: usize,
    pub dropped: Vec<DroppedCard>,
}

impl PageExtract {
    pub fn card_count(&self) -> usize {
        self.records.len() + self.dropped.len()
    }
}

/// Read one card. The first missing required field drops the whole card;
/// a missing skills list is just an empty one.
pub fn extract_card(card: ElementRef<'_>, sels: &CardSelectors) -> Result<JobRecord, FieldError> {
    let mut values = Vec::with_capacity(sels.fields.len());
    for f in &sels.fields {
        let el = find_first(card, &f.sel)
            .ok_or(FieldError::Missing { field: f.name, selector: f.css })?;
        values.push(element_text(el));
    }

    let skills = match find_first(card, &sels.skills) {
        Some(list) => find_all(list, &sels.skill).into_iter().map(element_text).collect(),
        None => {
            logd!("Extract: no skills list on card");
            Vec::new()
        }
    };

    // values are in FieldSet column order
    let mut it = values.into_iter();
    let mut next = || it.next().unwrap_or_default();

    let title = next();
    let company = next();
    let experience = if sels.field_set.has_experience() { Some(next()) } else { None };
    let salary = next();
    let location = next();
    let description = next();
    let posted = next();

    Ok(JobRecord { title, company, experience, salary, location, description, posted, skills })
}

/// Extract every card currently in the document, in document order.
pub fn extract_page(html: &str, sels: &CardSelectors) -> PageExtract {
    let doc = Html::parse_document(html);
    let mut out = PageExtract::default();

    for (index, card) in doc.select(&sels.card).enumerate() {
        match extract_card(card, sels) {
            Ok(rec) => {
                out.max_skills = out.max_skills.max(rec.skills.len());
                out.records.push(rec);
            }
            Err(error) => {
                loge!("Extract: card {index} dropped: {error}");
                out.dropped.push(DroppedCard { index, error });
            }
        }
    }

    logd!(
        "Extract: cards={} kept={} dropped={} max_skills={}",
        out.card_count(),
        out.records.len(),
        out.dropped.len(),
        out.max_skills
    );
    out
}
