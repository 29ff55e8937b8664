// src/record.rs
//
// One job posting as read off a listing card, before skill flattening.

use crate::config::consts::*;

/// Which fixed columns a run produces. Skills are not part of this; they
/// become `Skill1..SkillK` at flatten time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldSet {
    Standard,
    WithExperience,
}

/// (column name, selector) for every fixed field, in column order.
const STANDARD: &[(&str, &str)] = &[
    ("Job Title", SEL_TITLE),
    ("Company Name", SEL_COMPANY),
    ("Salary", SEL_SALARY),
    ("Location", SEL_LOCATION),
    ("Description", SEL_DESCRIPTION),
    ("Posted Days Ago", SEL_POSTED),
];

const WITH_EXPERIENCE: &[(&str, &str)] = &[
    ("Job Title", SEL_TITLE),
    ("Company Name", SEL_COMPANY),
    ("Experience", SEL_EXPERIENCE),
    ("Salary", SEL_SALARY),
    ("Location", SEL_LOCATION),
    ("Description", SEL_DESCRIPTION),
    ("Posted Days Ago", SEL_POSTED),
];

impl FieldSet {
    pub fn fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            FieldSet::Standard => STANDARD,
            FieldSet::WithExperience => WITH_EXPERIENCE,
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.fields().len()
    }

    pub fn has_experience(&self) -> bool {
        matches!(self, FieldSet::WithExperience)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    /// Present iff the run's field set includes it.
    pub experience: Option<String>,
    pub salary: String,
    pub location: String,
    pub description: String,
    pub posted: String,
    pub skills: Vec<String>,
}

impl JobRecord {
    /// Fixed-field values in the column order of `fields`.
    pub fn fixed_values(&self, fields: FieldSet) -> Vec<&str> {
        let mut out = Vec::with_capacity(fields.len());
        out.push(self.title.as_str());
        out.push(self.company.as_str());
        if fields.has_experience() {
            out.push(self.experience.as_deref().unwrap_or(""));
        }
        out.push(self.salary.as_str());
        out.push(self.location.as_str());
        out.push(self.description.as_str());
        out.push(self.posted.as_str());
        out
    }
}
