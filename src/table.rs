// src/table.rs
//
// Deferred skill flattening: records + global K → fixed-schema DataSet.
// K is only known after the last page, so this runs exactly once per run.

use crate::config::consts::SKILL_PREFIX;
use crate::record::{FieldSet, JobRecord};
use crate::store::DataSet;

/// Longest skill list across all records (0 for none).
pub fn max_skill_count(records: &[JobRecord]) -> usize {
    records.iter().map(|r| r.skills.len()).max().unwrap_or(0)
}

/// Fixed column names followed by `Skill1..SkillK`.
pub fn headers(fields: FieldSet, k: usize) -> Vec<String> {
    let mut h: Vec<String> = fields.column_names().map(String::from).collect();
    h.extend((1..=k).map(|i| format!("{SKILL_PREFIX}{i}")));
    h
}

/// One row per record. `SkillI` is the record's (I-1)th skill or "".
/// Skills beyond K are not emitted; callers pass the global maximum.
pub fn flatten(records: &[JobRecord], fields: FieldSet, k: usize) -> DataSet {
    debug_assert!(
        records.iter().all(|r| r.skills.len() <= k),
        "K smaller than a record's skill count"
    );

    let rows = records
        .iter()
        .map(|rec| {
            let mut row: Vec<String> = rec
                .fixed_values(fields)
                .into_iter()
                .map(String::from)
                .collect();
            row.reserve(k);
            for i in 0..k {
                row.push(rec.skills.get(i).cloned().unwrap_or_default());
            }
            row
        })
        .collect();

    DataSet { headers: Some(headers(fields, k)), rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, skills: &[&str]) -> JobRecord {
        JobRecord {
            title: s!(title),
            company: s!("Acme"),
            experience: Some(s!("1-3 Yrs")),
            skills: skills.iter().map(|s| s!(*s)).collect(),
            ..JobRecord::default()
        }
    }

    #[test]
    fn python_sql_and_empty() {
        let recs = vec![rec("A", &["Python", "SQL"]), rec("B", &[])];
        let k = max_skill_count(&recs);
        assert_eq!(k, 2);

        let ds = flatten(&recs, FieldSet::Standard, k);
        let h = ds.headers.as_ref().unwrap();
        assert_eq!(h.len(), 6 + 2);
        assert_eq!(&h[6..], &strings!["Skill1", "Skill2"]);
        assert_eq!(&ds.rows[0][6..], &strings!["Python", "SQL"]);
        assert_eq!(&ds.rows[1][6..], &strings!["", ""]);
    }

    #[test]
    fn short_lists_padded_to_k() {
        let recs = vec![rec("A", &["Excel"]), rec("B", &["R", "SQL", "Tableau"])];
        let ds = flatten(&recs, FieldSet::WithExperience, max_skill_count(&recs));
        assert_eq!(ds.header_count(), 7 + 3);
        assert_eq!(&ds.rows[0][7..], &strings!["Excel", "", ""]);
        assert!(ds.rows.iter().all(|r| r.len() == 10));
    }

    #[test]
    fn zero_records_is_header_only() {
        let ds = flatten(&[], FieldSet::WithExperience, max_skill_count(&[]));
        assert_eq!(ds.row_count(), 0);
        assert_eq!(
            ds.headers.unwrap(),
            strings!["Job Title", "Company Name", "Experience", "Salary", "Location",
                     "Description", "Posted Days Ago"]
        );
    }
}
