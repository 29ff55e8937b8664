// tests/extract.rs
use naukri_scrape::{
    error::FieldError,
    record::FieldSet,
    specs::job_card::{extract_page, CardSelectors},
    table,
};

const PAGE1: &str = include_str!("fixtures/page1.html");
const PAGE2: &str = include_str!("fixtures/page2.html");
const EMPTY: &str = include_str!("fixtures/empty.html");

fn sels(fields: FieldSet) -> CardSelectors {
    CardSelectors::compile(fields).expect("built-in selectors compile")
}

#[test]
fn complete_card_reads_every_field() {
    let page = extract_page(PAGE1, &sels(FieldSet::WithExperience));
    let first = &page.records[0];

    assert_eq!(first.title, "Data Analyst");
    assert_eq!(first.company, "Acme Analytics");
    assert_eq!(first.experience.as_deref(), Some("2-5 Yrs"));
    assert_eq!(first.salary, "5-8 Lacs PA");
    assert_eq!(first.location, "Bengaluru");
    assert_eq!(first.description, "Build dashboards and write SQL for the growth team");
    assert_eq!(first.posted, "3 Days Ago");
    assert_eq!(first.skills, vec!["Python", "SQL", "Tableau"]);
}

#[test]
fn card_missing_company_is_dropped_and_reported() {
    let page = extract_page(PAGE1, &sels(FieldSet::WithExperience));

    assert_eq!(page.card_count(), 3);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.dropped.len(), 1);
    assert_eq!(page.dropped[0].index, 1);
    assert!(matches!(
        page.dropped[0].error,
        FieldError::Missing { field: "Company Name", .. }
    ));
    assert!(page.records.iter().all(|r| r.title != "Reporting Analyst"));
}

#[test]
fn card_without_skills_list_is_kept() {
    let page = extract_page(PAGE1, &sels(FieldSet::WithExperience));
    let junior = &page.records[1];

    assert_eq!(junior.title, "Junior Analyst");
    assert_eq!(junior.location, "Bangalore, Hybrid");
    assert!(junior.skills.is_empty());
    assert_eq!(page.max_skills, 3);
}

#[test]
fn experience_is_required_only_when_selected() {
    let with_exp = extract_page(PAGE2, &sels(FieldSet::WithExperience));
    assert_eq!(with_exp.records.len(), 1);
    assert!(matches!(
        with_exp.dropped[0].error,
        FieldError::Missing { field: "Experience", .. }
    ));

    let standard = extract_page(PAGE2, &sels(FieldSet::Standard));
    assert_eq!(standard.records.len(), 2);
    assert!(standard.dropped.is_empty());
    assert!(standard.records.iter().all(|r| r.experience.is_none()));

    // empty <ul> is an empty skill list, not a missing field
    let business = &standard.records[1];
    assert_eq!(business.title, "Business Analyst");
    assert!(business.skills.is_empty());
    assert_eq!(standard.max_skills, 4);
}

#[test]
fn page_without_cards_yields_nothing() {
    let page = extract_page(EMPTY, &sels(FieldSet::WithExperience));
    assert_eq!(page.card_count(), 0);
    assert_eq!(page.max_skills, 0);
}

#[test]
fn flatten_pads_to_the_global_maximum() {
    let s = sels(FieldSet::WithExperience);
    let mut records = extract_page(PAGE1, &s).records;
    records.extend(extract_page(PAGE2, &s).records);

    let k = table::max_skill_count(&records);
    assert_eq!(k, 4);

    let ds = table::flatten(&records, FieldSet::WithExperience, k);
    let headers = ds.headers.as_ref().unwrap();
    assert_eq!(headers.len(), 7 + 4);
    assert_eq!(&headers[7..], &["Skill1", "Skill2", "Skill3", "Skill4"]);
    assert!(ds.rows.iter().all(|r| r.len() == headers.len()));

    // page-1 card with three skills gets one blank pad
    assert_eq!(&ds.rows[0][7..], &["Python", "SQL", "Tableau", ""]);
    // card without skills is blank across the board
    assert_eq!(&ds.rows[1][7..], &["", "", "", ""]);
    assert_eq!(&ds.rows[2][7..], &["Excel", "Power BI", "SQL", "Statistics"]);
}
