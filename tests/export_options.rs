// tests/export_options.rs
use std::fs;
use std::path::Path;

use naukri_scrape::config::options::{AppOptions, ExportFormat};
use naukri_scrape::file;
use naukri_scrape::store::{self, DataSet};

fn sample() -> DataSet {
    DataSet {
        headers: Some(vec!["Job Title".into(), "Company Name".into(), "Skill1".into(), "Skill2".into()]),
        rows: vec![
            vec!["Data Analyst".into(), "Acme".into(), "SQL".into(), "".into()],
            vec!["BI Developer".into(), "Gamma, Inc.".into(), "".into(), "".into()],
        ],
    }
}

#[test]
fn default_output_is_job_postings_csv() {
    let opts = AppOptions::default();
    assert_eq!(opts.export.format, ExportFormat::Csv);
    assert_eq!(opts.export.out_path(), Path::new("job_postings.csv"));
}

#[test]
fn directory_hint_gets_default_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();

    // existing directory, no trailing slash
    opts.export.set_path(dir.path().to_str().unwrap());
    assert_eq!(opts.export.out_path(), dir.path().join("job_postings.csv"));

    // not-yet-existing directory, trailing slash
    opts.export.set_format(ExportFormat::Tsv);
    opts.export.set_path("out/runs/");
    assert_eq!(opts.export.out_path(), Path::new("out/runs/job_postings.tsv"));
}

#[test]
fn user_extension_survives_format_change() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    let target = dir.path().join("jobs.txt");
    opts.export.set_path(target.to_str().unwrap());

    opts.export.set_format(ExportFormat::Tsv);
    assert_eq!(opts.export.out_path(), target);

    let written = file::write_export(&opts.export, &sample()).unwrap();
    assert_eq!(written, target);
    let text = fs::read_to_string(&written).unwrap();
    assert!(text.starts_with("Job Title\tCompany Name\tSkill1\tSkill2\n"));
}

#[test]
fn export_creates_missing_parent_dirs_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    let target = dir.path().join("a").join("b").join("job_postings.csv");
    opts.export.set_path(target.to_str().unwrap());

    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "stale contents that are longer than the new file\n".repeat(20)).unwrap();

    file::write_export(&opts.export, &sample()).unwrap();
    let text = fs::read_to_string(&target).unwrap();
    assert_eq!(
        text,
        "Job Title,Company Name,Skill1,Skill2\nData Analyst,Acme,SQL,\nBI Developer,\"Gamma, Inc.\",,\n"
    );
}

#[test]
fn cache_file_loads_back_as_shown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".store").join("last_scrape.csv");

    store::save_dataset_to(&path, &sample()).unwrap();
    let back = store::load_dataset_from(&path).unwrap();
    assert_eq!(back, sample());
}
