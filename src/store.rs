// src/store.rs
//
// DataSet (headers + rows) and the local cache of the last flattened
// scrape. The cache only feeds the GUI's startup view; the export file is
// always written separately.

use std::{fs, path::{Path, PathBuf}};

use crate::config::consts::{CACHE_FILE, STORE_DIR};
use crate::config::options::ExportFormat;
use crate::error::ExportError;
use crate::file;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn cache_path() -> PathBuf {
    Path::new(STORE_DIR).join(CACHE_FILE)
}

pub fn save_dataset(ds: &DataSet) -> Result<PathBuf, ExportError> {
    save_dataset_to(&cache_path(), ds)
}

pub fn load_dataset() -> Result<DataSet, ExportError> {
    load_dataset_from(&cache_path())
}

pub fn save_dataset_to(path: &Path, ds: &DataSet) -> Result<PathBuf, ExportError> {
    file::write_table(path, ds, ExportFormat::Csv)?;
    Ok(path.to_path_buf())
}

/// First line is always the header row (the cache is written with one).
pub fn load_dataset_from(path: &Path) -> Result<DataSet, ExportError> {
    let text = fs::read_to_string(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(rec?.iter().map(String::from).collect());
    }

    Ok(DataSet {
        headers: if headers.is_empty() { None } else { Some(headers) },
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_round_trip_keeps_empty_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.csv");
        let ds = DataSet {
            headers: Some(strings!["Job Title", "Skill1", "Skill2"]),
            rows: vec![
                strings!["Analyst, Senior", "SQL", ""],
                strings!["Engineer", "", ""],
            ],
        };
        save_dataset_to(&path, &ds).unwrap();
        let back = load_dataset_from(&path).unwrap();
        assert_eq!(back, ds);
    }

    #[test]
    fn missing_cache_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dataset_from(&dir.path().join("nope.csv")).is_err());
    }
}
