// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::ExportError;
use crate::store::DataSet;

/// Serialize a table (header row first, if any) with the format's delimiter.
/// Quoting follows RFC 4180: only cells that need it are quoted.
pub fn to_export_bytes(ds: &DataSet, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .flexible(true)
        .from_writer(Vec::new());

    if let Some(h) = &ds.headers {
        wtr.write_record(h)?;
    }
    for row in &ds.rows {
        wtr.write_record(row)?;
    }
    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// Same bytes as the export file, as text (clipboard).
pub fn to_export_string(ds: &DataSet, format: ExportFormat) -> Result<String, ExportError> {
    let buf = to_export_bytes(ds, format)?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Write the whole table in one go: serialized in memory, then one
/// create/truncate + write. Parent directories are created as needed.
pub fn write_table(path: &Path, ds: &DataSet, format: ExportFormat) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let bytes = to_export_bytes(ds, format)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Write according to ExportOptions. Returns the final path written to.
pub fn write_export(export: &ExportOptions, ds: &DataSet) -> Result<PathBuf, ExportError> {
    let path = export.out_path().to_path_buf();
    write_table(&path, ds, export.format)?;
    logf!(
        "Export: wrote {} (rows={}, cols={})",
        path.display(),
        ds.row_count(),
        ds.header_count()
    );
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
