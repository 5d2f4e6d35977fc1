//! A [`SheetStore`] backed by a CSV file on disk.

use crate::sheet::error::StoreError;
use crate::sheet::store::SheetStore;
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Appends rows to `<dir>/<sheet_name>.csv`.
///
/// The file is opened in append mode for every row, so rows written before a
/// failure stay on disk.
#[derive(Debug, Clone)]
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(dir: &Path, sheet_name: &str) -> Self {
        Self {
            path: dir.join(format!("{sheet_name}.csv")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetStore for CsvSheet {
    fn is_empty(&mut self) -> Result<bool, StoreError> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.len() == 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(StoreError::Metadata(self.path.clone(), e)),
        }
    }

    fn append_row(&mut self, cells: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::DirCreation(parent.to_path_buf(), e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::Open(self.path.clone(), e))?;

        let mut writer = WriterBuilder::new().flexible(true).from_writer(file);
        writer
            .write_record(cells)
            .map_err(|e| StoreError::Write(self.path.clone(), e))?;
        writer
            .flush()
            .map_err(|e| StoreError::Flush(self.path.clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::store::ensure_header;
    use crate::types::row::SHEET_HEADER;

    #[test]
    fn test_missing_file_is_empty() -> Result<(), StoreError> {
        let dir = tempfile::tempdir().unwrap();
        let mut sheet = CsvSheet::new(dir.path(), "forecast");
        assert!(sheet.is_empty()?);
        assert_eq!(sheet.path(), dir.path().join("forecast.csv"));
        Ok(())
    }

    #[test]
    fn test_appends_accumulate_across_instances() -> Result<(), StoreError> {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sheets");

        let mut first = CsvSheet::new(&nested, "forecast");
        assert!(ensure_header(&mut first)?);
        let row: Vec<String> = ["2024-03-15 08:00:00", "20240315", "09시", "5", ""]
            .iter()
            .map(|cell| cell.to_string())
            .collect();
        first.append_row(&row)?;

        let mut second = CsvSheet::new(&nested, "forecast");
        assert!(!ensure_header(&mut second)?);
        second.append_row(&["a,b".to_string()])?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(second.path())
            .unwrap();
        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], SHEET_HEADER);
        assert_eq!(records[1][2], "09시");
        assert_eq!(records[1][4], "");
        assert_eq!(records[2], vec!["a,b"]);
        Ok(())
    }
}
