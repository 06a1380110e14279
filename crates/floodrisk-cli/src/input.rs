//! Depth file guards and CSV parsing.
//!
//! Files have a header row. The depth in metres is the last field of each
//! record, so both `depth` files and `index,depth` files are accepted.

use crate::error::{CliError, Result};
use floodrisk_domain::DepthSource;
use std::io;
use std::path::{Path, PathBuf};

/// Fail unless `path` is an existing regular file.
pub fn guard_against_missing_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Fail unless `path` has a `.csv` extension.
pub fn guard_against_non_csv_file(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(()),
        _ => Err(CliError::NotCsv(path.to_path_buf())),
    }
}

/// A guarded CSV file of depth readings.
#[derive(Debug, Clone)]
pub struct CsvDepthFile {
    path: PathBuf,
}

impl CsvDepthFile {
    /// Check that `path` exists and is a csv.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        guard_against_missing_file(&path)?;
        guard_against_non_csv_file(&path)?;
        Ok(Self { path })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DepthSource for CsvDepthFile {
    type Error = CliError;

    fn depths(&self) -> Result<Vec<f64>> {
        let file = std::fs::File::open(&self.path)?;
        parse_depths(file)
    }
}

/// Parse depths from CSV text with a header row.
pub fn parse_depths<R: io::Read>(reader: R) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut depths = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let field = record.iter().last().unwrap_or_default();
        depths.push(parse_depth(field, row)?);
    }
    Ok(depths)
}

fn parse_depth(field: &str, row: usize) -> Result<f64> {
    let depth: f64 = field.parse().map_err(|_| {
        CliError::InvalidInput(format!("row {}: '{}' is not a valid depth", row, field))
    })?;
    if !depth.is_finite() || depth < 0.0 {
        return Err(CliError::InvalidInput(format!(
            "row {}: depth {} must be a non-negative number of metres",
            row, field
        )));
    }
    Ok(depth)
}
