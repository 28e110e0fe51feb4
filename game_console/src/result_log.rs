//! CSV result log - one row per location transition.

use game_rules::{RecordError, ResultRecord, ResultRecorder};
use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column names written as the first row.
pub const HEADER: [&str; 3] = ["current_location", "current_experience", "current_date"];

/// Local timestamp format of the `current_date` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Result log backed by a CSV file.
///
/// The file is only held open while a single row is written.
#[derive(Debug, Clone)]
pub struct CsvResultLog {
    path: PathBuf,
}

impl CsvResultLog {
    /// Create (or truncate) the log and write the header row.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, RecordError> {
        let path = path.into();
        let mut file = File::create(&path)?;
        file.write_all(csv_row(&HEADER).as_bytes())?;
        tracing::debug!(path = %path.display(), "Result log created");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultRecorder for CsvResultLog {
    fn record(&mut self, record: ResultRecord) -> Result<(), RecordError> {
        let experience = record.experience.to_string();
        let timestamp = record.recorded_at.format(TIMESTAMP_FORMAT).to_string();
        let row = csv_row(&[
            record.location.as_str(),
            experience.as_str(),
            timestamp.as_str(),
        ]);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(row.as_bytes())?;

        tracing::debug!(location = %record.location, %experience, "Result recorded");
        Ok(())
    }
}

fn csv_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
