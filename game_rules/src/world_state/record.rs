//! Result records - one row per location transition.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while persisting a result record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A snapshot taken when the player leaves a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The location being left.
    pub location: String,
    /// Experience at the moment of the transition.
    pub experience: Decimal,
    pub recorded_at: DateTime<Local>,
}

impl ResultRecord {
    /// Create a record stamped with the current local time.
    pub fn now(location: impl Into<String>, experience: Decimal) -> Self {
        Self {
            location: location.into(),
            experience,
            recorded_at: Local::now(),
        }
    }
}

/// Append-only sink for result records.
pub trait ResultRecorder {
    fn record(&mut self, record: ResultRecord) -> Result<(), RecordError>;
}

impl ResultRecorder for Vec<ResultRecord> {
    fn record(&mut self, record: ResultRecord) -> Result<(), RecordError> {
        self.push(record);
        Ok(())
    }
}
