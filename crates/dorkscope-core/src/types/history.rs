//! Generation history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DorkString;

/// One successful generation: what was asked and what was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub input: String,
    pub dork: DorkString,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Stamp an entry with the current UTC time.
    pub fn new(input: impl Into<String>, dork: DorkString) -> Self {
        Self::at(input, dork, Utc::now())
    }

    pub fn at(input: impl Into<String>, dork: DorkString, timestamp: DateTime<Utc>) -> Self {
        Self {
            input: input.into(),
            dork,
            timestamp,
        }
    }

    /// `HH:MM` of the timestamp, as shown in history listings.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
