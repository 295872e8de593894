// Entry shapes the validator reads.
//
// Responsibilities
// - Carry times as the raw strings they arrive as. Parsing happens through `interval()`.
// - Stay transport-agnostic; serde derives only describe the JSON shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::time_of_day::WorkInterval;

pub type EntryId = i64;

/// A candidate entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub company: Option<String>,
}

impl TimeEntry {
    pub fn interval(&self) -> Option<WorkInterval> {
        WorkInterval::parse(self.start_time.as_deref(), self.end_time.as_deref())
    }
}

/// A previously persisted entry of the same employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub company: Option<String>,
}

impl ExistingEntry {
    pub fn interval(&self) -> Option<WorkInterval> {
        WorkInterval::parse(self.start_time.as_deref(), self.end_time.as_deref())
    }

    pub fn company_label(&self) -> &str {
        self.company
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("unknown")
    }
}
