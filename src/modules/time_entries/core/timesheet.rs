use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::entry::ExistingEntry;

pub type TimesheetId = i64;

/// Weekly container of one employee's entries. The validator only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub id: TimesheetId,
    pub employee_id: String,
    pub week_starting: NaiveDate,
    pub week_ending: NaiveDate,
    #[serde(default)]
    pub entries: Vec<ExistingEntry>,
}

impl Timesheet {
    /// Inclusive on both ends; a date carries no time of day so the last day counts in full.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_starting <= date && date <= self.week_ending
    }
}

/// US-style `M/D/YYYY`, the form dates are shown to users in.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
