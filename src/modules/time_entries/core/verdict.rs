// Outcome of validating one candidate entry.
//
// Purpose
// - Keep each broken rule as a typed variant so callers can match on it.
// - Render the user-facing `{ valid, errors, warnings }` shape from those variants.
//
// Notes
// - Violations block submission. Advisories never do.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::time_entries::core::entry::EntryId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryViolation {
    #[error("Start time and end time are required")]
    MissingTimes,

    #[error("End time must be after start time")]
    EndNotAfterStart,

    #[error("Entries cannot start at or after {cutoff}")]
    StartsTooLate { cutoff: String },

    #[error("Entry duration of {hours:.1} hours exceeds the maximum of {max_hours} hours")]
    TooLong { hours: f64, max_hours: u16 },

    #[error("Entry date must be within the timesheet week ({week_starting} - {week_ending})")]
    OutsideTimesheetWeek {
        week_starting: String,
        week_ending: String,
    },

    #[error("Overlaps with existing entry {start} - {end} ({company})")]
    Overlap {
        entry_id: EntryId,
        start: String,
        end: String,
        company: String,
    },

    #[error("A break of at least {min_break_minutes} minutes is required between entries on the same day")]
    MissingBreak { min_break_minutes: u16 },

    #[error("Daily total of {total_hours:.1}h would exceed the maximum of {max_hours}h")]
    DailyLimitExceeded { total_hours: f64, max_hours: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryAdvisory {
    #[error("Weekend entry: a deviation reason may be required")]
    WeekendEntry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryVerdict {
    pub violations: Vec<EntryViolation>,
    pub advisories: Vec<EntryAdvisory>,
}

impl EntryVerdict {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<EntryVerdict> for ValidationResult {
    fn from(verdict: EntryVerdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            errors: verdict.violations.iter().map(ToString::to_string).collect(),
            warnings: verdict.advisories.iter().map(ToString::to_string).collect(),
        }
    }
}
