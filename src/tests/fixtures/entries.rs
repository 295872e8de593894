// Builders for candidate and persisted entries.
//
// Defaults sit on Tuesday 2026-01-06, inside the week of `week_timesheet()`.

use chrono::NaiveDate;

use crate::modules::time_entries::core::entry::{EntryId, ExistingEntry, TimeEntry};
use crate::modules::time_entries::core::time_of_day::WorkInterval;
use crate::tests::fixtures::timesheets::date;

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                date: date(2026, 1, 6),
                start_time: Some("09:00".to_string()),
                end_time: Some("12:00".to_string()),
                entry_type: Some("regular".to_string()),
                company_id: Some(7),
                company: Some("Acme".to_string()),
            },
        }
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.inner.start_time = Some(start.to_string());
        self.inner.end_time = Some(end.to_string());
        self
    }

    pub fn company(mut self, v: impl Into<String>) -> Self {
        self.inner.company = Some(v.into());
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

pub struct ExistingEntryBuilder {
    inner: ExistingEntry,
}

#[allow(dead_code)]
impl ExistingEntryBuilder {
    pub fn new(id: EntryId) -> Self {
        Self {
            inner: ExistingEntry {
                id,
                date: date(2026, 1, 6),
                start_time: Some("08:00".to_string()),
                end_time: Some("12:00".to_string()),
                hours: 4.0,
                company: None,
            },
        }
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    /// Sets both times and recomputes the stored hours from them.
    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.inner.start_time = Some(start.to_string());
        self.inner.end_time = Some(end.to_string());
        self.inner.hours = WorkInterval::parse(Some(start), Some(end))
            .map(|interval| interval.duration_hours())
            .unwrap_or_default();
        self
    }

    /// Overrides the stored hours without touching the times.
    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn company(mut self, v: impl Into<String>) -> Self {
        self.inner.company = Some(v.into());
        self
    }

    pub fn build(self) -> ExistingEntry {
        self.inner
    }
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_derive_stored_hours_from_times() {
        let entry = ExistingEntryBuilder::new(3).times("07:30", "12:00").build();
        assert_eq!(entry.hours, 4.5);
    }

    #[rstest]
    fn hours_should_override_without_touching_times() {
        let entry = ExistingEntryBuilder::new(3).times("07:30", "12:00").hours(2.0).build();
        assert_eq!(entry.hours, 2.0);
        assert_eq!(entry.start_time.as_deref(), Some("07:30"));
    }
}
