// Pure validation of a candidate time entry.
//
// Purpose
// - Check the candidate against the rules and the employee's other entries of the same day.
//
// Responsibilities
// - Stop after parsing, ordering and the late-start cutoff when any of them fail.
// - Otherwise run every remaining rule and collect all violations and advisories.
// - Never perform input or output. Lookups are resolved by the caller and passed in.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::modules::time_entries::core::employee_profile::DEFAULT_MAX_DAILY_HOURS;
use crate::modules::time_entries::core::entry::{EntryId, ExistingEntry, TimeEntry};
use crate::modules::time_entries::core::time_of_day::{TimeOfDay, WorkInterval};
use crate::modules::time_entries::core::timesheet::{Timesheet, display_date};
use crate::modules::time_entries::core::verdict::{EntryAdvisory, EntryVerdict, EntryViolation};

pub const MAX_ENTRY_HOURS: u16 = 12;
pub const MIN_BREAK_MINUTES: u16 = 30;

/// Entries must start strictly before this time.
pub const LATEST_START: TimeOfDay = TimeOfDay::at(23, 0);

/// Values the validator reads from its collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationContext<'a> {
    /// `None` when the owning timesheet could not be resolved; the week check is skipped.
    pub timesheet: Option<&'a Timesheet>,
    pub max_daily_hours: f64,
}

impl Default for ValidationContext<'_> {
    fn default() -> Self {
        Self {
            timesheet: None,
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
        }
    }
}

pub fn validate_entry(
    entry: &TimeEntry,
    existing_entries: &[ExistingEntry],
    exclude_entry_id: Option<EntryId>,
    context: &ValidationContext<'_>,
) -> EntryVerdict {
    let mut verdict = EntryVerdict::default();

    let Some(candidate) = entry.interval() else {
        verdict.violations.push(EntryViolation::MissingTimes);
        return verdict;
    };

    if candidate.end <= candidate.start {
        verdict.violations.push(EntryViolation::EndNotAfterStart);
    }
    if candidate.start >= LATEST_START {
        verdict.violations.push(EntryViolation::StartsTooLate {
            cutoff: LATEST_START.to_12_hour(),
        });
    }
    if !verdict.violations.is_empty() {
        return verdict;
    }

    let entry_hours = candidate.duration_hours();
    if entry_hours > f64::from(MAX_ENTRY_HOURS) {
        verdict.violations.push(EntryViolation::TooLong {
            hours: entry_hours,
            max_hours: MAX_ENTRY_HOURS,
        });
    }

    if let Some(timesheet) = context.timesheet {
        if !timesheet.contains(entry.date) {
            verdict.violations.push(EntryViolation::OutsideTimesheetWeek {
                week_starting: display_date(timesheet.week_starting),
                week_ending: display_date(timesheet.week_ending),
            });
        }
    }

    if is_weekend(entry.date) {
        verdict.advisories.push(EntryAdvisory::WeekendEntry);
    }

    let same_day = same_day_entries(entry.date, existing_entries, exclude_entry_id);
    let timed: Vec<(&ExistingEntry, WorkInterval)> = same_day
        .iter()
        .filter_map(|other| other.interval().map(|interval| (*other, interval)))
        .collect();

    for (other, interval) in &timed {
        if candidate.overlaps(interval) {
            verdict.violations.push(EntryViolation::Overlap {
                entry_id: other.id,
                start: interval.start.to_12_hour(),
                end: interval.end.to_12_hour(),
                company: other.company_label().to_string(),
            });
        }
    }

    if !timed.is_empty() {
        let mut intervals: Vec<WorkInterval> =
            timed.iter().map(|(_, interval)| *interval).collect();
        intervals.push(candidate);
        if !has_break(&mut intervals) {
            verdict.violations.push(EntryViolation::MissingBreak {
                min_break_minutes: MIN_BREAK_MINUTES,
            });
        }
    }

    // Stored hours count even when the recorded times do not parse.
    let existing_hours: f64 = same_day.iter().map(|other| other.hours).sum();
    let total_hours = existing_hours + entry_hours;
    if total_hours > context.max_daily_hours {
        verdict.violations.push(EntryViolation::DailyLimitExceeded {
            total_hours,
            max_hours: context.max_daily_hours,
        });
    }

    verdict
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Entries on `date`, other than the one being edited, that have both times set.
fn same_day_entries(
    date: NaiveDate,
    existing_entries: &[ExistingEntry],
    exclude_entry_id: Option<EntryId>,
) -> Vec<&ExistingEntry> {
    existing_entries
        .iter()
        .filter(|other| other.date == date)
        .filter(|other| Some(other.id) != exclude_entry_id)
        .filter(|other| other.start_time.is_some() && other.end_time.is_some())
        .collect()
}

/// Any gap of at least the minimum between consecutive intervals ordered by start time.
fn has_break(intervals: &mut [WorkInterval]) -> bool {
    intervals.sort_by_key(|interval| interval.start);
    intervals
        .windows(2)
        .any(|pair| pair[0].gap_until(&pair[1]) >= i32::from(MIN_BREAK_MINUTES))
}
