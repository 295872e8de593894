use chrono::NaiveDate;

use crate::modules::time_entries::core::timesheet::Timesheet;

pub const EMPLOYEE_ID: &str = "emp-0001";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Monday 2026-01-05 through Sunday 2026-01-11, no entries.
pub fn week_timesheet() -> Timesheet {
    Timesheet {
        id: 1,
        employee_id: EMPLOYEE_ID.to_string(),
        week_starting: date(2026, 1, 5),
        week_ending: date(2026, 1, 11),
        entries: vec![],
    }
}
