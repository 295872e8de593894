// Behaviour of the entry validator through the public crate API.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use timesheet_validation::modules::time_entries::core::employee_profile::EmployeeProfile;
use timesheet_validation::modules::time_entries::core::entry::{ExistingEntry, TimeEntry};
use timesheet_validation::modules::time_entries::core::timesheet::Timesheet;
use timesheet_validation::modules::time_entries::core::verdict::ValidationResult;
use timesheet_validation::modules::time_entries::use_cases::validate_time_entry::validate::{
    ValidationContext, validate_entry,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn entry_on(day: NaiveDate, start: &str, end: &str) -> TimeEntry {
    TimeEntry {
        date: day,
        start_time: Some(start.into()),
        end_time: Some(end.into()),
        entry_type: None,
        company_id: None,
        company: None,
    }
}

fn entry(start: &str, end: &str) -> TimeEntry {
    entry_on(date(2026, 1, 7), start, end)
}

fn existing(id: i64, start: &str, end: &str, hours: f64) -> ExistingEntry {
    ExistingEntry {
        id,
        date: date(2026, 1, 7),
        start_time: Some(start.into()),
        end_time: Some(end.into()),
        hours,
        company: Some("Northwind".into()),
    }
}

#[fixture]
fn timesheet() -> Timesheet {
    Timesheet {
        id: 42,
        employee_id: "emp-0042".into(),
        week_starting: date(2026, 1, 5),
        week_ending: date(2026, 1, 11),
        entries: vec![],
    }
}

fn default_profile() -> EmployeeProfile {
    EmployeeProfile::default()
}

fn check(
    candidate: &TimeEntry,
    others: &[ExistingEntry],
    exclude: Option<i64>,
    timesheet: &Timesheet,
    profile: EmployeeProfile,
) -> ValidationResult {
    let context = ValidationContext {
        timesheet: Some(timesheet),
        max_daily_hours: profile.daily_limit(),
    };
    validate_entry(candidate, others, exclude, &context).into()
}

#[rstest]
fn repeated_calls_yield_identical_results(timesheet: Timesheet) {
    let others = vec![existing(1, "08:00", "12:00", 4.0)];
    let candidate = entry("11:30", "20:00");
    let first = check(&candidate, &others, None, &timesheet, default_profile());
    for _ in 0..5 {
        let again = check(&candidate, &others, None, &timesheet, default_profile());
        assert_eq!(again, first);
    }
}

#[rstest]
fn inverted_interval_exits_before_duration_and_overlap(timesheet: Timesheet) {
    let others = vec![existing(1, "07:00", "10:00", 3.0)];
    let result = check(
        &entry("09:00", "08:00"),
        &others,
        None,
        &timesheet,
        default_profile(),
    );
    assert!(!result.valid);
    assert_eq!(result.errors, vec!["End time must be after start time".to_string()]);
}

#[rstest]
fn late_start_errors_on_its_own(timesheet: Timesheet) {
    let result = check(
        &entry("23:15", "23:45"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert_eq!(
        result.errors,
        vec!["Entries cannot start at or after 11:00 PM".to_string()]
    );
}

#[rstest]
fn late_start_and_ordering_both_report(timesheet: Timesheet) {
    let result = check(
        &entry("23:30", "23:15"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert_eq!(result.errors.len(), 2);
}

#[rstest]
fn thirteen_hour_entry_exceeds_the_single_entry_maximum(timesheet: Timesheet) {
    let result = check(
        &entry("06:00", "19:00"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("13.0 hours"));
    assert!(result.errors[0].contains("maximum of 12 hours"));
}

#[rstest]
fn overlap_names_the_existing_range_and_is_cleared_by_exclusion(timesheet: Timesheet) {
    let others = vec![existing(1, "09:00", "12:00", 3.0)];
    let candidate = entry("11:00", "13:00");

    let result = check(&candidate, &others, None, &timesheet, default_profile());
    assert!(
        result
            .errors
            .contains(&"Overlaps with existing entry 9:00 AM - 12:00 PM (Northwind)".to_string())
    );

    let edited = check(&candidate, &others, Some(1), &timesheet, default_profile());
    assert!(edited.errors.iter().all(|e| !e.starts_with("Overlaps")));
    assert!(edited.valid);
}

#[rstest]
#[case("12:00", "16:00", true)]
#[case("12:30", "16:30", false)]
fn back_to_back_entries_need_a_break(
    timesheet: Timesheet,
    #[case] start: &str,
    #[case] end: &str,
    #[case] rejected: bool,
) {
    let others = vec![existing(1, "08:00", "12:00", 4.0)];
    let result = check(
        &entry(start, end),
        &others,
        None,
        &timesheet,
        default_profile(),
    );
    let has_break_error = result.errors.iter().any(|e| e.contains("break of at least 30 minutes"));
    assert_eq!(has_break_error, rejected);
    assert_eq!(result.valid, !rejected);
}

#[rstest]
#[case("14:00", "17:00", Some("Daily total of 11.0h would exceed the maximum of 10h"))]
#[case("14:00", "16:00", None)]
fn daily_cap_is_inclusive(
    timesheet: Timesheet,
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: Option<&str>,
) {
    let others = vec![existing(1, "05:00", "13:00", 8.0)];
    let profile = EmployeeProfile::with_max_daily_hours(10.0);
    let result = check(&entry(start, end), &others, None, &timesheet, profile);
    let expected: Vec<String> = expected.into_iter().map(str::to_string).collect();
    assert_eq!(result.errors, expected);
}

#[rstest]
fn saturday_entries_are_valid_with_a_warning(timesheet: Timesheet) {
    let result = check(
        &entry_on(date(2026, 1, 10), "09:00", "13:00"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert!(result.valid);
    assert!(!result.warnings.is_empty());
}

#[rstest]
fn entries_must_fall_inside_the_timesheet_week(timesheet: Timesheet) {
    let next_monday = check(
        &entry_on(date(2026, 1, 12), "09:00", "13:00"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert_eq!(
        next_monday.errors,
        vec!["Entry date must be within the timesheet week (1/5/2026 - 1/11/2026)".to_string()]
    );

    let last_sunday = check(
        &entry_on(date(2026, 1, 11), "19:00", "22:59"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert!(last_sunday.valid);
}

#[rstest]
fn a_lone_entry_needs_no_break(timesheet: Timesheet) {
    let result = check(
        &entry("06:00", "18:00"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
}

#[rstest]
fn missing_times_short_circuit_everything(timesheet: Timesheet) {
    let mut candidate = entry_on(date(2026, 2, 1), "09:00", "10:00");
    candidate.end_time = None;
    let result = check(&candidate, &[], None, &timesheet, default_profile());
    assert_eq!(result.errors, vec!["Start time and end time are required".to_string()]);
    assert!(result.warnings.is_empty());
}

#[rstest]
fn single_digit_hours_count_as_missing_times(timesheet: Timesheet) {
    let result = check(
        &entry("9:00", "17:00"),
        &[],
        None,
        &timesheet,
        default_profile(),
    );
    assert_eq!(result.errors, vec!["Start time and end time are required".to_string()]);
}

#[rstest]
fn stored_hours_count_toward_the_cap_even_when_times_do_not_parse(timesheet: Timesheet) {
    let others = vec![existing(1, "9am", "5pm", 15.0)];
    let result = check(
        &entry("09:00", "11:00"),
        &others,
        None,
        &timesheet,
        default_profile(),
    );
    assert_eq!(
        result.errors,
        vec!["Daily total of 17.0h would exceed the maximum of 16h".to_string()]
    );
}
