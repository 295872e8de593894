// Validation handler orchestrates the read flow around the pure validator.
//
// Responsibilities
// - Resolve the owning timesheet and the employee's daily limit through the ports.
// - Call the validator with the caller's snapshot of existing entries.
// - Degrade lookups instead of failing: the verdict is always returned.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::modules::time_entries::core::employee_profile::EmployeeProfile;
use crate::modules::time_entries::core::entry::{EntryId, TimeEntry};
use crate::modules::time_entries::core::ports::{
    EmployeeProfileRepository, RepositoryError, TimesheetRepository,
};
use crate::modules::time_entries::core::timesheet::TimesheetId;
use crate::modules::time_entries::core::verdict::ValidationResult;
use crate::modules::time_entries::use_cases::validate_time_entry::command::ValidateTimeEntry;
use crate::modules::time_entries::use_cases::validate_time_entry::validate::{
    ValidationContext, validate_entry,
};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct ValidateTimeEntryHandler<TTimesheets, TProfiles>
where
    TTimesheets: TimesheetRepository + 'static,
    TProfiles: EmployeeProfileRepository + 'static,
{
    timesheets: Arc<TTimesheets>,
    profiles: Arc<TProfiles>,
}

impl<TTimesheets, TProfiles> ValidateTimeEntryHandler<TTimesheets, TProfiles>
where
    TTimesheets: TimesheetRepository + 'static,
    TProfiles: EmployeeProfileRepository + 'static,
{
    pub fn new(timesheets: Arc<TTimesheets>, profiles: Arc<TProfiles>) -> Self {
        Self {
            timesheets,
            profiles,
        }
    }

    pub async fn validate(&self, command: ValidateTimeEntry) -> ValidationResult {
        let timesheet = match self.timesheets.find_by_id(command.timesheet_id).await {
            Ok(timesheet) => timesheet,
            Err(error) => {
                warn!(
                    timesheet_id = command.timesheet_id,
                    %error,
                    "timesheet lookup failed, skipping week range check"
                );
                None
            }
        };

        let profile = match self.profiles.find_by_employee(&command.employee_id).await {
            Ok(profile) => profile.unwrap_or_default(),
            Err(error) => {
                warn!(
                    employee_id = %command.employee_id,
                    %error,
                    "profile lookup failed, using default daily limit"
                );
                EmployeeProfile::default()
            }
        };

        let context = ValidationContext {
            timesheet: timesheet.as_ref(),
            max_daily_hours: profile.daily_limit(),
        };
        let verdict = validate_entry(
            &command.entry,
            &command.existing_entries,
            command.exclude_entry_id,
            &context,
        );
        debug!(
            employee_id = %command.employee_id,
            timesheet_id = command.timesheet_id,
            date = %command.entry.date,
            errors = verdict.violations.len(),
            warnings = verdict.advisories.len(),
            "validated time entry"
        );
        verdict.into()
    }

    /// Validates against the entries the repository holds for the timesheet.
    pub async fn validate_in_timesheet(
        &self,
        employee_id: impl Into<String>,
        timesheet_id: TimesheetId,
        entry: TimeEntry,
        exclude_entry_id: Option<EntryId>,
    ) -> Result<ValidationResult, ApplicationError> {
        let existing_entries = self.timesheets.entries_for(timesheet_id).await?;
        let command = ValidateTimeEntry {
            employee_id: employee_id.into(),
            timesheet_id,
            entry,
            existing_entries,
            exclude_entry_id,
        };
        Ok(self.validate(command).await)
    }
}
