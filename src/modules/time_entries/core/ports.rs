// Ports define what validation needs from the outside world, without implementing it.
//
// Purpose
// - Describe the two lookups as traits: timesheets (with their entries) and employee profiles.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::time_entries::core::employee_profile::EmployeeProfile;
use crate::modules::time_entries::core::entry::ExistingEntry;
use crate::modules::time_entries::core::timesheet::{Timesheet, TimesheetId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimesheetRepository: Send + Sync {
    async fn find_by_id(&self, id: TimesheetId) -> Result<Option<Timesheet>, RepositoryError>;

    /// All persisted entries of a timesheet. Unknown ids yield an empty list.
    async fn entries_for(&self, id: TimesheetId) -> Result<Vec<ExistingEntry>, RepositoryError>;
}

#[async_trait]
pub trait EmployeeProfileRepository: Send + Sync {
    async fn find_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Option<EmployeeProfile>, RepositoryError>;
}
