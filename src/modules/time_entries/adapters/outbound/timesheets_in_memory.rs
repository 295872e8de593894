// In memory implementation of the TimesheetRepository port.
//
// Purpose
// - Support handler tests and local development without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::time_entries::core::entry::ExistingEntry;
use crate::modules::time_entries::core::ports::{RepositoryError, TimesheetRepository};
use crate::modules::time_entries::core::timesheet::{Timesheet, TimesheetId};

#[derive(Default)]
pub struct InMemoryTimesheets {
    timesheets: RwLock<HashMap<TimesheetId, Timesheet>>,
    offline: bool,
}

impl InMemoryTimesheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Stores or replaces the timesheet under its id.
    pub async fn insert(&self, timesheet: Timesheet) {
        self.timesheets.write().await.insert(timesheet.id, timesheet);
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Timesheet store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TimesheetRepository for InMemoryTimesheets {
    async fn find_by_id(&self, id: TimesheetId) -> Result<Option<Timesheet>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.timesheets.read().await.get(&id).cloned())
    }

    async fn entries_for(&self, id: TimesheetId) -> Result<Vec<ExistingEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.timesheets.read().await;
        Ok(guard
            .get(&id)
            .map(|timesheet| timesheet.entries.clone())
            .unwrap_or_default())
    }
}
