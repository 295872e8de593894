use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::employee_profiles_in_memory::InMemoryEmployeeProfiles;
use crate::modules::time_entries::adapters::outbound::timesheets_in_memory::InMemoryTimesheets;
use crate::modules::time_entries::use_cases::validate_time_entry::handler::ValidateTimeEntryHandler;

#[derive(Clone)]
pub struct AppState {
    pub validate_handler:
        Arc<ValidateTimeEntryHandler<InMemoryTimesheets, InMemoryEmployeeProfiles>>,
}
