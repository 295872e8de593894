// Command data type for validating a candidate time entry.
//
// Responsibilities
// - Carry the candidate, the caller's snapshot of existing entries, and the ids needed for lookups.
// - Be independent of transport layer details.

use crate::modules::time_entries::core::entry::{EntryId, ExistingEntry, TimeEntry};
use crate::modules::time_entries::core::timesheet::TimesheetId;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidateTimeEntry {
    pub employee_id: String,
    pub timesheet_id: TimesheetId,
    pub entry: TimeEntry,
    /// May span several days; the validator narrows it to the candidate's date.
    pub existing_entries: Vec<ExistingEntry>,
    /// Set when editing an entry in place so it is not compared against itself.
    pub exclude_entry_id: Option<EntryId>,
}
