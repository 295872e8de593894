use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::error;

use crate::modules::time_entries::core::entry::{EntryId, ExistingEntry, TimeEntry};
use crate::modules::time_entries::core::timesheet::TimesheetId;
use crate::modules::time_entries::use_cases::validate_time_entry::command::ValidateTimeEntry;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ValidateTimeEntryBody {
    pub employee_id: String,
    pub timesheet_id: TimesheetId,
    pub entry: TimeEntry,
    #[serde(default)]
    pub exclude_entry_id: Option<EntryId>,
    /// When absent the stored entries of the timesheet are used.
    #[serde(default)]
    pub existing_entries: Option<Vec<ExistingEntry>>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ValidateTimeEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let handler = &state.validate_handler;
    let result = match body.existing_entries {
        Some(existing_entries) => Ok(handler
            .validate(ValidateTimeEntry {
                employee_id: body.employee_id,
                timesheet_id: body.timesheet_id,
                entry: body.entry,
                existing_entries,
                exclude_entry_id: body.exclude_entry_id,
            })
            .await),
        None => {
            handler
                .validate_in_timesheet(
                    body.employee_id,
                    body.timesheet_id,
                    body.entry,
                    body.exclude_entry_id,
                )
                .await
        }
    };

    match result {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => {
            error!(%error, "could not load existing entries");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
