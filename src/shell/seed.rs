// Startup data for the in memory stores.
//
// Format
// { "timesheets": [Timesheet, ...], "profiles": [{ "employee_id": "...", "max_daily_hours": 10 }] }

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::modules::time_entries::adapters::outbound::employee_profiles_in_memory::InMemoryEmployeeProfiles;
use crate::modules::time_entries::adapters::outbound::timesheets_in_memory::InMemoryTimesheets;
use crate::modules::time_entries::core::employee_profile::EmployeeProfile;
use crate::modules::time_entries::core::timesheet::Timesheet;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProfile {
    pub employee_id: String,
    #[serde(default)]
    pub max_daily_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub timesheets: Vec<Timesheet>,
    #[serde(default)]
    pub profiles: Vec<SeedProfile>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub async fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }

    pub async fn apply(self, timesheets: &InMemoryTimesheets, profiles: &InMemoryEmployeeProfiles) {
        for timesheet in self.timesheets {
            timesheets.insert(timesheet).await;
        }
        for profile in self.profiles {
            profiles
                .insert(
                    profile.employee_id,
                    EmployeeProfile {
                        max_daily_hours: profile.max_daily_hours,
                    },
                )
                .await;
        }
    }
}
