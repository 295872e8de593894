use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DAILY_HOURS: f64 = 16.0;

/// The only part of an employee record the validator needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(default)]
    pub max_daily_hours: Option<f64>,
}

impl EmployeeProfile {
    pub fn with_max_daily_hours(hours: f64) -> Self {
        Self {
            max_daily_hours: Some(hours),
        }
    }

    /// Configured limit, or the default when unset, zero, or not a finite number.
    pub fn daily_limit(&self) -> f64 {
        self.max_daily_hours
            .filter(|hours| hours.is_finite() && *hours > 0.0)
            .unwrap_or(DEFAULT_MAX_DAILY_HOURS)
    }
}
