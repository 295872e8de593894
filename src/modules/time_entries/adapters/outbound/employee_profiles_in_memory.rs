use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::time_entries::core::employee_profile::EmployeeProfile;
use crate::modules::time_entries::core::ports::{EmployeeProfileRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryEmployeeProfiles {
    profiles: RwLock<HashMap<String, EmployeeProfile>>,
    offline: bool,
}

impl InMemoryEmployeeProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn insert(&self, employee_id: impl Into<String>, profile: EmployeeProfile) {
        self.profiles.write().await.insert(employee_id.into(), profile);
    }
}

#[async_trait]
impl EmployeeProfileRepository for InMemoryEmployeeProfiles {
    async fn find_by_employee(
        &self,
        employee_id: &str,
    ) -> Result<Option<EmployeeProfile>, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("Profile store offline".into()));
        }
        Ok(self.profiles.read().await.get(employee_id).copied())
    }
}
