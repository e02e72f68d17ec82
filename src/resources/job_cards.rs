//! Workshop job cards

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::ops::Deref;
use std::sync::Arc;

/// A job card tracking one unit of workshop work
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub job_card_number: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub service_center_id: Option<String>,
    #[serde(default)]
    pub assigned_technician_id: Option<String>,
    #[serde(default)]
    pub complaint: Option<String>,
}

/// Repository for `/job-cards`
pub struct JobCards {
    repo: Repository<JobCard>,
}

impl JobCards {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "job-cards"),
        }
    }

    /// Job cards in one workflow state
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<JobCard>, Error> {
        self.repo.get_all(&[("status", status)]).await
    }

    /// Job cards raised against one vehicle
    pub async fn get_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<JobCard>, Error> {
        self.repo.get_all(&[("vehicleId", vehicle_id)]).await
    }

    /// Transition a job card to a new status (PATCH, status field only)
    pub async fn update_status(&self, id: &str, status: &str) -> Result<JobCard, Error> {
        self.repo.update(id, &json!({ "status": status })).await
    }
}

impl Deref for JobCards {
    type Target = Repository<JobCard>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
