//! Workshop appointments

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A scheduled visit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub service_center_id: Option<String>,
}

/// Repository for `/appointments`
pub struct Appointments {
    repo: Repository<Appointment>,
}

impl Appointments {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "appointments"),
        }
    }

    /// Appointments booked for one calendar day (ISO date)
    pub async fn get_for_date(&self, date: &str) -> Result<Vec<Appointment>, Error> {
        self.repo.get_all(&[("date", date)]).await
    }
}

impl Deref for Appointments {
    type Target = Repository<Appointment>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
