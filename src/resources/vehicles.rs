//! Vehicle records and registration lookup

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A vehicle known to the workshop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    pub customer_id: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
}

/// Payload for creating a vehicle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub registration: String,
    pub vin: String,
    pub customer_id: String,
    pub make: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

/// Repository for `/vehicles`
pub struct Vehicles {
    repo: Repository<Vehicle>,
}

impl Vehicles {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "vehicles"),
        }
    }

    /// Find a vehicle whose registration matches exactly, ignoring case.
    ///
    /// The backend search is broader than an exact match, so the results are
    /// filtered again client-side before one is picked.
    pub async fn search_by_registration(
        &self,
        registration: &str,
    ) -> Result<Option<Vehicle>, Error> {
        let needle = registration.trim();
        let matches = self
            .repo
            .get_all(&[("registration", needle)])
            .await?;
        Ok(matches.into_iter().find(|vehicle| {
            vehicle
                .registration
                .as_deref()
                .is_some_and(|reg| reg.eq_ignore_ascii_case(needle))
        }))
    }

    /// All vehicles registered to one customer
    pub async fn get_by_customer(&self, customer_id: &str) -> Result<Vec<Vehicle>, Error> {
        self.repo.get_all(&[("customerId", customer_id)]).await
    }
}

impl Deref for Vehicles {
    type Target = Repository<Vehicle>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
