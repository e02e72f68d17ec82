//! Service-center (tenant) records

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A physical service location; the tenant-scoping unit for most resources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCenter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Repository for `/service-centers`
pub struct ServiceCenters {
    repo: Repository<ServiceCenter>,
}

impl ServiceCenters {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "service-centers"),
        }
    }

    /// Centers currently accepting work
    pub async fn get_active(&self) -> Result<Vec<ServiceCenter>, Error> {
        self.repo.get_all(&[("active", "true")]).await
    }

    // update() comes from the base repository and is a PATCH; this resource's
    // backend contract expects the partial merge, never a PUT replacement.
}

impl Deref for ServiceCenters {
    type Target = Repository<ServiceCenter>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
