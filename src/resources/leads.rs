//! Sales leads

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A prospective customer enquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// Repository for `/leads`
pub struct Leads {
    repo: Repository<Lead>,
}

impl Leads {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "leads"),
        }
    }

    /// Leads in one pipeline state
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Lead>, Error> {
        self.repo.get_all(&[("status", status)]).await
    }
}

impl Deref for Leads {
    type Target = Repository<Lead>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
