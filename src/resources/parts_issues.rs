//! Parts issued from inventory to job cards or counters

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::ops::Deref;
use std::sync::Arc;

/// One issuance of parts out of inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsIssue {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub part_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub job_card_id: Option<String>,
    #[serde(default)]
    pub service_center_id: Option<String>,
}

/// Payload for creating a parts issue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartsIssue {
    pub part_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Repository for `/parts-issues`
pub struct PartsIssues {
    repo: Repository<PartsIssue>,
}

impl PartsIssues {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "parts-issues"),
        }
    }

    /// Issues awaiting dispatch
    pub async fn get_pending(&self) -> Result<Vec<PartsIssue>, Error> {
        self.repo.get_all(&[("status", "pending")]).await
    }

    /// Mark an issue as dispatched to its destination
    pub async fn dispatch(&self, id: &str) -> Result<PartsIssue, Error> {
        self.repo.post_action(id, "dispatch", &json!({})).await
    }
}

impl Deref for PartsIssues {
    type Target = Repository<PartsIssue>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
