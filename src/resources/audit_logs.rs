//! Read-only audit trail

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// One recorded action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub action: String,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Repository for `/audit-logs` (list/read only; the trail is append-only
/// server-side)
pub struct AuditLogs {
    repo: Repository<AuditLog>,
}

impl AuditLogs {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "audit-logs"),
        }
    }

    /// Trail entries touching one entity
    pub async fn get_for_entity(
        &self,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Vec<AuditLog>, Error> {
        self.repo
            .get_all(&[("entityType", entity_type), ("entityId", entity_id)])
            .await
    }

    /// Trail entries for one action kind
    pub async fn get_by_action(&self, action: &str) -> Result<Vec<AuditLog>, Error> {
        self.repo.get_all(&[("action", action)]).await
    }
}

impl Deref for AuditLogs {
    type Target = Repository<AuditLog>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
