//! User accounts and the current session's profile

use crate::envelope::normalize_record;
use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A user of the system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub service_center_id: Option<String>,
}

/// Repository for `/users`
pub struct Users {
    repo: Repository<User>,
}

impl Users {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "users"),
        }
    }

    /// The profile of the authenticated user
    pub async fn me(&self) -> Result<User, Error> {
        let body = self.repo.get_value_at("users/me", &[]).await?;
        normalize_record(body)
    }

    /// Users holding one role
    pub async fn get_by_role(&self, role: &str) -> Result<Vec<User>, Error> {
        self.repo.get_all(&[("role", role)]).await
    }
}

impl Deref for Users {
    type Target = Repository<User>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
