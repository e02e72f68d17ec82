//! Customer records and phone/name search

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// A customer of a service center
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub service_center_id: Option<String>,
}

/// Payload for creating a customer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Repository for `/customers`
pub struct Customers {
    repo: Repository<Customer>,
}

impl Customers {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "customers"),
        }
    }

    /// Search customers by phone number.
    ///
    /// The search endpoint wraps its results one level deeper than regular
    /// lists (`{success, data: {data: [...]}, meta}`); normalization handles
    /// both that and the plain shapes.
    pub async fn search_by_phone(&self, phone: &str) -> Result<Vec<Customer>, Error> {
        self.repo.get_all_at("search", &[("phone", phone)]).await
    }

    /// Search customers by (partial) name
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Customer>, Error> {
        self.repo.get_all_at("search", &[("name", name)]).await
    }
}

impl Deref for Customers {
    type Target = Repository<Customer>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
