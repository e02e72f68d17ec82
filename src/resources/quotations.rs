//! Quotations offered to customers

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::ops::Deref;
use std::sync::Arc;

/// A quotation for proposed work
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub valid_until: Option<String>,
}

/// Repository for `/quotations`
pub struct Quotations {
    repo: Repository<Quotation>,
}

impl Quotations {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "quotations"),
        }
    }

    /// Quotations in one workflow state
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Quotation>, Error> {
        self.repo.get_all(&[("status", status)]).await
    }

    /// Send a quotation to its customer
    pub async fn send_to_customer(&self, id: &str) -> Result<Quotation, Error> {
        self.repo
            .post_action(id, "send-to-customer", &json!({}))
            .await
    }
}

impl Deref for Quotations {
    type Target = Repository<Quotation>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
