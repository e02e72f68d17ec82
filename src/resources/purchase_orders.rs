//! Purchase orders and their approval workflow

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::ops::Deref;
use std::sync::Arc;

/// A purchase order raised against a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub service_center_id: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// Repository for `/purchase-orders`
pub struct PurchaseOrders {
    repo: Repository<PurchaseOrder>,
}

impl PurchaseOrders {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "purchase-orders"),
        }
    }

    /// Purchase orders in one workflow state
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<PurchaseOrder>, Error> {
        self.repo.get_all(&[("status", status)]).await
    }

    /// Submit a draft order for approval
    pub async fn submit(&self, id: &str) -> Result<PurchaseOrder, Error> {
        self.repo.post_action(id, "submit", &json!({})).await
    }

    /// Approve a submitted order
    pub async fn approve(&self, id: &str) -> Result<PurchaseOrder, Error> {
        self.repo.post_action(id, "approve", &json!({})).await
    }

    /// Reject a submitted order with a reason
    pub async fn reject(&self, id: &str, reason: &str) -> Result<PurchaseOrder, Error> {
        self.repo
            .post_action(id, "reject", &json!({ "reason": reason }))
            .await
    }

    /// Record goods received against an approved order
    pub async fn receive(&self, id: &str) -> Result<PurchaseOrder, Error> {
        self.repo.post_action(id, "receive", &json!({})).await
    }

    /// Issue received stock into inventory
    pub async fn issue(&self, id: &str) -> Result<PurchaseOrder, Error> {
        self.repo.post_action(id, "issue", &json!({})).await
    }
}

impl Deref for PurchaseOrders {
    type Target = Repository<PurchaseOrder>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
