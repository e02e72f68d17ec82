//! Invoices and invoice line items

use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// One invoice line.
///
/// `hsn_sac_code` is omitted from the wire entirely when absent; the backend
/// rejects an empty string there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub gst_rate: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_sac_code: Option<String>,
}

/// An issued invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub customer_id: String,
    pub vehicle_id: String,
    pub service_center_id: String,
    #[serde(default)]
    pub invoice_type: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub total: Option<f64>,
}

/// The DTO submitted to create an invoice. All three ids are validated
/// non-empty before submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub service_center_id: String,
    pub customer_id: String,
    pub vehicle_id: String,
    pub invoice_type: String,
    pub items: Vec<InvoiceItem>,
}

/// Repository for `/invoices`
pub struct Invoices {
    repo: Repository<Invoice>,
}

impl Invoices {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "invoices"),
        }
    }

    /// Invoices issued to one customer
    pub async fn get_by_customer(&self, customer_id: &str) -> Result<Vec<Invoice>, Error> {
        self.repo.get_all(&[("customerId", customer_id)]).await
    }
}

impl Deref for Invoices {
    type Target = Repository<Invoice>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
