//! Inventory parts and stock adjustment.
//!
//! Stock adjustments validate against the allocated floor locally before any
//! network call: stock already promised to job cards or parts issues can
//! never be removed or adjusted away.

use crate::envelope::{normalize_list, normalize_record};
use crate::error::Error;
use crate::repository::{ClientState, Repository};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// An inventory part, at a service center or in central stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPart {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub current_qty: u32,
    /// Quantity already promised (job cards, pending issues)
    #[serde(default)]
    pub allocated: u32,
    #[serde(default)]
    pub min_stock_level: Option<u32>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub service_center_id: Option<String>,
}

impl InventoryPart {
    /// Stock not yet promised to anything
    pub fn available(&self) -> u32 {
        self.current_qty.saturating_sub(self.allocated)
    }
}

/// A requested stock adjustment.
///
/// `adjustment_type` arrives as free text from the caller's form, so it is
/// matched explicitly; an unknown value is an error, never a no-op.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub adjustment_type: String,
    pub quantity: u32,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

/// Repository for `/inventory` (plus the central-inventory read paths)
pub struct Inventory {
    repo: Repository<InventoryPart>,
}

impl Inventory {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            repo: Repository::new(state, "inventory"),
        }
    }

    /// Parts below their minimum stock level
    pub async fn get_low_stock(&self) -> Result<Vec<InventoryPart>, Error> {
        self.repo.get_all_at("low-stock", &[]).await
    }

    /// Parts held in central inventory rather than at a service center
    pub async fn get_central_parts(&self) -> Result<Vec<InventoryPart>, Error> {
        let body = self
            .repo
            .get_value_at("central-inventory/parts", &[])
            .await?;
        normalize_list(body)
    }

    /// Apply a stock adjustment to one part.
    ///
    /// `add` goes straight to the add-stock endpoint. `remove` and `adjust`
    /// are validated against the part's allocated floor first and fail with
    /// `Error::Validation` before any request is made.
    pub async fn adjust_stock(
        &self,
        part: &InventoryPart,
        adjustment: &StockAdjustment,
    ) -> Result<InventoryPart, Error> {
        match adjustment.adjustment_type.as_str() {
            "add" => {
                let body = self
                    .repo
                    .post_value_at(&format!("inventory/parts/{}/add-stock", part.id), adjustment)
                    .await?;
                normalize_record(body)
            }
            "remove" => {
                let available = part.available();
                if adjustment.quantity > available {
                    return Err(Error::validation(format!(
                        "cannot remove {} units: only {} available ({} on hand, {} allocated)",
                        adjustment.quantity, available, part.current_qty, part.allocated
                    )));
                }
                let body = self
                    .repo
                    .post_value_at(
                        &format!("inventory/parts/{}/adjust-stock", part.id),
                        adjustment,
                    )
                    .await?;
                normalize_record(body)
            }
            "adjust" => {
                if adjustment.quantity < part.allocated {
                    return Err(Error::validation(format!(
                        "cannot set stock to {}: {} units are already allocated",
                        adjustment.quantity, part.allocated
                    )));
                }
                let body = self
                    .repo
                    .post_value_at(
                        &format!("inventory/parts/{}/adjust-stock", part.id),
                        adjustment,
                    )
                    .await?;
                normalize_record(body)
            }
            other => Err(Error::validation(format!(
                "unknown adjustment type: {}",
                other
            ))),
        }
    }
}

impl Deref for Inventory {
    type Target = Repository<InventoryPart>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AutocareClient;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn part(current_qty: u32, allocated: u32) -> InventoryPart {
        InventoryPart {
            id: "part-1".to_string(),
            name: "Brake Pad".to_string(),
            part_number: Some("BP-100".to_string()),
            current_qty,
            allocated,
            min_stock_level: Some(2),
            unit_price: Some(499.0),
            service_center_id: Some("sc-1".to_string()),
        }
    }

    fn adjustment(kind: &str, quantity: u32) -> StockAdjustment {
        StockAdjustment {
            adjustment_type: kind.to_string(),
            quantity,
            reason: "stock count".to_string(),
            notes: None,
            reference_number: None,
        }
    }

    // Failure cases point at an unmocked server: the validation must reject
    // locally, so no request is ever made.

    #[tokio::test]
    async fn remove_more_than_available_fails_locally() {
        let client = AutocareClient::new("http://127.0.0.1:1");
        let result = client
            .inventory()
            .adjust_stock(&part(10, 4), &adjustment("remove", 7))
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn remove_up_to_available_hits_adjust_endpoint() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inventory/parts/part-1/adjust-stock"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "part-1", "name": "Brake Pad", "currentQty": 4, "allocated": 4
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AutocareClient::new(&mock_server.uri());
        let updated = client
            .inventory()
            .adjust_stock(&part(10, 4), &adjustment("remove", 6))
            .await
            .unwrap();
        assert_eq!(updated.current_qty, 4);
    }

    #[tokio::test]
    async fn adjust_below_allocated_fails_locally() {
        let client = AutocareClient::new("http://127.0.0.1:1");
        let result = client
            .inventory()
            .adjust_stock(&part(10, 4), &adjustment("adjust", 3))
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn adjust_down_to_allocated_succeeds() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inventory/parts/part-1/adjust-stock"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "part-1", "name": "Brake Pad", "currentQty": 4, "allocated": 4
            })))
            .mount(&mock_server)
            .await;

        let client = AutocareClient::new(&mock_server.uri());
        let result = client
            .inventory()
            .adjust_stock(&part(10, 4), &adjustment("adjust", 4))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn add_uses_dedicated_endpoint() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/inventory/parts/part-1/add-stock"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "part-1", "name": "Brake Pad", "currentQty": 15, "allocated": 4
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = AutocareClient::new(&mock_server.uri());
        let updated = client
            .inventory()
            .adjust_stock(&part(10, 4), &adjustment("add", 5))
            .await
            .unwrap();
        assert_eq!(updated.current_qty, 15);
    }

    #[tokio::test]
    async fn unknown_adjustment_type_is_rejected() {
        let client = AutocareClient::new("http://127.0.0.1:1");
        let result = client
            .inventory()
            .adjust_stock(&part(10, 4), &adjustment("transmogrify", 1))
            .await;
        match result {
            Err(Error::Validation(msg)) => assert!(msg.contains("unknown adjustment type")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
