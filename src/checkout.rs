//! Over-the-counter checkout: the order/invoice reconciliation workflow.
//!
//! Given loose user input (a phone number, maybe a name, maybe a vehicle
//! registration, a cart), the workflow resolves or creates the customer,
//! resolves or creates the vehicle, assembles the invoice DTO and submits it.
//! The steps are strictly ordered and each network entity is created at most
//! once per checkout; there are no retries and no fallback entities.
//!
//! Error classification matters more than the happy path here: a permission
//! failure on a *search* means "could not confirm the record exists" and the
//! flow proceeds to create it, while a permission failure on a *create* is
//! fatal with a message telling the user to contact their administrator.

use crate::error::Error;
use crate::repository::ClientState;
use crate::resources::customers::{Customers, NewCustomer};
use crate::resources::invoices::{Invoice, InvoiceItem, Invoices, NewInvoice};
use crate::resources::vehicles::{NewVehicle, Vehicles};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, warn};

/// One cart line as captured at the counter. Value object; it has no
/// persistence identity until the invoice is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub hsn_sac_code: Option<String>,
}

/// Raw checkout input as the counter UI collects it
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub phone: String,
    pub customer_name: Option<String>,
    pub registration: Option<String>,
    pub vin: Option<String>,
    pub service_center_id: String,
    pub invoice_type: String,
    pub items: Vec<CartItem>,
}

/// Classified checkout failure. The caller leaves its cart and form state
/// untouched on any of these so the user can correct and resubmit.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Local validation failure; no network call was made for this step
    #[error("{0}")]
    Invalid(String),

    /// The backend refused customer creation for this user
    #[error("You do not have permission to create customers. Please contact your administrator.")]
    CustomerPermission,

    /// The backend refused vehicle creation for this user
    #[error("You do not have permission to create vehicles. Please contact your administrator.")]
    VehiclePermission,

    /// The backend reported a duplicate; surfaced verbatim, never retried
    #[error("{0}")]
    Conflict(String),

    /// Anything else; generic and retryable by the user
    #[error("Failed to {action}, please try again ({source})")]
    Failed { action: String, source: Error },
}

impl CheckoutError {
    fn failed(action: &str, source: Error) -> Self {
        CheckoutError::Failed {
            action: action.to_string(),
            source,
        }
    }
}

/// The kinds of synthetic identifier the workflow mints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Registration for a walk-in checkout with no vehicle registration given
    WalkInRegistration,
    /// VIN for a vehicle created without one
    Vin,
}

/// Mint a placeholder identifier. Single chokepoint for the uniqueness
/// strategy: currently wall-clock milliseconds, collision-prone under
/// concurrent load, and swappable for a UUID without touching call sites.
pub fn placeholder_identifier(kind: PlaceholderKind) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis();
    match kind {
        PlaceholderKind::WalkInRegistration => format!("WALK-IN-{}", millis),
        PlaceholderKind::Vin => format!("VIN-{}", millis),
    }
}

/// Strip separators from a phone number, keeping digits only
pub fn clean_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// The checkout workflow, bound to the repositories it orchestrates
pub struct Checkout {
    customers: Customers,
    vehicles: Vehicles,
    invoices: Invoices,
    walk_in_name: String,
    gst_rate: u32,
}

impl Checkout {
    pub(crate) fn new(state: Arc<ClientState>) -> Self {
        Self {
            walk_in_name: state.options.walk_in_customer_name.clone(),
            gst_rate: state.options.default_gst_rate,
            customers: Customers::new(Arc::clone(&state)),
            vehicles: Vehicles::new(Arc::clone(&state)),
            invoices: Invoices::new(state),
        }
    }

    /// Run the whole workflow. On success the caller resets its transient
    /// state (cart, customer form, payment selection); on failure nothing is
    /// reset.
    pub async fn run(&self, request: &CheckoutRequest) -> Result<Invoice, CheckoutError> {
        if request.items.is_empty() {
            return Err(CheckoutError::Invalid("cart is empty".to_string()));
        }
        let phone = clean_phone(&request.phone);
        if phone.len() < 10 {
            return Err(CheckoutError::Invalid(
                "phone number must have at least 10 digits".to_string(),
            ));
        }

        let customer_id = self
            .resolve_customer(&phone, request.customer_name.as_deref())
            .await?;
        debug!(customer_id = %customer_id, "customer resolved");

        let vehicle_id = self
            .resolve_vehicle(
                &customer_id,
                request.registration.as_deref(),
                request.vin.as_deref(),
            )
            .await?;
        debug!(vehicle_id = %vehicle_id, "vehicle resolved");

        let payload = self.build_invoice(request, customer_id, vehicle_id)?;
        match self.invoices.create(&payload).await {
            Ok(invoice) => Ok(invoice),
            Err(err) if err.is_conflict() => Err(CheckoutError::Conflict(err.human_message())),
            Err(err) => Err(CheckoutError::failed("create invoice", err)),
        }
    }

    /// Resolve the customer id: phone search, then name search, then create.
    async fn resolve_customer(
        &self,
        phone: &str,
        name: Option<&str>,
    ) -> Result<String, CheckoutError> {
        match self.customers.search_by_phone(phone).await {
            Ok(matches) => {
                if let Some(customer) = matches.into_iter().next() {
                    return Ok(customer.id);
                }
            }
            Err(err) if err.is_permission() => {
                warn!("customer search denied; proceeding as if no match");
            }
            Err(err) => return Err(CheckoutError::failed("look up customer", err)),
        }

        // Name search only for a real name: many walk-in records share the
        // default name, and matching against them would bind the wrong id.
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        if let Some(name) = name {
            if !name.eq_ignore_ascii_case(&self.walk_in_name) {
                match self.customers.search_by_name(name).await {
                    Ok(matches) if !matches.is_empty() => {
                        let chosen = matches
                            .iter()
                            .find(|c| {
                                c.phone
                                    .as_deref()
                                    .is_some_and(|p| clean_phone(p) == phone)
                            })
                            .unwrap_or(&matches[0]);
                        return Ok(chosen.id.clone());
                    }
                    Ok(_) => {}
                    Err(err) if err.is_permission() => {
                        warn!("customer name search denied; proceeding as if no match");
                    }
                    Err(err) => return Err(CheckoutError::failed("look up customer", err)),
                }
            }
        }

        let payload = NewCustomer {
            name: name.unwrap_or(self.walk_in_name.as_str()).to_string(),
            phone: phone.to_string(),
            email: None,
        };
        match self.customers.create(&payload).await {
            Ok(customer) => Ok(customer.id),
            Err(err) if err.is_permission() => Err(CheckoutError::CustomerPermission),
            Err(err) if err.is_conflict() => Err(CheckoutError::Conflict(err.human_message())),
            Err(err) => Err(CheckoutError::failed("create customer", err)),
        }
    }

    /// Resolve the vehicle id under the already-resolved customer.
    ///
    /// A failing registration search does not abort the flow: "can't confirm
    /// it doesn't exist" and "doesn't exist" both fall through to creation.
    /// No registration at all always creates a fresh walk-in vehicle row.
    async fn resolve_vehicle(
        &self,
        customer_id: &str,
        registration: Option<&str>,
        vin: Option<&str>,
    ) -> Result<String, CheckoutError> {
        let registration = registration.map(str::trim).filter(|r| !r.is_empty());

        let registration = match registration {
            Some(reg) => {
                match self.vehicles.search_by_registration(reg).await {
                    Ok(Some(vehicle)) => return Ok(vehicle.id),
                    Ok(None) => {}
                    Err(err) if err.is_permission() => {
                        warn!("vehicle search denied; falling through to creation");
                    }
                    Err(err) => return Err(CheckoutError::failed("look up vehicle", err)),
                }
                reg.to_string()
            }
            None => placeholder_identifier(PlaceholderKind::WalkInRegistration),
        };

        let vin = vin
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| placeholder_identifier(PlaceholderKind::Vin));

        let payload = NewVehicle {
            registration,
            vin,
            customer_id: customer_id.to_string(),
            make: "Unknown".to_string(),
            model: "Unknown".to_string(),
            year: None,
        };
        match self.vehicles.create(&payload).await {
            Ok(vehicle) => Ok(vehicle.id),
            Err(err) if err.is_permission() => Err(CheckoutError::VehiclePermission),
            Err(err) if err.is_conflict() => Err(CheckoutError::Conflict(err.human_message())),
            Err(err) => Err(CheckoutError::failed("create vehicle", err)),
        }
    }

    /// Map the cart to the invoice DTO and validate its preconditions
    fn build_invoice(
        &self,
        request: &CheckoutRequest,
        customer_id: String,
        vehicle_id: String,
    ) -> Result<NewInvoice, CheckoutError> {
        let items: Vec<InvoiceItem> = request
            .items
            .iter()
            .map(|item| InvoiceItem {
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                gst_rate: self.gst_rate,
                // blank HSN is omitted entirely, never sent as ""
                hsn_sac_code: item
                    .hsn_sac_code
                    .as_deref()
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(str::to_string),
            })
            .collect();

        if items.is_empty() {
            return Err(CheckoutError::Invalid("cart is empty".to_string()));
        }
        if request.service_center_id.trim().is_empty() {
            return Err(CheckoutError::Invalid(
                "service center is required".to_string(),
            ));
        }
        if customer_id.is_empty() || vehicle_id.is_empty() {
            return Err(CheckoutError::Invalid(
                "customer and vehicle must be resolved before invoicing".to_string(),
            ));
        }

        Ok(NewInvoice {
            service_center_id: request.service_center_id.clone(),
            customer_id,
            vehicle_id,
            invoice_type: request.invoice_type.clone(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_phone_strips_separators() {
        assert_eq!(clean_phone("+91 98765-43210"), "919876543210");
        assert_eq!(clean_phone("(987) 654 3210"), "9876543210");
        assert_eq!(clean_phone("abc"), "");
    }

    #[test]
    fn placeholder_identifiers_have_expected_shape() {
        let reg = placeholder_identifier(PlaceholderKind::WalkInRegistration);
        let vin = placeholder_identifier(PlaceholderKind::Vin);
        let reg_suffix = reg.strip_prefix("WALK-IN-").unwrap();
        let vin_suffix = vin.strip_prefix("VIN-").unwrap();
        assert!(!reg_suffix.is_empty() && reg_suffix.chars().all(|c| c.is_ascii_digit()));
        assert!(!vin_suffix.is_empty() && vin_suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
