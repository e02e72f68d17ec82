//! Autocare Rust Client Library
//!
//! A typed HTTP client for the Autocare service-center REST API: job cards,
//! vehicles, customers, inventory, purchase orders, parts issues, invoices,
//! quotations, service centers, users, appointments, leads and audit logs,
//! plus the over-the-counter checkout workflow that reconciles loose counter
//! input into a submitted invoice.
//!
//! The backend is the system of record; this client holds no cache and does
//! no retries. Every repository call is a fresh round trip and every failure
//! is surfaced to the caller, classified where the workflow needs it.

pub mod auth;
pub mod capabilities;
pub mod checkout;
pub mod config;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod repository;
pub mod resources;

use reqwest::Client;
use std::sync::Arc;

use crate::auth::TokenStore;
use crate::checkout::Checkout;
use crate::config::ClientOptions;
use crate::repository::ClientState;
use crate::resources::{
    Appointments, AuditLogs, Customers, Inventory, Invoices, JobCards, Leads, PartsIssues,
    PurchaseOrders, Quotations, ServiceCenters, Users, Vehicles,
};

/// The main entry point for the Autocare Rust client
pub struct AutocareClient {
    state: Arc<ClientState>,
}

impl AutocareClient {
    /// Create a new client against an API base URL
    ///
    /// # Example
    ///
    /// ```
    /// use autocare_client::AutocareClient;
    ///
    /// let client = AutocareClient::new("https://api.autocare.example");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, TokenStore::new(), ClientOptions::default())
    }

    /// Create a new client with an injected token store and custom options
    ///
    /// # Example
    ///
    /// ```
    /// use autocare_client::{AutocareClient, auth::TokenStore, config::ClientOptions};
    ///
    /// let tokens = TokenStore::with_token("session-token");
    /// let options = ClientOptions::default().with_default_gst_rate(18);
    /// let client = AutocareClient::new_with_options("https://api.autocare.example", tokens, options);
    /// ```
    pub fn new_with_options(base_url: &str, tokens: TokenStore, options: ClientOptions) -> Self {
        let state = ClientState {
            base_url: base_url.to_string(),
            http_client: Client::new(),
            tokens,
            options,
        };
        Self {
            state: Arc::new(state),
        }
    }

    /// The token store this client authenticates with
    pub fn tokens(&self) -> &TokenStore {
        &self.state.tokens
    }

    /// Repository for workshop job cards
    pub fn job_cards(&self) -> JobCards {
        JobCards::new(Arc::clone(&self.state))
    }

    /// Repository for vehicles
    pub fn vehicles(&self) -> Vehicles {
        Vehicles::new(Arc::clone(&self.state))
    }

    /// Repository for customers
    pub fn customers(&self) -> Customers {
        Customers::new(Arc::clone(&self.state))
    }

    /// Repository for inventory parts and stock adjustment
    pub fn inventory(&self) -> Inventory {
        Inventory::new(Arc::clone(&self.state))
    }

    /// Repository for purchase orders
    pub fn purchase_orders(&self) -> PurchaseOrders {
        PurchaseOrders::new(Arc::clone(&self.state))
    }

    /// Repository for parts issues
    pub fn parts_issues(&self) -> PartsIssues {
        PartsIssues::new(Arc::clone(&self.state))
    }

    /// Repository for invoices
    pub fn invoices(&self) -> Invoices {
        Invoices::new(Arc::clone(&self.state))
    }

    /// Repository for quotations
    pub fn quotations(&self) -> Quotations {
        Quotations::new(Arc::clone(&self.state))
    }

    /// Repository for service centers
    pub fn service_centers(&self) -> ServiceCenters {
        ServiceCenters::new(Arc::clone(&self.state))
    }

    /// Repository for users
    pub fn users(&self) -> Users {
        Users::new(Arc::clone(&self.state))
    }

    /// Repository for appointments
    pub fn appointments(&self) -> Appointments {
        Appointments::new(Arc::clone(&self.state))
    }

    /// Repository for sales leads
    pub fn leads(&self) -> Leads {
        Leads::new(Arc::clone(&self.state))
    }

    /// Repository for the audit trail
    pub fn audit_logs(&self) -> AuditLogs {
        AuditLogs::new(Arc::clone(&self.state))
    }

    /// The over-the-counter checkout workflow
    ///
    /// # Example
    ///
    /// ```
    /// use autocare_client::AutocareClient;
    ///
    /// let client = AutocareClient::new("https://api.autocare.example");
    /// let checkout = client.checkout();
    /// ```
    pub fn checkout(&self) -> Checkout {
        Checkout::new(Arc::clone(&self.state))
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::TokenStore;
    pub use crate::checkout::{CartItem, Checkout, CheckoutError, CheckoutRequest};
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::AutocareClient;
}
