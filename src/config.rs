//! Configuration options for the Autocare client

use std::time::Duration;

/// Configuration options for the Autocare client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout applied to every HTTP call
    pub request_timeout: Option<Duration>,

    /// GST rate (percent) stamped on invoice items at checkout
    pub default_gst_rate: u32,

    /// Display name assigned to customers created without a name
    pub walk_in_customer_name: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            default_gst_rate: 18,
            walk_in_customer_name: "Walk-in Customer".to_string(),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the GST rate used for checkout invoice items
    pub fn with_default_gst_rate(mut self, value: u32) -> Self {
        self.default_gst_rate = value;
        self
    }

    /// Set the name given to walk-in customers
    pub fn with_walk_in_customer_name(mut self, value: &str) -> Self {
        self.walk_in_customer_name = value.to_string();
        self
    }
}
