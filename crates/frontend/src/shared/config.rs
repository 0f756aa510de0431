//! Order service address.
//!
//! Resolved once per widget: a `localStorage` override wins, then the
//! `ORDERS_API_BASE` value baked in at build time, then the production address.

use contracts::usecases::u501_order_lookup::{LookupError, OrderQuery};
use web_sys::window;

const DEFAULT_ORDERS_API_BASE: &str =
    "https://ygvabeqe2g.execute-api.us-east-2.amazonaws.com/prod";
const ORDERS_API_BASE_KEY: &str = "orders_api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersApiConfig {
    base_url: String,
}

impl OrdersApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_environment() -> Self {
        if let Some(base) = stored_override() {
            log::info!("orders API base overridden from localStorage: {}", base);
            return Self::new(base);
        }
        Self::new(option_env!("ORDERS_API_BASE").unwrap_or(DEFAULT_ORDERS_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/orders?orderId={id}`
    pub fn orders_url(&self, order_id: &str) -> Result<String, LookupError> {
        let query = OrderQuery::new(order_id).to_query_string()?;
        Ok(format!("{}/orders?{}", self.base_url, query))
    }
}

impl Default for OrdersApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ORDERS_API_BASE)
    }
}

fn stored_override() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    let value = storage.get_item(ORDERS_API_BASE_KEY).ok()??;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
