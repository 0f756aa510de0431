use serde::Serialize;

use super::error::LookupError;

/// Параметры запроса `GET /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderQuery {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

impl OrderQuery {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
        }
    }

    /// `orderId=<id>`, percent-encoded
    pub fn to_query_string(&self) -> Result<String, LookupError> {
        serde_qs::to_string(self).map_err(|e| LookupError::InvalidQuery(e.to_string()))
    }
}
