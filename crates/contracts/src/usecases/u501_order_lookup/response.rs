use serde::Deserialize;

use super::error::LookupError;
use crate::domain::a001_order::OrderRecord;

/// Тело успешного ответа сервиса заказов.
///
/// В зависимости от настройки шлюза сервис отвечает либо самим массивом,
/// либо этим массивом, закодированным в JSON-строку.
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersPayload {
    Records(Vec<OrderRecord>),
    Encoded(String),
}

impl OrdersPayload {
    /// Recognise the body shape; an array is tried first, then a string.
    ///
    /// When neither matches, the error from the array attempt is reported,
    /// since that is the shape the service normally sends.
    pub fn from_body(body: &str) -> Result<Self, LookupError> {
        match serde_json::from_str::<Vec<OrderRecord>>(body) {
            Ok(records) => Ok(OrdersPayload::Records(records)),
            Err(array_err) => match serde_json::from_str::<String>(body) {
                Ok(text) => Ok(OrdersPayload::Encoded(text)),
                Err(_) => Err(LookupError::Payload(array_err.to_string())),
            },
        }
    }

    /// Collapse both shapes into the canonical list of records
    pub fn normalize(self) -> Result<Vec<OrderRecord>, LookupError> {
        match self {
            OrdersPayload::Records(records) => Ok(records),
            OrdersPayload::Encoded(text) => serde_json::from_str::<Vec<OrderRecord>>(&text)
                .map_err(|e| LookupError::Payload(format!("encoded payload: {}", e))),
        }
    }
}

/// Parse a raw response body into records, accepting either payload shape
pub fn parse_orders_body(body: &str) -> Result<Vec<OrderRecord>, LookupError> {
    OrdersPayload::from_body(body)?.normalize()
}

/// Сообщение об ошибке от сервиса (400 / 404 / 500)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServiceMessage {
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_array() -> serde_json::Value {
        json!([
            {
                "orderId": "12345",
                "customerName": "Ana",
                "customerEmail": "ana@x.com",
                "status": "shipped",
                "orderDate": "2024-01-01",
                "totalAmount": 99.9
            },
            {
                "orderId": "12345",
                "customerName": "Ana",
                "customerEmail": "ana@x.com",
                "status": "pending",
                "orderDate": "2024-02-10",
                "totalAmount": "15.50"
            }
        ])
    }

    #[test]
    fn test_native_array() {
        let body = sample_array().to_string();
        let records = parse_orders_body(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, "shipped");
        assert_eq!(records[1].total_amount_text(), "15.50");
    }

    #[test]
    fn test_shape_detection() {
        let native = sample_array().to_string();
        let encoded = serde_json::Value::String(native.clone()).to_string();

        assert!(matches!(
            OrdersPayload::from_body(&native).unwrap(),
            OrdersPayload::Records(_)
        ));
        assert!(matches!(
            OrdersPayload::from_body(&encoded).unwrap(),
            OrdersPayload::Encoded(_)
        ));
    }

    #[test]
    fn test_encoded_string_matches_native_array() {
        let native = sample_array().to_string();
        let encoded = serde_json::Value::String(native.clone()).to_string();
        assert!(encoded.starts_with('"'));

        assert_eq!(
            parse_orders_body(&encoded).unwrap(),
            parse_orders_body(&native).unwrap()
        );
    }

    #[test]
    fn test_null_and_numeric_fields_still_parse() {
        let records =
            parse_orders_body(r#"[{"orderId":"1","customerName":null,"totalAmount":10}]"#).unwrap();
        assert_eq!(records[0].customer_name, "");
        assert_eq!(records[0].total_amount_text(), "10");

        let records = parse_orders_body(r#"[{"orderId":12345,"status":null}]"#).unwrap();
        assert_eq!(records[0].order_id, "12345");
        assert_eq!(records[0].status, "");
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_orders_body("[]").unwrap().is_empty());
        assert!(parse_orders_body("\"[]\"").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_payload_error() {
        let err = parse_orders_body("[{\"orderId\": ").unwrap_err();
        assert!(matches!(err, LookupError::Payload(_)));
    }

    #[test]
    fn test_payload_error_keeps_serde_position() {
        let LookupError::Payload(text) = parse_orders_body("[{\"orderId\": ").unwrap_err() else {
            panic!("expected payload error");
        };
        assert!(text.contains("line 1"), "{}", text);
        assert!(!text.contains("did not match any variant"), "{}", text);
    }

    #[test]
    fn test_object_body_is_payload_error() {
        let err = parse_orders_body(r#"{"message": "order not found"}"#).unwrap_err();
        assert!(matches!(err, LookupError::Payload(_)));
    }

    #[test]
    fn test_encoded_string_that_is_not_an_array() {
        let err = parse_orders_body(r#""not json at all""#).unwrap_err();
        assert!(matches!(err, LookupError::Payload(ref m) if m.starts_with("encoded payload")));
    }

    #[test]
    fn test_service_message() {
        let msg = ServiceMessage::from_body(
            r#"{"message": "storage unavailable", "error": "ProvisionedThroughputExceeded"}"#,
        )
        .unwrap();
        assert_eq!(msg.message, "storage unavailable");
        assert_eq!(msg.error.as_deref(), Some("ProvisionedThroughputExceeded"));

        assert!(ServiceMessage::from_body("<html>bad gateway</html>").is_none());
    }
}
