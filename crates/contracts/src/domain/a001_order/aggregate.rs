use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Order record
// ============================================================================

/// Заказ в том виде, в каком его отдаёт сервис заказов.
///
/// Поля не валидируются: любое JSON-значение превращается в текст ячейки,
/// `null` и отсутствующий ключ дают пустую строку.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "orderId", default, deserialize_with = "cell_text")]
    pub order_id: String,

    #[serde(rename = "customerName", default, deserialize_with = "cell_text")]
    pub customer_name: String,

    #[serde(rename = "customerEmail", default, deserialize_with = "cell_text")]
    pub customer_email: String,

    #[serde(default, deserialize_with = "cell_text")]
    pub status: String,

    #[serde(rename = "orderDate", default, deserialize_with = "cell_text")]
    pub order_date: String,

    #[serde(rename = "totalAmount", default, deserialize_with = "total_amount")]
    pub total_amount: Option<TotalAmount>,
}

impl OrderRecord {
    /// Total amount as display text, empty when the service omitted it
    pub fn total_amount_text(&self) -> String {
        self.total_amount
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

// ============================================================================
// Total amount
// ============================================================================

/// Сумма заказа: сервис присылает либо число, либо строку.
#[derive(Debug, Clone, PartialEq)]
pub enum TotalAmount {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TotalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalAmount::Number(n) => f.write_str(&number_text(n)),
            TotalAmount::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Lenient cell decoding
// ============================================================================

fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn total_amount<'de, D>(deserializer: D) -> Result<Option<TotalAmount>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(n) => Some(TotalAmount::Number(n)),
        other => Some(TotalAmount::Text(value_text(other))),
    })
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => number_text(&n),
        other => other.to_string(),
    }
}

/// Number text the way a browser prints it: `1e2` -> `100`, `5.0` -> `5`
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}
