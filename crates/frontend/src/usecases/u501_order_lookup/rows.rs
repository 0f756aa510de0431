use contracts::domain::a001_order::OrderRecord;

pub const ORDER_COLUMNS: [&str; 6] = [
    "Order ID",
    "Customer Name",
    "Customer Email",
    "Status",
    "Order Date",
    "Total Amount",
];

/// Одна строка таблицы результатов
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRow {
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: String,
    pub order_date: String,
    pub total_amount: String,
}

impl OrderRow {
    /// Cells in `ORDER_COLUMNS` order
    pub fn cells(&self) -> [String; 6] {
        [
            self.order_id.clone(),
            self.customer_name.clone(),
            self.customer_email.clone(),
            self.status.clone(),
            self.order_date.clone(),
            self.total_amount.clone(),
        ]
    }
}

impl From<OrderRecord> for OrderRow {
    fn from(o: OrderRecord) -> Self {
        let total_amount = o.total_amount_text();
        Self {
            order_id: o.order_id,
            customer_name: o.customer_name,
            customer_email: o.customer_email,
            status: o.status,
            order_date: o.order_date,
            total_amount,
        }
    }
}

pub fn to_rows(records: Vec<OrderRecord>) -> Vec<OrderRow> {
    records.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::TotalAmount;

    #[test]
    fn test_cells_follow_column_order() {
        let record = OrderRecord {
            order_id: "12345".into(),
            customer_name: "Ana".into(),
            customer_email: "ana@x.com".into(),
            status: "shipped".into(),
            order_date: "2024-01-01".into(),
            total_amount: Some(TotalAmount::Text("99.9".into())),
        };

        let row = OrderRow::from(record);
        assert_eq!(
            row.cells(),
            ["12345", "Ana", "ana@x.com", "shipped", "2024-01-01", "99.9"].map(String::from)
        );
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let record = OrderRecord {
            customer_name: "<b>Ana</b>".into(),
            ..Default::default()
        };
        assert_eq!(OrderRow::from(record).customer_name, "<b>Ana</b>");
    }
}
