pub mod error;
pub mod request;
pub mod response;

pub use error::LookupError;
pub use request::OrderQuery;
pub use response::{parse_orders_body, OrdersPayload, ServiceMessage};

use crate::usecases::common::UseCaseMetadata;

pub struct OrderLookup;

impl UseCaseMetadata for OrderLookup {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "order_lookup"
    }

    fn display_name() -> &'static str {
        "Order lookup"
    }

    fn description() -> &'static str {
        "Look up orders by order code in the order service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(OrderLookup::full_name(), "u501_order_lookup");
    }
}
