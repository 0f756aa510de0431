use contracts::usecases::u501_order_lookup::{parse_orders_body, LookupError};

use super::rows::{to_rows, OrderRow};
use crate::shared::config::OrdersApiConfig;
use crate::shared::notify::{Notifier, MSG_EMPTY_ORDER_ID, MSG_LOOKUP_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    Requesting,
}

/// A request the session has agreed to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub order_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Table replaced with this many rows
    Rendered(usize),
    /// Failure notified, table untouched
    Failed,
    /// A newer lookup was started; result dropped
    Superseded,
}

/// Состояние виджета поиска заказа.
///
/// Таблицу может изменить только последний выданный билет: при перекрывающихся
/// запросах побеждает последний запрошенный, а не последний пришедший ответ.
#[derive(Debug, Clone)]
pub struct LookupSession {
    config: OrdersApiConfig,
    generation: u64,
    pending: Option<u64>,
    rows: Vec<OrderRow>,
}

impl LookupSession {
    pub fn new(config: OrdersApiConfig) -> Self {
        Self {
            config,
            generation: 0,
            pending: None,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }

    pub fn phase(&self) -> LookupPhase {
        if self.pending.is_some() {
            LookupPhase::Requesting
        } else {
            LookupPhase::Idle
        }
    }

    /// Validate the raw input and, if it holds an order id, issue a ticket.
    ///
    /// Returns `None` after notifying the user when nothing should be sent.
    pub fn begin(&mut self, raw_input: &str, notifier: &dyn Notifier) -> Option<LookupTicket> {
        match self.prepare(raw_input) {
            Ok(ticket) => {
                self.generation = ticket.generation;
                self.pending = Some(ticket.generation);
                log::debug!("lookup #{} -> {}", ticket.generation, ticket.url);
                Some(ticket)
            }
            Err(LookupError::EmptyOrderId) => {
                notifier.notify(MSG_EMPTY_ORDER_ID);
                None
            }
            Err(e) => {
                log::warn!("cannot build order lookup request: {}", e);
                notifier.notify(MSG_LOOKUP_FAILED);
                None
            }
        }
    }

    fn prepare(&self, raw_input: &str) -> Result<LookupTicket, LookupError> {
        let order_id = raw_input.trim();
        if order_id.is_empty() {
            return Err(LookupError::EmptyOrderId);
        }
        let url = self.config.orders_url(order_id)?;
        Ok(LookupTicket {
            generation: self.generation + 1,
            order_id: order_id.to_string(),
            url,
        })
    }

    /// Apply the response for `ticket`.
    pub fn complete(
        &mut self,
        ticket: &LookupTicket,
        body: Result<String, LookupError>,
        notifier: &dyn Notifier,
    ) -> LookupOutcome {
        if self.pending != Some(ticket.generation) {
            log::debug!("lookup #{} superseded, result dropped", ticket.generation);
            return LookupOutcome::Superseded;
        }
        self.pending = None;

        match body.and_then(|b| parse_orders_body(&b)) {
            Ok(records) => {
                self.rows = to_rows(records);
                log::info!(
                    "lookup #{} for order {}: {} row(s)",
                    ticket.generation,
                    ticket.order_id,
                    self.rows.len()
                );
                LookupOutcome::Rendered(self.rows.len())
            }
            Err(e) => {
                log::warn!(
                    "lookup #{} for order {} failed: {}",
                    ticket.generation,
                    ticket.order_id,
                    e
                );
                notifier.notify(MSG_LOOKUP_FAILED);
                LookupOutcome::Failed
            }
        }
    }
}
