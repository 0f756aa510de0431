use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_order_lookup::OrderLookup;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use super::api;
use super::model::{LookupOutcome, LookupPhase, LookupSession};
use super::rows::OrderRow;
use crate::shared::config::OrdersApiConfig;
use crate::shared::notify::BrowserAlert;

/// ViewModel for the order lookup widget
#[derive(Clone, Copy)]
pub struct OrderLookupViewModel {
    pub input: RwSignal<String>,
    pub rows: RwSignal<Vec<OrderRow>>,
    pub phase: RwSignal<LookupPhase>,
    session: StoredValue<LookupSession>,
    in_flight: StoredValue<Option<AbortController>, LocalStorage>,
}

impl OrderLookupViewModel {
    pub fn new(config: OrdersApiConfig) -> Self {
        log::debug!("{} against {}", OrderLookup::full_name(), config.base_url());
        Self {
            input: RwSignal::new(String::new()),
            rows: RwSignal::new(Vec::new()),
            phase: RwSignal::new(LookupPhase::Idle),
            session: StoredValue::new(LookupSession::new(config)),
            in_flight: StoredValue::new_local(None),
        }
    }

    /// Read the input, then fetch and render.
    ///
    /// A lookup started while another is in flight aborts the older request.
    pub fn lookup_command(&self) {
        let raw = self.input.get_untracked();
        let Some(ticket) = self
            .session
            .try_update_value(|s| s.begin(&raw, &BrowserAlert))
            .flatten()
        else {
            return;
        };
        self.phase.set(LookupPhase::Requesting);

        let controller = AbortController::new().ok();
        let abort_signal = controller.as_ref().map(AbortController::signal);
        let previous = self
            .in_flight
            .try_update_value(|slot| std::mem::replace(slot, controller))
            .flatten();
        if let Some(previous) = previous {
            previous.abort();
        }

        let vm = *self;
        spawn_local(async move {
            let body = api::fetch_orders_body(&ticket.url, abort_signal.as_ref()).await;
            let outcome = vm
                .session
                .try_update_value(|s| s.complete(&ticket, body, &BrowserAlert));

            match outcome {
                Some(LookupOutcome::Rendered(_)) | Some(LookupOutcome::Failed) => {
                    vm.in_flight.set_value(None);
                    vm.sync();
                }
                Some(LookupOutcome::Superseded) | None => {}
            }
        });
    }

    fn sync(&self) {
        if let Some((rows, phase)) = self
            .session
            .try_with_value(|s| (s.rows().to_vec(), s.phase()))
        {
            self.rows.set(rows);
            self.phase.set(phase);
        }
    }
}
