use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_order_lookup::OrderLookup;
use leptos::prelude::*;

use super::model::LookupPhase;
use super::rows::ORDER_COLUMNS;
use super::view_model::OrderLookupViewModel;
use crate::shared::config::OrdersApiConfig;

#[component]
pub fn OrderLookupWidget(
    /// Order service address; resolved from the environment when omitted
    #[prop(optional)]
    config: Option<OrdersApiConfig>,
) -> impl IntoView {
    let vm = OrderLookupViewModel::new(config.unwrap_or_else(OrdersApiConfig::from_environment));

    view! {
        <div id="u501_order_lookup--usecase" class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{OrderLookup::display_name()}</h1>
                    <p class="header__subtitle">{OrderLookup::description()}</p>
                </div>
            </div>

            <div class="form__group">
                <label class="form__label" for="order_id">"Order code"</label>
                <input
                    id="order_id"
                    type="text"
                    class="form__input"
                    prop:value=move || vm.input.get()
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            vm.lookup_command();
                        }
                    }
                />
                <button
                    id="lookup_order"
                    class="button button--primary"
                    on:click=move |_| vm.lookup_command()
                >
                    "Look up order"
                </button>
                <Show when=move || vm.phase.get() == LookupPhase::Requesting>
                    <span class="form__hint">"Loading…"</span>
                </Show>
            </div>

            <div class="table">
                <table id="orderDetails" class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {ORDER_COLUMNS
                                .iter()
                                .map(|title| view! { <th class="table__header-cell">{*title}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        // Text nodes: Leptos escapes whatever the service sends
                        {move || vm.rows.get().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    {row.cells()
                                        .into_iter()
                                        .map(|cell| view! { <td class="table__cell">{cell}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
