use crate::usecases::u501_order_lookup::OrderLookupWidget;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <OrderLookupWidget />
    }
}
