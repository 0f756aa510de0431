//! u501: Order lookup
//!
//! - rows.rs: table projection of order records
//! - model.rs: lookup session (validation, sequencing, table state)
//! - api.rs: order service request
//! - view_model.rs: signals and async wiring
//! - view.rs: Leptos component (pure UI)

mod api;
pub mod model;
pub mod rows;
mod view;
mod view_model;

pub use view::OrderLookupWidget;
