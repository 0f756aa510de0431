use contracts::usecases::u501_order_lookup::{LookupError, ServiceMessage};
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// GET the orders URL and return the raw body of a 2xx response.
///
/// Parsing is left to the caller because the body may be a JSON array or a
/// JSON string holding that array.
pub async fn fetch_orders_body(
    url: &str,
    abort: Option<&AbortSignal>,
) -> Result<String, LookupError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    if !response.ok() {
        let service = ServiceMessage::from_body(&body);
        if let Some(msg) = &service {
            log::warn!(
                "order service answered {}: {}{}",
                status,
                msg.message,
                msg.error
                    .as_deref()
                    .map(|e| format!(" ({})", e))
                    .unwrap_or_default()
            );
        }
        return Err(LookupError::Status {
            status,
            message: service.map(|m| m.message),
        });
    }

    Ok(body)
}
