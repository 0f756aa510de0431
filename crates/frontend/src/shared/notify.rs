use web_sys::window;

pub const MSG_EMPTY_ORDER_ID: &str = "Please enter the order code";
pub const MSG_LOOKUP_FAILED: &str = "Error looking up order!";

/// Blocking user notification
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// `window.alert()`; falls back to the log when there is no window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        match window() {
            Some(w) => {
                let _ = w.alert_with_message(message);
            }
            None => log::warn!("alert without window: {}", message),
        }
    }
}
