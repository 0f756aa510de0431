use thiserror::Error;

/// Ошибки поиска заказа.
///
/// `EmptyOrderId` обрабатывается локально, запрос не отправляется. Остальные
/// варианты означают сбой запроса: пользователь видит одно общее сообщение,
/// а конкретный вариант попадает только в лог.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("order id is empty")]
    EmptyOrderId,

    #[error("failed to build query string: {0}")]
    InvalidQuery(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("failed to parse response: {0}")]
    Payload(String),
}

impl LookupError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LookupError::EmptyOrderId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = LookupError::Status {
            status: 404,
            message: Some("order not found".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_only_empty_id_is_validation() {
        assert!(LookupError::EmptyOrderId.is_validation());
        assert!(!LookupError::Transport("offline".into()).is_validation());
        assert!(!LookupError::Payload("eof".into()).is_validation());
    }
}
