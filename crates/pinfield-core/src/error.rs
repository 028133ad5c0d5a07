//! Errors raised by the core primitives.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The id was never issued by this signal, or was already disconnected.
    #[error("connection id is not connected")]
    InvalidConnection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_error_message() {
        assert_eq!(
            SignalError::InvalidConnection.to_string(),
            "connection id is not connected"
        );
    }
}
