use thiserror::Error;

use crate::domain::booking::SessionId;
use crate::domain::service::ServiceCategory;

/// Failures surfaced by the negotiation desk. The first two arms are
/// caller-recoverable (resubmit corrected input or start a new preview);
/// `EmptyRoster` indicates a broken registry and is not.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeskError {
    #[error("message required")]
    EmptyMessage,
    #[error("invalid or expired session `{0}`")]
    UnknownSession(SessionId),
    #[error("no helpers registered for service `{}`", .service.key())]
    EmptyRoster { service: ServiceCategory },
}

impl DeskError {
    /// Whether the caller can recover by correcting the request.
    pub fn is_caller_recoverable(&self) -> bool {
        matches!(self, Self::EmptyMessage | Self::UnknownSession(_))
    }
}

#[cfg(test)]
mod tests {
    use super::DeskError;
    use crate::domain::booking::SessionId;
    use crate::domain::service::ServiceCategory;

    #[test]
    fn validation_and_session_errors_are_caller_recoverable() {
        assert!(DeskError::EmptyMessage.is_caller_recoverable());
        assert!(DeskError::UnknownSession(SessionId("s-1".to_owned())).is_caller_recoverable());
        assert!(!DeskError::EmptyRoster { service: ServiceCategory::Gardening }
            .is_caller_recoverable());
    }

    #[test]
    fn messages_never_leak_more_than_a_reason() {
        let error = DeskError::UnknownSession(SessionId("abc".to_owned()));
        assert_eq!(error.to_string(), "invalid or expired session `abc`");
        assert_eq!(
            DeskError::EmptyRoster { service: ServiceCategory::AcRepair }.to_string(),
            "no helpers registered for service `ac_repair`"
        );
    }
}
