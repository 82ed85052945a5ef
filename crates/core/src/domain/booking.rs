use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::helper::HelperSnapshot;
use crate::domain::service::{AreaSize, ServiceCategory, UrgencyLevel};

/// Opaque token naming one in-flight negotiation. Unrelated to user
/// identity; a fresh one is minted per preview and never reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable ledger identifier in the "BK<number>" form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub String);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// An uncommitted booking draft held in the session store. Price and ETA
/// must stay consistent with the (service, area_size, priority) triple:
/// any mutation of those fields recomputes both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingProposal {
    pub service: String,
    pub service_key: ServiceCategory,
    pub area: String,
    pub area_size: AreaSize,
    pub priority: UrgencyLevel,
    pub helper: HelperSnapshot,
    pub eta: String,
    pub price_estimate: String,
    pub price_value: i64,
    pub suggestions: Vec<String>,
    pub user_id: String,
}

/// A finalized booking. Append-only once in the ledger; never mutated or
/// deleted for the process lifetime. Mirrors the confirmation wire shape,
/// which drops area_size, price_value and suggestions from the proposal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedBooking {
    pub booking_id: BookingId,
    pub user_id: String,
    pub service: String,
    pub service_key: ServiceCategory,
    pub area: String,
    pub priority: UrgencyLevel,
    pub helper: HelperSnapshot,
    pub eta: String,
    pub status: BookingStatus,
    pub price_estimate: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{BookingStatus, SessionId};

    #[test]
    fn session_ids_are_unique_per_generation() {
        let first = SessionId::generate();
        let second = SessionId::generate();
        assert_ne!(first, second);
    }

    #[test]
    fn status_serializes_as_display_label() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).expect("serialize"),
            "\"Confirmed\""
        );
        assert_eq!(
            serde_json::to_string(&BookingStatus::InProgress).expect("serialize"),
            "\"In Progress\""
        );
        assert_eq!(BookingStatus::InProgress.label(), "In Progress");
    }
}
