//! The negotiation desk: owns the pricing tables, the workforce registry,
//! the session store and the confirmed-booking ledger, and drives the
//! preview -> modify -> confirm lifecycle over them. Handlers receive a
//! shared desk instead of touching ambient globals, so every test can
//! spin up a fresh one.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::catalog::PriceBook;
use crate::domain::booking::{BookingProposal, BookingStatus, ConfirmedBooking, SessionId};
use crate::engine;
use crate::errors::DeskError;
use crate::interpret;
use crate::ledger::BookingLedger;
use crate::session::SessionStore;
use crate::workforce::WorkforceRegistry;

pub struct BookingDesk {
    price_book: PriceBook,
    workforce: WorkforceRegistry,
    sessions: SessionStore,
    ledger: BookingLedger,
    currency_symbol: String,
}

impl BookingDesk {
    pub fn new(price_book: PriceBook, currency_symbol: impl Into<String>) -> Self {
        Self {
            price_book,
            workforce: WorkforceRegistry::default(),
            sessions: SessionStore::default(),
            ledger: BookingLedger::new(),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn with_workforce(mut self, workforce: WorkforceRegistry) -> Self {
        self.workforce = workforce;
        self
    }

    /// Classifies the message, prices and staffs the job, and parks the
    /// resulting proposal under a fresh session id. A blank message is a
    /// validation error; an unrecognized one falls back to a general
    /// cleaning intent instead.
    pub fn preview<R: Rng>(
        &self,
        message: &str,
        user_id: Option<&str>,
        rng: &mut R,
    ) -> Result<(SessionId, BookingProposal), DeskError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DeskError::EmptyMessage);
        }

        let intent = interpret::classify(message);
        let price =
            engine::quote_price(&self.price_book, intent.service, intent.area_size, intent.urgency);
        let helper = engine::select_helper(&self.workforce, intent.service, intent.urgency, rng)
            .ok_or(DeskError::EmptyRoster { service: intent.service })?;
        let eta = engine::estimate_eta(intent.urgency, rng);
        let suggestions = engine::build_suggestions(
            &self.workforce,
            intent.service,
            intent.urgency,
            price,
            &self.currency_symbol,
        );

        let proposal = BookingProposal {
            service: intent.service_name,
            service_key: intent.service,
            area: intent.area,
            area_size: intent.area_size,
            priority: intent.urgency,
            helper: helper.snapshot(),
            eta: eta.to_string(),
            price_estimate: engine::format_price(&self.currency_symbol, price),
            price_value: price,
            suggestions,
            user_id: user_id.map(str::to_owned).unwrap_or_else(|| Uuid::new_v4().to_string()),
        };

        let session_id = self.sessions.insert(proposal.clone());
        Ok((session_id, proposal))
    }

    /// Interprets a free-text instruction against the stored proposal.
    /// An urgency keyword re-tiers the job and recomputes ETA and price;
    /// a helper keyword reassigns at the (possibly updated) priority;
    /// suggestions are always refreshed. Service and area never change.
    pub fn modify<R: Rng>(
        &self,
        session_id: &SessionId,
        instruction: &str,
        rng: &mut R,
    ) -> Result<BookingProposal, DeskError> {
        self.sessions
            .with_session(session_id, |proposal| {
                if let Some(urgency) = interpret::modification_urgency(instruction) {
                    proposal.priority = urgency;
                    proposal.eta = engine::estimate_eta(urgency, rng).to_string();
                    let price = engine::quote_price(
                        &self.price_book,
                        proposal.service_key,
                        proposal.area_size,
                        urgency,
                    );
                    proposal.price_value = price;
                    proposal.price_estimate = engine::format_price(&self.currency_symbol, price);
                }

                if interpret::wants_new_helper(instruction) {
                    if let Some(helper) = engine::select_helper(
                        &self.workforce,
                        proposal.service_key,
                        proposal.priority,
                        rng,
                    ) {
                        proposal.helper = helper.snapshot();
                    }
                }

                proposal.suggestions = engine::build_suggestions(
                    &self.workforce,
                    proposal.service_key,
                    proposal.priority,
                    proposal.price_value,
                    &self.currency_symbol,
                );

                proposal.clone()
            })
            .ok_or_else(|| DeskError::UnknownSession(session_id.clone()))
    }

    /// Consumes the session and appends the finalized booking to the
    /// ledger. The session lookup happens before any id allocation, so a
    /// failed confirm leaves no partial state and a session can never be
    /// confirmed twice.
    pub fn confirm(&self, session_id: &SessionId) -> Result<ConfirmedBooking, DeskError> {
        let proposal = self
            .sessions
            .take(session_id)
            .ok_or_else(|| DeskError::UnknownSession(session_id.clone()))?;

        let record = self.ledger.append_with_next_id(|booking_id| ConfirmedBooking {
            booking_id,
            user_id: proposal.user_id.clone(),
            service: proposal.service.clone(),
            service_key: proposal.service_key,
            area: proposal.area.clone(),
            priority: proposal.priority,
            helper: proposal.helper.clone(),
            eta: proposal.eta.clone(),
            status: BookingStatus::Confirmed,
            price_estimate: proposal.price_estimate.clone(),
            created_at: Utc::now(),
        });

        Ok(record)
    }

    /// Confirmed history in insertion order plus its count.
    pub fn bookings(&self) -> (usize, Vec<ConfirmedBooking>) {
        self.ledger.list_all()
    }

    pub fn total_bookings(&self) -> usize {
        self.ledger.total()
    }

    /// Live (not yet confirmed) negotiation count.
    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new(PriceBook::default(), "₹")
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::BookingDesk;
    use crate::domain::booking::{BookingStatus, SessionId};
    use crate::domain::service::{AreaSize, ServiceCategory, UrgencyLevel};
    use crate::engine::eta_window;
    use crate::errors::DeskError;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn eta_minutes(eta: &str) -> u32 {
        let mut parts = eta.split_whitespace();
        let value: u32 = parts.next().and_then(|v| v.parse().ok()).expect("numeric eta");
        match parts.next() {
            Some("minutes") => value,
            _ => value * 60,
        }
    }

    #[test]
    fn preview_prices_and_staffs_an_urgent_plumbing_message() {
        let desk = BookingDesk::default();
        let (session_id, preview) = desk
            .preview("urgent plumbing leak in kitchen", Some("u-42"), &mut seeded())
            .expect("preview");

        assert_eq!(preview.service_key, ServiceCategory::Plumbing);
        assert_eq!(preview.service, "Plumbing Service");
        assert_eq!(preview.area, "Kitchen");
        assert_eq!(preview.area_size, AreaSize::Medium);
        assert_eq!(preview.priority, UrgencyLevel::Urgent);
        assert_eq!(preview.price_value, 1450);
        assert_eq!(preview.price_estimate, "₹1450");
        // Urgent jobs get the top-rated plumber.
        assert_eq!(preview.helper.id, "H005");
        let minutes = eta_minutes(&preview.eta);
        assert!((10..=20).contains(&minutes), "urgent eta out of range: {}", preview.eta);
        assert_eq!(preview.user_id, "u-42");
        assert_eq!(desk.open_sessions(), 1);
        assert!(!session_id.0.is_empty());
    }

    #[test]
    fn blank_message_is_rejected_before_any_session_is_created() {
        let desk = BookingDesk::default();
        let error = desk.preview("   ", None, &mut seeded()).expect_err("blank message");
        assert_eq!(error, DeskError::EmptyMessage);
        assert_eq!(desk.open_sessions(), 0);
    }

    #[test]
    fn missing_user_id_is_generated() {
        let desk = BookingDesk::default();
        let (_, preview) = desk.preview("clean my room", None, &mut seeded()).expect("preview");
        assert!(!preview.user_id.is_empty());
    }

    #[test]
    fn repeated_previews_never_collide() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        let (first, _) = desk.preview("clean my room", Some("u-1"), &mut rng).expect("preview");
        let (second, _) = desk.preview("clean my room", Some("u-1"), &mut rng).expect("preview");

        assert_ne!(first, second);
        assert_eq!(desk.open_sessions(), 2);
    }

    #[test]
    fn modify_to_urgent_recomputes_price_and_eta() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        let (session_id, preview) =
            desk.preview("plumbing leak in kitchen", Some("u-1"), &mut rng).expect("preview");
        assert_eq!(preview.priority, UrgencyLevel::Normal);
        assert_eq!(preview.price_value, 950); // 800 * 1.2 -> 960 -> nearest 50

        let updated = desk.modify(&session_id, "make it urgent", &mut rng).expect("modify");
        assert_eq!(updated.priority, UrgencyLevel::Urgent);
        assert_eq!(updated.price_value, 1450);
        assert_eq!(updated.price_estimate, "₹1450");
        let minutes = eta_minutes(&updated.eta);
        let (low, high) = eta_window(UrgencyLevel::Urgent);
        assert!((low..=high).contains(&minutes), "eta not re-tiered: {}", updated.eta);
        // Session stays live in the previewed state.
        assert_eq!(desk.open_sessions(), 1);
    }

    #[test]
    fn unrelated_modification_leaves_the_proposal_alone() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        let (session_id, before) =
            desk.preview("paint the bedroom wall", Some("u-1"), &mut rng).expect("preview");

        let after = desk.modify(&session_id, "add a note for the guard", &mut rng).expect("modify");
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.price_value, before.price_value);
        assert_eq!(after.service_key, before.service_key);
        assert_eq!(after.area, before.area);
        assert_eq!(after.helper, before.helper);
        let (low, high) = eta_window(before.priority);
        assert!((low..=high).contains(&eta_minutes(&after.eta)));
    }

    #[test]
    fn helper_reassignment_keeps_the_current_priority() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        let (session_id, before) =
            desk.preview("urgent pipe burst", Some("u-1"), &mut rng).expect("preview");

        let after = desk.modify(&session_id, "send a different helper", &mut rng).expect("modify");
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.price_value, before.price_value);
        // Urgent reassignment deterministically lands on the top-rated plumber again.
        assert_eq!(after.helper.id, "H005");
    }

    #[test]
    fn confirm_moves_the_proposal_into_the_ledger_exactly_once() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        let (session_id, _) =
            desk.preview("urgent plumbing leak in kitchen", Some("u-1"), &mut rng).expect("preview");

        let booking = desk.confirm(&session_id).expect("first confirm");
        assert_eq!(booking.booking_id.0, "BK1001");
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.price_estimate, "₹1450");
        assert_eq!(desk.open_sessions(), 0);
        assert_eq!(desk.total_bookings(), 1);

        let error = desk.confirm(&session_id).expect_err("second confirm");
        assert!(matches!(error, DeskError::UnknownSession(_)));
        assert_eq!(desk.total_bookings(), 1, "double confirm must not append");
    }

    #[test]
    fn booking_ids_grow_across_confirms() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        for expected in ["BK1001", "BK1002", "BK1003"] {
            let (session_id, _) =
                desk.preview("garden trimming", Some("u-1"), &mut rng).expect("preview");
            let booking = desk.confirm(&session_id).expect("confirm");
            assert_eq!(booking.booking_id.0, expected);
        }
        let (total, bookings) = desk.bookings();
        assert_eq!(total, 3);
        assert_eq!(bookings.len(), 3);
    }

    #[test]
    fn unknown_session_operations_have_no_side_effects() {
        let desk = BookingDesk::default();
        let ghost = SessionId::generate();

        let modify_error = desk.modify(&ghost, "urgent", &mut seeded()).expect_err("modify");
        assert!(matches!(modify_error, DeskError::UnknownSession(_)));

        let confirm_error = desk.confirm(&ghost).expect_err("confirm");
        assert!(matches!(confirm_error, DeskError::UnknownSession(_)));

        assert_eq!(desk.total_bookings(), 0);
        assert_eq!(desk.open_sessions(), 0);
    }

    #[test]
    fn confirmed_snapshot_is_decoupled_from_later_modifications() {
        let desk = BookingDesk::default();
        let mut rng = seeded();
        let (first, _) = desk.preview("clean the hall", Some("u-1"), &mut rng).expect("preview");
        let booking = desk.confirm(&first).expect("confirm");

        // A later negotiation by the same user cannot touch the record.
        let (second, _) =
            desk.preview("urgent clean the hall", Some("u-1"), &mut rng).expect("preview");
        desk.modify(&second, "make it urgent", &mut rng).expect("modify");

        let (_, bookings) = desk.bookings();
        assert_eq!(bookings[0], booking);
    }
}
