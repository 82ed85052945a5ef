pub mod catalog;
pub mod config;
pub mod desk;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod interpret;
pub mod ledger;
pub mod session;
pub mod workforce;

pub use catalog::PriceBook;
pub use desk::BookingDesk;
pub use domain::booking::{
    BookingId, BookingProposal, BookingStatus, ConfirmedBooking, SessionId,
};
pub use domain::helper::{Availability, Helper, HelperSnapshot};
pub use domain::service::{AreaSize, ServiceCategory, UrgencyLevel};
pub use errors::DeskError;
pub use interpret::Intent;
pub use ledger::BookingLedger;
pub use session::SessionStore;
pub use workforce::WorkforceRegistry;
