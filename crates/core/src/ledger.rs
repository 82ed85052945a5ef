use std::sync::Mutex;

use crate::domain::booking::{BookingId, ConfirmedBooking};

/// Process-lifetime append-only record of confirmed bookings. Counter and
/// list live under one lock so a confirm can never observe a torn state:
/// two concurrent confirms cannot share an id or drop an append.
#[derive(Debug)]
pub struct BookingLedger {
    inner: Mutex<LedgerInner>,
}

#[derive(Debug)]
struct LedgerInner {
    counter: u64,
    bookings: Vec<ConfirmedBooking>,
}

/// Booking numbers start above this offset; the first issued id is BK1001.
const BASE_OFFSET: u64 = 1000;

impl BookingLedger {
    pub fn new() -> Self {
        Self::with_base(BASE_OFFSET)
    }

    pub fn with_base(base: u64) -> Self {
        Self { inner: Mutex::new(LedgerInner { counter: base, bookings: Vec::new() }) }
    }

    /// Allocates the next strictly increasing booking id and appends the
    /// record built from it, atomically. The only mutator on the ledger.
    pub fn append_with_next_id(
        &self,
        build: impl FnOnce(BookingId) -> ConfirmedBooking,
    ) -> ConfirmedBooking {
        let mut inner = self.lock();
        inner.counter += 1;
        let record = build(BookingId(format!("BK{}", inner.counter)));
        inner.bookings.push(record.clone());
        record
    }

    /// Full ordered history plus its count, in insertion order.
    pub fn list_all(&self) -> (usize, Vec<ConfirmedBooking>) {
        let inner = self.lock();
        (inner.bookings.len(), inner.bookings.clone())
    }

    pub fn total(&self) -> usize {
        self.lock().bookings.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedgerInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}
