//! Deterministic pricing plus the two randomized draws (ETA jitter and
//! helper choice). Randomness is injected at every seam so tests can seed
//! or stub the generator.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::catalog::PriceBook;
use crate::domain::helper::{Availability, Helper};
use crate::domain::service::{AreaSize, ServiceCategory, UrgencyLevel};
use crate::workforce::WorkforceRegistry;

/// Arrival estimate in whole minutes. Renders in minutes below an hour,
/// otherwise in whole hours with fractional minutes truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eta {
    minutes: u32,
}

impl Eta {
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes < 60 {
            write!(f, "{} minutes", self.minutes)
        } else {
            let hours = self.minutes / 60;
            write!(f, "{} hour{}", hours, if hours > 1 { "s" } else { "" })
        }
    }
}

/// Minute window per urgency tier. Public so tests can assert the bucket
/// rather than a literal draw.
pub fn eta_window(urgency: UrgencyLevel) -> (u32, u32) {
    match urgency {
        UrgencyLevel::Urgent => (10, 20),
        UrgencyLevel::Normal => (30, 60),
        UrgencyLevel::Low => (120, 240),
    }
}

pub fn estimate_eta<R: Rng>(urgency: UrgencyLevel, rng: &mut R) -> Eta {
    let (low, high) = eta_window(urgency);
    Eta::from_minutes(rng.gen_range(low..=high))
}

/// Pure price function: trunc(base * area * urgency) rounded to the
/// nearest 50, midpoints to even. Always a multiple of 50.
pub fn quote_price(
    book: &PriceBook,
    service: ServiceCategory,
    area: AreaSize,
    urgency: UrgencyLevel,
) -> i64 {
    let raw = Decimal::from(book.base_price(service))
        * book.area_multiplier(area)
        * book.urgency_multiplier(urgency);
    let step = Decimal::from(50);
    let rounded = (raw.trunc() / step).round() * step;
    rounded.to_i64().unwrap_or(0)
}

pub fn format_price(currency_symbol: &str, value: i64) -> String {
    format!("{currency_symbol}{value}")
}

/// Available helpers are preferred, with the full roster as a fallback
/// rather than a failure. Urgent jobs get the highest-rated candidate
/// (first in roster order on ties); everything else draws uniformly.
/// `None` only when the registry has nothing to offer for the service.
pub fn select_helper<'a, R: Rng>(
    registry: &'a WorkforceRegistry,
    service: ServiceCategory,
    urgency: UrgencyLevel,
    rng: &mut R,
) -> Option<&'a Helper> {
    let roster = registry.roster(service);
    let available: Vec<&Helper> = roster
        .iter()
        .filter(|helper| helper.availability == Availability::Available)
        .collect();
    let pool = if available.is_empty() { roster.iter().collect() } else { available };

    match urgency {
        UrgencyLevel::Urgent => pool
            .into_iter()
            .reduce(|best, candidate| if candidate.rating > best.rating { candidate } else { best }),
        _ => pool.choose(rng).copied(),
    }
}

/// 0-3 upsell lines. The wording is presentation; the price arithmetic
/// (x1.5 up, x0.85 down, /1.5 back to Normal) is the contract.
pub fn build_suggestions(
    registry: &WorkforceRegistry,
    service: ServiceCategory,
    urgency: UrgencyLevel,
    price: i64,
    currency_symbol: &str,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    match urgency {
        UrgencyLevel::Normal => {
            let urgent_price = price * 3 / 2;
            let low_price = price * 85 / 100;
            suggestions.push(format!(
                "Need it faster? Upgrade to Urgent for {currency_symbol}{urgent_price} (ETA: 10-20 min)"
            ));
            suggestions.push(format!(
                "Save money? Choose Low priority for {currency_symbol}{low_price}"
            ));
        }
        UrgencyLevel::Urgent => {
            let normal_price = price * 2 / 3;
            let savings = price - normal_price;
            suggestions.push(format!(
                "Not urgent? Save {currency_symbol}{savings} with Normal priority"
            ));
        }
        UrgencyLevel::Low => {}
    }

    let roster_size = registry.roster_size(service);
    if roster_size > 1 {
        suggestions.push(format!(
            "We have {roster_size} helpers available - we'll assign the best match"
        ));
    }

    suggestions
}
