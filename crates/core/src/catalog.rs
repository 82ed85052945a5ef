use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::service::{AreaSize, ServiceCategory, UrgencyLevel};

/// Static pricing tables: base price per service plus urgency and area
/// multipliers. Base prices may be overridden from configuration; the
/// multipliers are fixed catalog constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBook {
    pub base_prices: BTreeMap<ServiceCategory, i64>,
}

impl Default for PriceBook {
    fn default() -> Self {
        let base_prices = BTreeMap::from([
            (ServiceCategory::Cleaning, 500),
            (ServiceCategory::Plumbing, 800),
            (ServiceCategory::Electrical, 700),
            (ServiceCategory::Painting, 1200),
            (ServiceCategory::Carpentry, 1000),
            (ServiceCategory::PestControl, 1500),
            (ServiceCategory::AcRepair, 900),
            (ServiceCategory::Gardening, 600),
            (ServiceCategory::ApplianceRepair, 850),
        ]);
        Self { base_prices }
    }
}

impl PriceBook {
    /// Applied when a service has no configured base price.
    pub const FALLBACK_BASE_PRICE: i64 = 500;

    pub fn base_price(&self, service: ServiceCategory) -> i64 {
        self.base_prices.get(&service).copied().unwrap_or(Self::FALLBACK_BASE_PRICE)
    }

    pub fn urgency_multiplier(&self, urgency: UrgencyLevel) -> Decimal {
        match urgency {
            UrgencyLevel::Urgent => Decimal::new(15, 1),
            UrgencyLevel::Normal => Decimal::ONE,
            UrgencyLevel::Low => Decimal::new(85, 2),
        }
    }

    pub fn area_multiplier(&self, area: AreaSize) -> Decimal {
        match area {
            AreaSize::WholeHouse => Decimal::from(3),
            AreaSize::Large => Decimal::new(15, 1),
            AreaSize::Medium => Decimal::new(12, 1),
            AreaSize::Small => Decimal::ONE,
        }
    }
}
