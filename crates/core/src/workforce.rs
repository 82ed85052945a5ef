use std::collections::BTreeMap;

use crate::domain::helper::{Availability, Helper};
use crate::domain::service::ServiceCategory;

/// Static per-service helper rosters. Read-only after construction: the
/// booking lifecycle snapshots helpers but never writes availability back.
#[derive(Clone, Debug)]
pub struct WorkforceRegistry {
    rosters: BTreeMap<ServiceCategory, Vec<Helper>>,
}

impl WorkforceRegistry {
    pub fn from_rosters(rosters: BTreeMap<ServiceCategory, Vec<Helper>>) -> Self {
        Self { rosters }
    }

    /// Roster used for helper selection. A service with no registered
    /// helpers borrows the cleaning roster rather than failing the
    /// selection outright.
    pub fn roster(&self, service: ServiceCategory) -> &[Helper] {
        match self.rosters.get(&service) {
            Some(roster) if !roster.is_empty() => roster,
            _ => self
                .rosters
                .get(&ServiceCategory::Cleaning)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// Registered headcount for a service, without the cleaning fallback.
    /// Feeds the "we have N helpers" suggestion line.
    pub fn roster_size(&self, service: ServiceCategory) -> usize {
        self.rosters.get(&service).map_or(0, Vec::len)
    }
}

impl Default for WorkforceRegistry {
    fn default() -> Self {
        let rosters = BTreeMap::from([
            (
                ServiceCategory::Cleaning,
                vec![
                    helper("H001", "Raj Kumar", 4.8, "Deep Cleaning", 245, 5, "+91-9876543210"),
                    helper("H002", "Priya Sharma", 4.9, "Kitchen Specialist", 312, 7, "+91-9876543211"),
                    helper("H003", "Sunita Devi", 4.9, "Sanitization", 278, 6, "+91-9876543213"),
                ],
            ),
            (
                ServiceCategory::Plumbing,
                vec![
                    helper("H005", "Suresh Yadav", 4.9, "Pipe Expert", 456, 10, "+91-9876543214"),
                    helper("H006", "Vijay Patil", 4.6, "Bathroom Fitting", 198, 5, "+91-9876543215"),
                ],
            ),
            (
                ServiceCategory::Electrical,
                vec![
                    helper("H009", "Ramesh Gupta", 4.9, "Wiring Specialist", 523, 12, "+91-9876543218"),
                    helper("H010", "Sanjay Verma", 4.7, "Appliance Repair", 289, 7, "+91-9876543219"),
                ],
            ),
            (
                ServiceCategory::Painting,
                vec![helper("H013", "Mukesh Kumar", 4.8, "Interior Designer", 167, 8, "+91-9876543222")],
            ),
            (
                ServiceCategory::Carpentry,
                vec![helper("H016", "Ravi Das", 4.9, "Furniture Expert", 389, 11, "+91-9876543225")],
            ),
            (
                ServiceCategory::PestControl,
                vec![helper("H019", "Dinesh Patel", 4.8, "Rodent Control", 312, 7, "+91-9876543228")],
            ),
            (
                ServiceCategory::AcRepair,
                vec![helper("H022", "Prakash Yadav", 4.9, "AC Installation", 445, 10, "+91-9876543231")],
            ),
            (
                ServiceCategory::Gardening,
                vec![helper("H025", "Krishna Das", 4.8, "Lawn Specialist", 234, 6, "+91-9876543234")],
            ),
            (
                ServiceCategory::ApplianceRepair,
                vec![helper("H027", "Arjun Patel", 4.8, "Washing Machine", 289, 7, "+91-9876543236")],
            ),
        ]);
        Self { rosters }
    }
}

fn helper(
    id: &str,
    name: &str,
    rating: f64,
    specialty: &str,
    completed_jobs: u32,
    years_experience: u32,
    phone: &str,
) -> Helper {
    Helper {
        id: id.to_owned(),
        name: name.to_owned(),
        rating,
        specialty: specialty.to_owned(),
        availability: Availability::Available,
        completed_jobs,
        years_experience,
        phone: Some(phone.to_owned()),
    }
}
