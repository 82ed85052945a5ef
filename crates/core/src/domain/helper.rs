use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Busy,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

/// A service worker in the registry. Immutable reference data: nothing in
/// the booking lifecycle writes availability back, even after a confirm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Helper {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub specialty: String,
    pub availability: Availability,
    pub completed_jobs: u32,
    pub years_experience: u32,
    pub phone: Option<String>,
}

impl Helper {
    /// By-value copy embedded in proposals and confirmed bookings, so
    /// later registry changes never alter already-issued records.
    pub fn snapshot(&self) -> HelperSnapshot {
        HelperSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            rating: self.rating,
            specialty: self.specialty.clone(),
            phone: self.phone.clone(),
            experience: format!("{} years", self.years_experience),
            completed_jobs: self.completed_jobs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelperSnapshot {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub specialty: String,
    pub phone: Option<String>,
    pub experience: String,
    pub completed_jobs: u32,
}

#[cfg(test)]
mod tests {
    use super::{Availability, Helper};

    #[test]
    fn snapshot_preformats_experience() {
        let helper = Helper {
            id: "H005".to_owned(),
            name: "Suresh Yadav".to_owned(),
            rating: 4.9,
            specialty: "Pipe Expert".to_owned(),
            availability: Availability::Available,
            completed_jobs: 456,
            years_experience: 10,
            phone: Some("+91-9876543214".to_owned()),
        };

        let snapshot = helper.snapshot();
        assert_eq!(snapshot.experience, "10 years");
        assert_eq!(snapshot.id, "H005");
        assert_eq!(snapshot.completed_jobs, 456);
    }

    #[test]
    fn availability_off_duty_serializes_with_space() {
        let json = serde_json::to_string(&Availability::OffDuty).expect("serialize");
        assert_eq!(json, "\"Off Duty\"");
    }
}
