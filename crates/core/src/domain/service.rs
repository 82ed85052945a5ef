use serde::{Deserialize, Serialize};

/// Catalog key for a bookable home service. The variant order is the
/// classification order: the interpreter tests keyword tables against a
/// message in this order and the first category with a hit wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Cleaning,
    Plumbing,
    Electrical,
    Painting,
    Carpentry,
    PestControl,
    AcRepair,
    Gardening,
    ApplianceRepair,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 9] = [
        ServiceCategory::Cleaning,
        ServiceCategory::Plumbing,
        ServiceCategory::Electrical,
        ServiceCategory::Painting,
        ServiceCategory::Carpentry,
        ServiceCategory::PestControl,
        ServiceCategory::AcRepair,
        ServiceCategory::Gardening,
        ServiceCategory::ApplianceRepair,
    ];

    /// Stable snake_case wire key, identical to the serde representation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cleaning => "cleaning",
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Painting => "painting",
            Self::Carpentry => "carpentry",
            Self::PestControl => "pest_control",
            Self::AcRepair => "ac_repair",
            Self::Gardening => "gardening",
            Self::ApplianceRepair => "appliance_repair",
        }
    }

    /// Customer-facing label, e.g. "Pest Control Service".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cleaning => "Cleaning Service",
            Self::Plumbing => "Plumbing Service",
            Self::Electrical => "Electrical Service",
            Self::Painting => "Painting Service",
            Self::Carpentry => "Carpentry Service",
            Self::PestControl => "Pest Control Service",
            Self::AcRepair => "Ac Repair Service",
            Self::Gardening => "Gardening Service",
            Self::ApplianceRepair => "Appliance Repair Service",
        }
    }
}

/// Coarse job scope. Drives the area price multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaSize {
    WholeHouse,
    Large,
    #[default]
    Medium,
    Small,
}

/// Urgency tier, serialized with the capitalized display label the wire
/// format uses under the `priority` key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Urgent,
    #[default]
    Normal,
    Low,
}

impl UrgencyLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Normal => "Normal",
            Self::Low => "Low",
        }
    }
}
