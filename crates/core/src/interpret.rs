//! Keyword-based message interpretation. Pure and deterministic: a raw
//! customer message in, a classified (service, area, urgency) intent out.
//! Matching is case-insensitive substring search over fixed ordered
//! tables; the first entry with any hit wins, so table order is part of
//! the contract.

use crate::domain::service::{AreaSize, ServiceCategory, UrgencyLevel};

const SERVICE_KEYWORDS: &[(ServiceCategory, &[&str])] = &[
    (ServiceCategory::Cleaning, &["clean", "safai", "sweep", "mop", "dust", "vacuum", "wash"]),
    (ServiceCategory::Plumbing, &["plumb", "pipe", "leak", "tap", "faucet", "drain", "water", "toilet"]),
    (ServiceCategory::Electrical, &["electric", "wiring", "switch", "socket", "light", "fan", "power"]),
    (ServiceCategory::Painting, &["paint", "color", "wall", "ceiling", "whitewash"]),
    (ServiceCategory::Carpentry, &["carpenter", "wood", "furniture", "door", "window"]),
    (ServiceCategory::PestControl, &["pest", "rat", "cockroach", "insect", "termite"]),
    (ServiceCategory::AcRepair, &["ac", "air condition", "cooling"]),
    (ServiceCategory::Gardening, &["garden", "lawn", "plant"]),
    (ServiceCategory::ApplianceRepair, &["washing machine", "fridge", "microwave", "appliance"]),
];

/// (display name, keywords, forces whole-house sizing)
const AREA_KEYWORDS: &[(&str, &[&str], bool)] = &[
    ("Kitchen", &["kitchen", "rasoi"], false),
    ("Bedroom", &["bedroom", "room"], false),
    ("Bathroom", &["bathroom", "toilet"], false),
    ("Living Room", &["living room", "hall"], false),
    ("Whole House", &["whole house", "entire home", "full house", "pura ghar"], true),
];

const URGENCY_HIGH: &[&str] = &["urgent", "jaldi", "asap", "emergency", "immediately", "now"];
const URGENCY_LOW: &[&str] = &["later", "whenever", "flexible", "no rush"];

const MODIFY_URGENT: &[&str] = &["urgent", "jaldi", "fast"];
const MODIFY_LOW: &[&str] = &["later", "low", "flexible"];

/// Fully classified customer message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intent {
    pub service: ServiceCategory,
    pub service_name: String,
    pub area: String,
    pub area_size: AreaSize,
    pub urgency: UrgencyLevel,
}

pub fn classify(message: &str) -> Intent {
    let (service, service_name) = classify_service(message);
    let (area, area_size) = classify_area(message);
    Intent { service, service_name, area, area_size, urgency: classify_urgency(message) }
}

/// First service whose keyword table hits the message wins; no hit at all
/// is an explicit fallback to cleaning with a generic label, not an error.
pub fn classify_service(message: &str) -> (ServiceCategory, String) {
    let text = message.to_lowercase();
    for (service, keywords) in SERVICE_KEYWORDS {
        if contains_any(&text, keywords) {
            return (*service, service.display_name().to_owned());
        }
    }
    (ServiceCategory::Cleaning, "General Service".to_owned())
}

/// The whole-house rule overrides any big/small qualifier; otherwise the
/// qualifier refines the default medium sizing.
pub fn classify_area(message: &str) -> (String, AreaSize) {
    let text = message.to_lowercase();
    for (name, keywords, whole_house) in AREA_KEYWORDS {
        if !contains_any(&text, keywords) {
            continue;
        }
        let size = if *whole_house {
            AreaSize::WholeHouse
        } else if contains_any(&text, &["big", "large"]) {
            AreaSize::Large
        } else if text.contains("small") {
            AreaSize::Small
        } else {
            AreaSize::Medium
        };
        return ((*name).to_owned(), size);
    }
    ("Home".to_owned(), AreaSize::Medium)
}

pub fn classify_urgency(message: &str) -> UrgencyLevel {
    let text = message.to_lowercase();
    if contains_any(&text, URGENCY_HIGH) {
        UrgencyLevel::Urgent
    } else if contains_any(&text, URGENCY_LOW) {
        UrgencyLevel::Low
    } else {
        UrgencyLevel::Normal
    }
}

/// Urgency requested by a free-text modification instruction. Uses a
/// smaller keyword set than initial classification; no match leaves the
/// proposal's urgency unchanged.
pub fn modification_urgency(instruction: &str) -> Option<UrgencyLevel> {
    let text = instruction.to_lowercase();
    if contains_any(&text, MODIFY_URGENT) {
        Some(UrgencyLevel::Urgent)
    } else if contains_any(&text, MODIFY_LOW) {
        Some(UrgencyLevel::Low)
    } else {
        None
    }
}

/// Whether a modification instruction asks for a helper reassignment.
pub fn wants_new_helper(instruction: &str) -> bool {
    let text = instruction.to_lowercase();
    text.contains("helper") || text.contains("different")
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::{
        classify, classify_area, classify_service, classify_urgency, modification_urgency,
        wants_new_helper,
    };
    use crate::domain::service::{AreaSize, ServiceCategory, UrgencyLevel};

    #[test]
    fn known_keywords_map_to_their_service() {
        assert_eq!(classify_service("the tap is leaking").0, ServiceCategory::Plumbing);
        assert_eq!(classify_service("Termite problem in the shelf").0, ServiceCategory::PestControl);
        assert_eq!(classify_service("fridge not cooling down").0, ServiceCategory::AcRepair);
    }

    #[test]
    fn unknown_text_falls_back_to_general_cleaning() {
        let (service, name) = classify_service("help me please");
        assert_eq!(service, ServiceCategory::Cleaning);
        assert_eq!(name, "General Service");
    }

    #[test]
    fn earlier_table_entries_win_on_overlap() {
        // "wash" (cleaning) appears before "washing machine" (appliance repair).
        assert_eq!(classify_service("my washing machine").0, ServiceCategory::Cleaning);
        // "toilet" belongs to plumbing before the bathroom area ever matters.
        assert_eq!(classify_service("toilet blocked").0, ServiceCategory::Plumbing);
    }

    #[test]
    fn area_defaults_to_home_medium() {
        assert_eq!(classify_area("fix the garage"), ("Home".to_owned(), AreaSize::Medium));
    }

    #[test]
    fn size_qualifiers_refine_matched_area() {
        assert_eq!(classify_area("big kitchen deep clean"), ("Kitchen".to_owned(), AreaSize::Large));
        assert_eq!(classify_area("small bedroom"), ("Bedroom".to_owned(), AreaSize::Small));
        assert_eq!(classify_area("kitchen sink"), ("Kitchen".to_owned(), AreaSize::Medium));
    }

    #[test]
    fn whole_house_overrides_size_qualifiers() {
        let (name, size) = classify_area("whole house but keep it small");
        assert_eq!(name, "Whole House");
        assert_eq!(size, AreaSize::WholeHouse);
    }

    #[test]
    fn earlier_area_entries_win_over_whole_house() {
        // "rooms" hits the bedroom entry before the whole-house entry is
        // ever tested, so the size qualifier applies normally.
        let (name, size) = classify_area("whole house but only the small rooms");
        assert_eq!(name, "Bedroom");
        assert_eq!(size, AreaSize::Small);
    }

    #[test]
    fn urgency_high_set_beats_low_set() {
        assert_eq!(classify_urgency("urgent but flexible"), UrgencyLevel::Urgent);
        assert_eq!(classify_urgency("whenever works"), UrgencyLevel::Low);
        assert_eq!(classify_urgency("sometime today"), UrgencyLevel::Normal);
    }

    #[test]
    fn full_classification_of_reference_message() {
        let intent = classify("urgent plumbing leak in kitchen");
        assert_eq!(intent.service, ServiceCategory::Plumbing);
        assert_eq!(intent.service_name, "Plumbing Service");
        assert_eq!(intent.area, "Kitchen");
        assert_eq!(intent.area_size, AreaSize::Medium);
        assert_eq!(intent.urgency, UrgencyLevel::Urgent);
    }

    #[test]
    fn modification_keywords_are_a_narrower_set() {
        assert_eq!(modification_urgency("make it fast"), Some(UrgencyLevel::Urgent));
        assert_eq!(modification_urgency("low priority please"), Some(UrgencyLevel::Low));
        // "asap" triggers initial classification but not modification.
        assert_eq!(modification_urgency("asap"), None);
        assert_eq!(modification_urgency("add soap"), None);
    }

    #[test]
    fn helper_reassignment_triggers() {
        assert!(wants_new_helper("send a different person"));
        assert!(wants_new_helper("change the helper"));
        assert!(!wants_new_helper("make it urgent"));
    }
}
