//! Last-resort advisories for locations under a standing "do not travel"
//! advisory. Consulted only after every live strategy has failed.

use travelscope_core::{AdvisoryLevel, AdvisoryRecord};

const FALLBACK_ADVISORIES: &[(&str, &str)] = &[
    ("afghanistan", "Armed conflict, terrorism, crime, kidnapping and wrongful detention."),
    ("belarus", "Arbitrary enforcement of local laws and risk of wrongful detention."),
    ("burkina-faso", "Terrorism, crime and kidnapping."),
    ("central-african-republic", "Crime, civil unrest and kidnapping."),
    ("haiti", "Kidnapping, crime, civil unrest and poor health care infrastructure."),
    ("iran", "Terrorism, civil unrest, kidnapping and wrongful detention."),
    ("iraq", "Terrorism, kidnapping, armed conflict and civil unrest."),
    ("libya", "Crime, terrorism, civil unrest, kidnapping and armed conflict."),
    ("mali", "Crime, terrorism and kidnapping."),
    ("myanmar", "Civil unrest, armed conflict and arbitrary enforcement of local laws."),
    ("north-korea", "Serious risk of arrest and long-term detention of U.S. nationals."),
    ("russia", "Armed conflict, harassment and wrongful detention."),
    ("somalia", "Crime, terrorism, civil unrest, health issues, kidnapping and piracy."),
    ("south-sudan", "Crime, kidnapping and armed conflict."),
    ("sudan", "Armed conflict, civil unrest, crime, terrorism and kidnapping."),
    ("syria", "Terrorism, civil unrest, kidnapping, armed conflict and wrongful detention."),
    ("ukraine", "Active armed conflict."),
    ("venezuela", "Wrongful detention, terrorism, kidnapping and crime."),
    ("yemen", "Terrorism, civil unrest, health risks, kidnapping and armed conflict."),
];

/// Exact-key lookup; no case folding or fuzzy matching.
#[must_use]
pub fn lookup(slug: &str) -> Option<AdvisoryRecord> {
    FALLBACK_ADVISORIES
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, details)| AdvisoryRecord::for_level(AdvisoryLevel::DoNotTravel, *details))
}

#[cfg(test)]
mod tests {
    use travelscope_core::AdvisoryStatus;

    use super::*;

    #[test]
    fn known_location_returns_level_four_record() {
        let record = lookup("afghanistan").expect("fallback entry");
        assert_eq!(record.status, AdvisoryStatus::Alert);
        assert_eq!(record.message, "Level 4: Do not travel");
        assert_eq!(record.emoji, "🚫");
        assert!(record.details.contains("terrorism"));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(lookup("Afghanistan").is_none());
        assert!(lookup("afghan").is_none());
        assert!(lookup("nowhereland").is_none());
    }

    #[test]
    fn every_entry_is_an_alert() {
        for (slug, _) in FALLBACK_ADVISORIES {
            let record = lookup(slug).expect("entry");
            assert_eq!(record.status, AdvisoryStatus::Alert, "{slug}");
        }
    }

    #[test]
    fn keys_are_sorted_and_unique() {
        let keys: Vec<&str> = FALLBACK_ADVISORIES.iter().map(|(k, _)| *k).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
    }
}
