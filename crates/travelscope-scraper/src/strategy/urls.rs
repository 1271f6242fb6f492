//! URL builders for the advisory publisher's page shapes.

const COUNTRY_INFO_PATH: &str =
    "/content/travel/en/international-travel/International-Travel-Country-Information-Pages";
const ADVISORY_PATH: &str = "/content/travel/en/traveladvisories/traveladvisories";

/// Suffixes tried by the alternate-URL strategy, in order.
const ALTERNATE_SUFFIXES: [&str; 3] = ["-advisory.html", ".html", "-travel-advisory-0.html"];

pub(super) fn country_info(base: &str, candidate: &str) -> Vec<String> {
    vec![format!("{base}{COUNTRY_INFO_PATH}/{candidate}.html")]
}

pub(super) fn travel_advisory(base: &str, candidate: &str) -> Vec<String> {
    vec![format!("{base}{ADVISORY_PATH}/{candidate}-travel-advisory.html")]
}

pub(super) fn alternate(base: &str, candidate: &str) -> Vec<String> {
    ALTERNATE_SUFFIXES
        .iter()
        .map(|suffix| format!("{base}{ADVISORY_PATH}/{candidate}{suffix}"))
        .collect()
}

pub(super) fn general_index(base: &str, _candidate: &str) -> Vec<String> {
    vec![format!("{base}{ADVISORY_PATH}.html")]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://travel.state.gov";

    #[test]
    fn country_info_url() {
        assert_eq!(
            country_info(BASE, "KoreaSouth"),
            vec!["https://travel.state.gov/content/travel/en/international-travel/International-Travel-Country-Information-Pages/KoreaSouth.html"]
        );
    }

    #[test]
    fn travel_advisory_url() {
        assert_eq!(
            travel_advisory(BASE, "peru"),
            vec!["https://travel.state.gov/content/travel/en/traveladvisories/traveladvisories/peru-travel-advisory.html"]
        );
    }

    #[test]
    fn alternate_urls_follow_suffix_order() {
        let urls = alternate(BASE, "peru");
        assert_eq!(urls.len(), 3);
        assert!(urls[0].ends_with("/peru-advisory.html"));
        assert!(urls[1].ends_with("/peru.html"));
        assert!(urls[2].ends_with("/peru-travel-advisory-0.html"));
    }

    #[test]
    fn general_index_ignores_candidate() {
        assert_eq!(general_index(BASE, "peru"), general_index(BASE, "chile"));
        assert_eq!(
            general_index(BASE, "peru")[0],
            "https://travel.state.gov/content/travel/en/traveladvisories/traveladvisories.html"
        );
    }
}
