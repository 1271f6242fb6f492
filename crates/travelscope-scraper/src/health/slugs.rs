/// Destination slugs where the health publisher's naming differs from ours.
const DESTINATION_SLUGS: &[(&str, &str)] = &[
    ("cape-verde", "cabo-verde"),
    ("cote-d-ivoire", "cote-divoire"),
    ("czechia", "czech-republic"),
    ("democratic-republic-of-the-congo", "democratic-republic-of-congo"),
    ("east-timor", "timor-leste"),
    ("hong-kong", "hong-kong-sar-china"),
    ("ivory-coast", "cote-divoire"),
    ("macao", "macau-sar-china"),
    ("macau", "macau-sar-china"),
    ("myanmar", "burma"),
    ("republic-of-the-congo", "republic-of-congo"),
    ("swaziland", "eswatini"),
    ("turkiye", "turkey"),
    ("vatican-city", "holy-see"),
];

/// Health destination slug for a location; unknown locations use the
/// lowercased slug unchanged.
#[must_use]
pub fn destination_slug(slug: &str) -> String {
    let key = slug.to_lowercase();
    DESTINATION_SLUGS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key.clone(), |(_, v)| (*v).to_string())
}
