//! Location slug normalization.
//!
//! Remote publishers spell the same location differently (`south-korea`,
//! `SouthKorea`, `KoreaSouth`, `South-Korea`). These helpers generate the
//! candidate identifiers the strategies try, in a stable order.

use crate::error::AdvisoryError;

/// Maximum accepted slug length in bytes.
const MAX_SLUG_LEN: usize = 96;

/// Exact spellings used by the country-information page shape.
///
/// Entries exist only where the generic "capitalize each segment and
/// concatenate" heuristic produces the wrong file name. Some publishers keep
/// the hyphenated lowercase slug for a handful of locations.
const PUBLISHER_SPELLINGS: &[(&str, &str)] = &[
    ("antigua-and-barbuda", "AntiguaandBarbuda"),
    ("bahamas", "TheBahamas"),
    ("bosnia-and-herzegovina", "BosniaandHerzegovina"),
    ("cote-d-ivoire", "CotedIvoire"),
    ("democratic-republic-of-the-congo", "DemocraticRepublicoftheCongo"),
    ("gambia", "TheGambia"),
    ("guinea-bissau", "guinea-bissau"),
    ("myanmar", "Burma"),
    ("north-korea", "KoreaNorth"),
    ("republic-of-the-congo", "RepublicoftheCongo"),
    ("sao-tome-and-principe", "SaoTomeandPrincipe"),
    ("south-korea", "KoreaSouth"),
    ("timor-leste", "timor-leste"),
    ("trinidad-and-tobago", "TrinidadandTobago"),
];

/// Additional names a page may use for a location. Used by the leakage guard.
const LOCATION_ALIASES: &[(&str, &[&str])] = &[
    ("cote-d-ivoire", &["Cote d'Ivoire", "Côte d'Ivoire", "Ivory Coast"]),
    ("czech-republic", &["Czechia"]),
    ("democratic-republic-of-the-congo", &["Democratic Republic of the Congo", "DRC"]),
    ("myanmar", &["Burma"]),
    ("north-korea", &["Democratic People's Republic of Korea", "DPRK"]),
    ("south-korea", &["Republic of Korea"]),
    ("timor-leste", &["Timor-Leste", "East Timor"]),
    ("turkey", &["Türkiye", "Turkiye"]),
];

/// Generates the ordered, de-duplicated candidate spellings for a slug.
///
/// Order: original, lowercase, capitalized, camel (`SouthKorea`), title
/// (`South-Korea`). The original is always first and the result is never empty.
#[must_use]
pub fn generate_variations(slug: &str) -> Vec<String> {
    let mut variations = Vec::with_capacity(5);
    push_unique(&mut variations, slug.to_string());
    push_unique(&mut variations, slug.to_lowercase());
    push_unique(&mut variations, capitalize(slug));
    push_unique(&mut variations, capitalized_segments(slug).concat());
    push_unique(&mut variations, capitalized_segments(slug).join("-"));
    variations
}

/// Returns the country-information page spelling for a slug.
///
/// Known locations use the publisher's exact spelling; everything else strips
/// hyphens and capitalizes each segment.
#[must_use]
pub fn publisher_spelling(slug: &str) -> String {
    let key = slug.to_lowercase();
    PUBLISHER_SPELLINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or_else(|| capitalized_segments(slug).concat(), |(_, v)| (*v).to_string())
}

/// Human-readable name derived from a slug (`south-korea` → `South Korea`).
#[must_use]
pub fn display_name(slug: &str) -> String {
    capitalized_segments(slug).join(" ")
}

/// Every name a fetched page may use to refer to the location.
pub(crate) fn location_aliases(slug: &str) -> Vec<String> {
    let key = slug.to_lowercase();
    let mut aliases = Vec::new();
    push_unique(&mut aliases, display_name(slug));
    push_unique(&mut aliases, publisher_spelling(slug));
    if let Some((_, extra)) = LOCATION_ALIASES.iter().find(|(k, _)| *k == key) {
        for alias in *extra {
            push_unique(&mut aliases, (*alias).to_string());
        }
    }
    aliases.retain(|a| !a.is_empty());
    aliases
}

/// Trims and validates an inbound slug.
///
/// # Errors
///
/// Returns [`AdvisoryError::InvalidSlug`] for empty or overlong input, or for
/// characters other than ASCII alphanumerics, `-`, and `_`.
pub fn validate_slug(raw: &str) -> Result<String, AdvisoryError> {
    let slug = raw.trim();
    let invalid = |reason: &str| AdvisoryError::InvalidSlug {
        slug: raw.to_string(),
        reason: reason.to_string(),
    };

    if slug.is_empty() {
        return Err(invalid("slug is empty"));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(invalid("slug is too long"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("slug may only contain letters, digits, '-' and '_'"));
    }
    if !slug.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("slug has no letters or digits"));
    }
    Ok(slug.to_string())
}

fn push_unique(out: &mut Vec<String>, value: String) {
    if !out.contains(&value) {
        out.push(value);
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn capitalized_segments(slug: &str) -> Vec<String> {
    slug.split('-')
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect()
}

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;
