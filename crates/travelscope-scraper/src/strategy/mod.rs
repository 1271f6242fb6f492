//! Security advisory resolution.
//!
//! Strategies are tried in declaration order:
//!
//! 1. `country_info`: country-information page, publisher spelling first.
//! 2. `travel_advisory`: per-location advisory page.
//! 3. `alternate_url`: alternate advisory page suffixes.
//! 4. `general_advisories`: the unkeyed advisories index, scoped to the
//!    location's row.
//!
//! Each strategy loops over its candidate URLs and stops at the first page
//! that yields a record and mentions the location. When every strategy is
//! exhausted the static fallback table is consulted, then the resolution
//! reports not-found.

mod urls;

use std::collections::HashSet;

use regex::Regex;
use serde::Serialize;
use travelscope_core::AdvisoryRecord;

use crate::error::AdvisoryError;
use crate::extract::{extract_level_from_text, extract_level_near};
use crate::fallback;
use crate::fetch::{FetchOutcome, PageFetcher};
use crate::slug::{display_name, generate_variations, location_aliases, publisher_spelling, validate_slug};
use crate::text::{page_text, whole_word_regex};

/// Source name reported when the static fallback table answers.
pub const FALLBACK_SOURCE: &str = "fallback";

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAdvisory {
    /// Name of the strategy that produced the record.
    pub source: String,
    /// URL of the page the record was extracted from. Empty for the fallback table.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug_used: Option<String>,
    pub data: AdvisoryRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedAdvisory),
    /// Every live strategy and the fallback table came up empty.
    NotFound { slug: String },
}

/// The location being resolved, with every name a page may use for it.
#[derive(Debug, Clone)]
pub(crate) struct Location {
    pub slug: String,
    pub display_name: String,
    mention_re: Option<Regex>,
}

impl Location {
    pub(crate) fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            display_name: display_name(slug),
            mention_re: whole_word_regex(&location_aliases(slug)),
        }
    }

    /// Leakage guard: `true` when the page text names this location as a
    /// whole word (`Niger` is not mentioned by a `Nigeria` page).
    pub(crate) fn is_mentioned_in(&self, text: &str) -> bool {
        self.mention_re.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// One way of locating an advisory on the publisher's site.
struct Strategy {
    name: &'static str,
    candidates: fn(&Location) -> Vec<String>,
    urls: fn(&str, &str) -> Vec<String>,
    /// Receives the raw page and its normalized text.
    extract: fn(&str, &str, &Location) -> Option<AdvisoryRecord>,
}

static STRATEGIES: [Strategy; 4] = [
    Strategy {
        name: "country_info",
        candidates: country_info_candidates,
        urls: urls::country_info,
        extract: extract_whole_page,
    },
    Strategy {
        name: "travel_advisory",
        candidates: variation_candidates,
        urls: urls::travel_advisory,
        extract: extract_whole_page,
    },
    Strategy {
        name: "alternate_url",
        candidates: variation_candidates,
        urls: urls::alternate,
        extract: extract_whole_page,
    },
    Strategy {
        name: "general_advisories",
        candidates: slug_candidate,
        urls: urls::general_index,
        extract: extract_location_row,
    },
];

fn country_info_candidates(location: &Location) -> Vec<String> {
    let mut candidates = vec![publisher_spelling(&location.slug)];
    for variation in generate_variations(&location.slug) {
        if !candidates.contains(&variation) {
            candidates.push(variation);
        }
    }
    candidates
}

fn variation_candidates(location: &Location) -> Vec<String> {
    generate_variations(&location.slug)
}

fn slug_candidate(location: &Location) -> Vec<String> {
    vec![location.slug.clone()]
}

fn extract_whole_page(_html: &str, text: &str, _location: &Location) -> Option<AdvisoryRecord> {
    extract_level_from_text(text)
}

fn extract_location_row(html: &str, _text: &str, location: &Location) -> Option<AdvisoryRecord> {
    extract_level_near(html, &location.display_name)
}

/// Resolves security advisories for location slugs.
#[derive(Debug, Clone)]
pub struct AdvisoryResolver {
    fetcher: PageFetcher,
    base_url: String,
}

impl AdvisoryResolver {
    /// `base_url` is the advisory publisher's origin, e.g. `https://travel.state.gov`.
    #[must_use]
    pub fn new(fetcher: PageFetcher, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    /// Runs the strategy chain for `slug`.
    ///
    /// Upstream failures never surface as errors; they only advance the chain.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisoryError::InvalidSlug`] when `slug` is malformed. No
    /// request is made in that case.
    pub async fn resolve(&self, slug: &str) -> Result<Resolution, AdvisoryError> {
        let slug = validate_slug(slug)?;
        let location = Location::new(&slug);

        for strategy in &STRATEGIES {
            if let Some(found) = self.run_strategy(strategy, &location).await {
                tracing::info!(
                    slug = %location.slug,
                    source = %found.source,
                    url = %found.url,
                    "advisory resolved"
                );
                return Ok(Resolution::Found(found));
            }
            tracing::debug!(slug = %location.slug, strategy = strategy.name, "strategy exhausted");
        }

        if let Some(record) = fallback::lookup(&slug) {
            tracing::info!(slug = %slug, "live strategies exhausted; using fallback advisory");
            return Ok(Resolution::Found(ResolvedAdvisory {
                source: FALLBACK_SOURCE.to_string(),
                url: String::new(),
                slug_used: Some(slug),
                data: record,
            }));
        }

        tracing::info!(slug = %slug, "no advisory found");
        Ok(Resolution::NotFound { slug })
    }

    async fn run_strategy(
        &self,
        strategy: &Strategy,
        location: &Location,
    ) -> Option<ResolvedAdvisory> {
        let mut attempted: HashSet<String> = HashSet::new();

        for candidate in (strategy.candidates)(location) {
            for url in (strategy.urls)(&self.base_url, &candidate) {
                if !attempted.insert(url.clone()) {
                    continue;
                }

                let html = match self.fetcher.fetch_page(&url).await {
                    FetchOutcome::Page { html } => html,
                    FetchOutcome::Failed { status } => {
                        tracing::debug!(strategy = strategy.name, url = %url, ?status, "candidate unavailable");
                        continue;
                    }
                };

                let text = page_text(&html);
                let Some(record) = (strategy.extract)(&html, &text, location) else {
                    tracing::debug!(strategy = strategy.name, url = %url, "no advisory level on page");
                    continue;
                };

                if !location.is_mentioned_in(&text) {
                    tracing::debug!(
                        strategy = strategy.name,
                        url = %url,
                        "page does not mention the location; discarding"
                    );
                    continue;
                }

                return Some(ResolvedAdvisory {
                    source: strategy.name.to_string(),
                    url,
                    slug_used: Some(candidate),
                    data: record,
                });
            }
        }

        None
    }
}
