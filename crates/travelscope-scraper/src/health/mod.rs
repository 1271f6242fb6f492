//! Health advisory lookup.
//!
//! Unlike security advisories there is one page per destination, so there is
//! no strategy chain: fetch, parse, report.

mod parse;
mod slugs;

use serde::Serialize;
use travelscope_core::{AdvisoryRecord, HealthLevel};

use crate::error::AdvisoryError;
use crate::fetch::{FetchOutcome, PageFetcher};
use crate::slug::validate_slug;

pub use parse::parse_health_page;
pub use slugs::destination_slug;

/// Source name reported for health destination pages.
pub const HEALTH_SOURCE: &str = "cdc_destination";

const DESTINATION_PATH: &str = "/travel/destinations/traveler/none";

/// A health notice found on a destination page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthNotice {
    pub level: HealthLevel,
    pub description: String,
    /// Text surrounding the match on the page.
    pub context: String,
}

/// Informational summary of a destination health page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub title: Option<String>,
    pub excerpt: String,
    pub has_vaccine_section: bool,
    pub has_notice_section: bool,
    /// At most one notice per level, highest severity first.
    pub notices: Vec<HealthNotice>,
    /// Record for the most severe notice, if any.
    pub summary: Option<AdvisoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHealthReport {
    pub source: String,
    pub url: String,
    pub slug_used: String,
    pub data: HealthReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthResolution {
    Found(ResolvedHealthReport),
    NotFound { slug: String },
}

/// Resolves health destination reports for location slugs.
#[derive(Debug, Clone)]
pub struct HealthResolver {
    fetcher: PageFetcher,
    base_url: String,
}

impl HealthResolver {
    /// `base_url` is the health publisher's origin, e.g. `https://wwwnc.cdc.gov`.
    #[must_use]
    pub fn new(fetcher: PageFetcher, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    /// Fetches and parses the destination page for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisoryError::InvalidSlug`] when `slug` is malformed.
    pub async fn resolve(&self, slug: &str) -> Result<HealthResolution, AdvisoryError> {
        let slug = validate_slug(slug)?;
        let destination = destination_slug(&slug);
        let url = format!("{}{DESTINATION_PATH}/{destination}", self.base_url);

        match self.fetcher.fetch_page(&url).await {
            FetchOutcome::Page { html } => {
                let data = parse_health_page(&html);
                tracing::info!(
                    slug = %slug,
                    url = %url,
                    notices = data.notices.len(),
                    "health report resolved"
                );
                Ok(HealthResolution::Found(ResolvedHealthReport {
                    source: HEALTH_SOURCE.to_string(),
                    url,
                    slug_used: destination,
                    data,
                }))
            }
            FetchOutcome::Failed { status } => {
                tracing::info!(slug = %slug, url = %url, ?status, "health destination page unavailable");
                Ok(HealthResolution::NotFound { slug })
            }
        }
    }
}
