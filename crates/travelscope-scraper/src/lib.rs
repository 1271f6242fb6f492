//! Travel advisory scraping and heuristic level extraction.
//!
//! [`AdvisoryResolver`] walks the security advisory strategies in priority
//! order and falls back to a static table of extreme-risk locations.
//! [`HealthResolver`] reads a single health destination page per location.

pub mod error;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod health;
pub mod slug;
pub mod strategy;
mod text;

pub use error::AdvisoryError;
pub use extract::{extract_level, extract_level_near};
pub use fetch::{FetchOutcome, PageFetcher};
pub use health::{HealthNotice, HealthReport, HealthResolution, HealthResolver, ResolvedHealthReport};
pub use slug::{display_name, generate_variations, publisher_spelling};
pub use strategy::{AdvisoryResolver, Resolution, ResolvedAdvisory};
