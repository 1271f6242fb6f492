//! Health destination page parsing.

use std::sync::LazyLock;

use regex::Regex;
use travelscope_core::{AdvisoryRecord, HealthLevel};

use super::{HealthNotice, HealthReport};
use crate::text::{page_text, truncate_chars, window};

const EXCERPT_CHARS: usize = 500;
const CONTEXT_BYTES: usize = 80;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("valid regex"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").expect("valid regex"));
static MAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<main\b[^>]*>(.*?)</main\s*>").expect("valid regex"));
static VACCINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)vaccines?\s+and\s+medicines|id\s*=\s*["']vaccines"#).expect("valid regex")
});
static NOTICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)travel\s+health\s+notices?|class\s*=\s*["'][^"']*\bnotice-"#)
        .expect("valid regex")
});

/// Patterns for one level, tried in order; the first hit for a level wins.
fn notice_patterns(level: HealthLevel) -> &'static [&'static str] {
    match level {
        HealthLevel::AvoidNonessentialTravel => &[
            r"level\s*4\s*[:\-–—]?\s*avoid\s+(?:all\s+)?nonessential\s+travel",
            r"level\s*4\s+(?:travel\s+health\s+)?notice",
        ],
        HealthLevel::ReconsiderNonessentialTravel => &[
            r"level\s*3\s*[:\-–—]?\s*reconsider\s+nonessential\s+travel",
            r"level\s*3\s+(?:travel\s+health\s+)?notice",
        ],
        HealthLevel::EnhancedPrecautions => &[
            r"level\s*2\s*[:\-–—]?\s*practice\s+enhanced\s+precautions",
            r"level\s*2\s+(?:travel\s+health\s+)?notice",
        ],
        HealthLevel::UsualPrecautions => &[
            r"level\s*1\s*[:\-–—]?\s*practice\s+usual\s+precautions",
            r"level\s*1\s+(?:travel\s+health\s+)?notice",
        ],
    }
}

/// Compiled notice patterns, highest severity first.
static COMPILED_NOTICE_PATTERNS: LazyLock<Vec<(HealthLevel, Vec<Regex>)>> = LazyLock::new(|| {
    HealthLevel::BY_SEVERITY
        .iter()
        .map(|level| {
            let compiled = notice_patterns(*level)
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")).expect("valid notice pattern"))
                .collect();
            (*level, compiled)
        })
        .collect()
});

/// Builds a [`HealthReport`] from a destination page.
#[must_use]
pub fn parse_health_page(html: &str) -> HealthReport {
    let title = first_capture_text(&TITLE_RE, html).or_else(|| first_capture_text(&H1_RE, html));
    let body_text = MAIN_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map_or_else(|| page_text(html), |m| page_text(m.as_str()));
    let notices = extract_notices(&body_text);
    let summary = notices
        .first()
        .map(|notice| AdvisoryRecord::for_health_level(notice.level, notice.context.clone()));

    HealthReport {
        title,
        excerpt: truncate_chars(&body_text, EXCERPT_CHARS),
        has_vaccine_section: VACCINE_RE.is_match(html),
        has_notice_section: NOTICE_RE.is_match(html),
        notices,
        summary,
    }
}

fn first_capture_text(re: &Regex, html: &str) -> Option<String> {
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| page_text(m.as_str()))
        .filter(|t| !t.is_empty())
}

fn extract_notices(text: &str) -> Vec<HealthNotice> {
    COMPILED_NOTICE_PATTERNS
        .iter()
        .filter_map(|(level, patterns)| {
            let hit = patterns.iter().find_map(|re| re.find(text))?;
            Some(HealthNotice {
                level: *level,
                description: level.description().to_string(),
                context: window(text, hit.start(), hit.end(), CONTEXT_BYTES, CONTEXT_BYTES)
                    .trim()
                    .to_string(),
            })
        })
        .collect()
}
