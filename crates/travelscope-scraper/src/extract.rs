//! Heuristic advisory level extraction.
//!
//! Pages from the advisory publisher are unstructured HTML whose wording
//! drifts over time. Extraction runs three independent scans over the
//! normalized page text:
//!
//! 1. Priority-ranked pattern rules pick the advisory level. When nothing
//!    matches, a looser keyword co-occurrence pass infers one.
//! 2. A fixed list of risk indicators is collected (every hit, not just the
//!    first).
//! 3. The first plausible date token is treated as the update date.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use travelscope_core::{AdvisoryLevel, AdvisoryRecord};

use crate::text::{block_text, collapse_whitespace, page_text};

/// Largest row window inspected after a location name on an index page.
const NEAR_WINDOW_BYTES: usize = 240;

/// A single level-detection rule. Lower `priority` wins.
#[derive(Debug)]
pub(crate) struct PatternRule {
    pub pattern: &'static str,
    pub level: AdvisoryLevel,
    pub description: &'static str,
    pub priority: u8,
}

// Headline phrases for levels 1 and 4 also show up in page legends and in
// regional "do not travel to" subsections, so they rank below 2 and 3.
const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        pattern: r"level\s*2\s*[:\-–—]\s*exercise\s+increased\s+caution",
        level: AdvisoryLevel::IncreasedCaution,
        description: "headline level 2",
        priority: 1,
    },
    PatternRule {
        pattern: r"level\s*3\s*[:\-–—]\s*reconsider\s+travel",
        level: AdvisoryLevel::ReconsiderTravel,
        description: "headline level 3",
        priority: 1,
    },
    PatternRule {
        pattern: r"level\s*4\s*[:\-–—]\s*do\s+not\s+travel",
        level: AdvisoryLevel::DoNotTravel,
        description: "headline level 4",
        priority: 2,
    },
    PatternRule {
        pattern: r"level\s*1\s*[:\-–—]\s*exercise\s+normal\s+precautions",
        level: AdvisoryLevel::NormalPrecautions,
        description: "headline level 1",
        priority: 2,
    },
    PatternRule {
        pattern: r"advisory\s+level\s*[:\-–—]?\s*4\b",
        level: AdvisoryLevel::DoNotTravel,
        description: "advisory level label 4",
        priority: 3,
    },
    PatternRule {
        pattern: r"advisory\s+level\s*[:\-–—]?\s*3\b",
        level: AdvisoryLevel::ReconsiderTravel,
        description: "advisory level label 3",
        priority: 3,
    },
    PatternRule {
        pattern: r"advisory\s+level\s*[:\-–—]?\s*2\b",
        level: AdvisoryLevel::IncreasedCaution,
        description: "advisory level label 2",
        priority: 3,
    },
    PatternRule {
        pattern: r"advisory\s+level\s*[:\-–—]?\s*1\b",
        level: AdvisoryLevel::NormalPrecautions,
        description: "advisory level label 1",
        priority: 3,
    },
    PatternRule {
        pattern: r"\bexercise\s+increased\s+caution\s+in\b",
        level: AdvisoryLevel::IncreasedCaution,
        description: "summary sentence level 2",
        priority: 4,
    },
    PatternRule {
        pattern: r"\breconsider\s+travel\s+to\b",
        level: AdvisoryLevel::ReconsiderTravel,
        description: "summary sentence level 3",
        priority: 4,
    },
    PatternRule {
        pattern: r"\bdo\s+not\s+travel\s+to\b",
        level: AdvisoryLevel::DoNotTravel,
        description: "summary sentence level 4",
        priority: 4,
    },
    PatternRule {
        pattern: r"\bexercise\s+normal\s+precautions\s+in\b",
        level: AdvisoryLevel::NormalPrecautions,
        description: "summary sentence level 1",
        priority: 4,
    },
];

/// Keyword pairs for the co-occurrence pass, highest severity first.
const CONTEXT_PAIRS: [(AdvisoryLevel, &str, &str); 4] = [
    (AdvisoryLevel::DoNotTravel, "level 4", "do not travel"),
    (AdvisoryLevel::ReconsiderTravel, "level 3", "reconsider travel"),
    (AdvisoryLevel::IncreasedCaution, "level 2", "increased caution"),
    (AdvisoryLevel::NormalPrecautions, "level 1", "normal precautions"),
];

/// Risk indicator tags in reporting order.
const RISK_INDICATORS: [(&str, &str); 7] = [
    ("crime", r"\bcrim(?:e|es|inal)\b"),
    ("terrorism", r"\bterroris(?:m|t|ts)\b"),
    ("health", r"\bhealth\b"),
    ("kidnapping", r"\bkidnap(?:ping|pings|ped)?\b"),
    ("armed conflict", r"\barmed\s+conflicts?\b"),
    ("civil unrest", r"\bcivil\s+unrest\b"),
    ("natural disaster", r"\bnatural\s+disasters?\b"),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static PatternRule)>> = LazyLock::new(|| {
    PATTERN_RULES
        .iter()
        .map(|rule| {
            let re = Regex::new(&format!("(?i){}", rule.pattern)).expect("valid pattern rule");
            (re, rule)
        })
        .collect()
});

static COMPILED_INDICATORS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    RISK_INDICATORS
        .iter()
        .map(|(tag, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("valid risk indicator regex");
            (*tag, re)
        })
        .collect()
});

static NEXT_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[^\n]*\btravel\s+advisory").expect("valid heading regex")
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{2}/\d{2}/\d{4}|\d{4}-\d{2}-\d{2})\b").expect("valid date regex")
});

/// Infers an advisory record from an HTML page.
///
/// Returns `None` when neither the pattern rules nor the contextual pass find
/// a level.
#[must_use]
pub fn extract_level(html: &str) -> Option<AdvisoryRecord> {
    extract_level_from_text(&page_text(html))
}

/// Like [`extract_level`], but only inspects the row headed
/// `{name} Travel Advisory`. Intended for index pages listing many locations.
#[must_use]
pub fn extract_level_near(html: &str, name: &str) -> Option<AdvisoryRecord> {
    let blocks = block_text(html);
    let row = location_row(&blocks, name)?;
    extract_level_from_text(&collapse_whitespace(row))
}

pub(crate) fn extract_level_from_text(text: &str) -> Option<AdvisoryRecord> {
    let level = best_rule_match(text)
        .map(|rule| rule.level)
        .or_else(|| infer_contextual_level(text))?;
    Some(AdvisoryRecord::for_level(level, build_details(text)))
}

/// Keeps `candidate` iff there is no current best or it ranks strictly higher.
fn is_better(candidate: &PatternRule, current: Option<&PatternRule>) -> bool {
    current.is_none_or(|best| candidate.priority < best.priority)
}

pub(crate) fn best_rule_match(text: &str) -> Option<&'static PatternRule> {
    let mut best: Option<&'static PatternRule> = None;
    for (re, rule) in COMPILED_RULES.iter() {
        if re.is_match(text) && is_better(rule, best) {
            tracing::trace!(
                rule = rule.description,
                priority = rule.priority,
                "pattern rule matched"
            );
            best = Some(*rule);
        }
    }
    best
}

fn infer_contextual_level(text: &str) -> Option<AdvisoryLevel> {
    let lower = text.to_lowercase();
    CONTEXT_PAIRS
        .iter()
        .find(|(_, a, b)| lower.contains(a) && lower.contains(b))
        .map(|(level, _, _)| *level)
}

/// Risk indicator tags found in `text`, in declaration order.
pub(crate) fn risk_indicators(text: &str) -> Vec<&'static str> {
    COMPILED_INDICATORS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(tag, _)| *tag)
        .collect()
}

/// First `MM/DD/YYYY` or `YYYY-MM-DD` token that is a real calendar date.
pub(crate) fn update_date(text: &str) -> Option<&str> {
    DATE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|token| {
            NaiveDate::parse_from_str(token, "%m/%d/%Y").is_ok()
                || NaiveDate::parse_from_str(token, "%Y-%m-%d").is_ok()
        })
}

fn build_details(text: &str) -> String {
    let mut parts = Vec::with_capacity(2);
    let tags = risk_indicators(text);
    if !tags.is_empty() {
        parts.push(format!("Risk indicators: {}", tags.join(", ")));
    }
    if let Some(date) = update_date(text) {
        parts.push(format!("Last updated: {date}"));
    }
    parts.join(". ")
}

/// The lines of `blocks` (see [`block_text`]) describing `name` on an index
/// page.
///
/// Starts at the first line that begins with `{name} travel advisory`, so
/// `Guinea` never lands on an `Equatorial Guinea` row. Stops before the next
/// line carrying a row heading, capped at [`NEAR_WINDOW_BYTES`].
fn location_row<'a>(blocks: &'a str, name: &str) -> Option<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let heading_re = Regex::new(&format!(
        r"(?im)^{}\s+travel\s+advisory",
        regex::escape(name)
    ))
    .ok()?;
    let heading = heading_re.find(blocks)?;
    let start = heading.start();
    let line_end = blocks[heading.end()..]
        .find('\n')
        .map_or(blocks.len(), |i| heading.end() + i);

    let mut end = (start + NEAR_WINDOW_BYTES).min(blocks.len());
    if let Some(next_heading) = NEXT_HEADING_RE.find(&blocks[line_end..]) {
        end = end.min(line_end + next_heading.start());
    }
    while end < blocks.len() && !blocks.is_char_boundary(end) {
        end += 1;
    }
    Some(&blocks[start..end])
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
