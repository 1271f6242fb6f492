//! Markup-to-text normalization shared by the advisory and health parsers.
//!
//! Offsets returned by helpers in this module are byte offsets into the
//! normalized text.

use std::sync::LazyLock;

use regex::Regex;

static NON_CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->")
        .expect("valid non-content regex")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:p|div|li|ul|ol|dl|dt|dd|tr|td|th|table|thead|tbody|section|article|h[1-6]|br)\b[^>]*>",
    )
    .expect("valid block tag regex")
});
static INLINE_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("valid regex"));
static LINE_BREAKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid regex"));

const ENTITIES: [(&str, &str); 12] = [
    ("&nbsp;", " "),
    ("&#160;", " "),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&apos;", "'"),
    ("&rsquo;", "'"),
    ("&ndash;", "–"),
    ("&mdash;", "—"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

/// Reduces an HTML document to its visible text with collapsed whitespace.
pub(crate) fn page_text(html: &str) -> String {
    let without_scripts = NON_CONTENT_RE.replace_all(html, " ");
    let without_tags = TAG_RE.replace_all(&without_scripts, " ");
    collapse_whitespace(&decode_entities(without_tags.into_owned()))
}

/// Like [`page_text`], but every block-level element (cell, row, list item,
/// paragraph, heading) starts a new line. Lines never contain a newline from
/// the source markup.
pub(crate) fn block_text(html: &str) -> String {
    let single_line = WS_RE.replace_all(html, " ");
    let without_scripts = NON_CONTENT_RE.replace_all(&single_line, " ");
    let with_breaks = BLOCK_TAG_RE.replace_all(&without_scripts, "\n");
    let without_tags = TAG_RE.replace_all(&with_breaks, " ");
    let decoded = decode_entities(without_tags.into_owned());
    let inline = INLINE_WS_RE.replace_all(&decoded, " ");
    LINE_BREAKS_RE.replace_all(&inline, "\n").trim().to_string()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    WS_RE.replace_all(text, " ").trim().to_string()
}

fn decode_entities(mut text: String) -> String {
    for (entity, replacement) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, replacement);
        }
    }
    text
}

/// Returns the slice `[start - before, end + after)` of `text`, snapped to
/// char boundaries.
pub(crate) fn window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    let mut lo = start.saturating_sub(before);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = end.saturating_add(after).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}

/// Letters and digits in any script count as word characters.
const WORD_START: &str = r"(?:^|[^\p{L}\p{N}])";
const WORD_END: &str = r"(?:$|[^\p{L}\p{N}])";

/// Case-insensitive matcher for any of `names` standing as a whole word.
///
/// Returns `None` when every name is blank.
pub(crate) fn whole_word_regex<S: AsRef<str>>(names: &[S]) -> Option<Regex> {
    let alternatives: Vec<String> = names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return None;
    }
    Regex::new(&format!(
        "(?i){WORD_START}(?:{}){WORD_END}",
        alternatives.join("|")
    ))
    .ok()
}

/// Truncates to at most `max_chars` characters.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_text_strips_tags_scripts_and_entities() {
        let html = "<html><head><style>.x{}</style><script>var a = 'Level 4';</script></head>\
                    <body><h1>Level&nbsp;2:</h1>\n<p>Exercise  Increased&#39;s <b>Caution</b></p>\
                    <!-- Level 3 --></body></html>";
        assert_eq!(page_text(html), "Level 2: Exercise Increased's Caution");
    }

    #[test]
    fn whole_word_regex_rejects_embedded_names() {
        let re = whole_word_regex(&["Niger", "Mali"]).expect("regex");
        assert!(!re.is_match("Nigeria Travel Advisory"));
        assert!(!re.is_match("Somalia Travel Advisory"));
        assert!(re.is_match("Mali Travel Advisory"));
        assert!(re.is_match("travel to niger."));
    }

    #[test]
    fn whole_word_regex_needs_a_name() {
        assert!(whole_word_regex(&["  ", ""]).is_none());
    }

    #[test]
    fn block_text_puts_each_cell_on_its_own_line() {
        let html = "<table><tr><td>Equatorial\n  Guinea <a href=\"#\">Travel Advisory</a></td>\
                    <td>Level 1</td></tr><tr><td>Guinea Travel Advisory</td></tr></table>";
        assert_eq!(
            block_text(html),
            "Equatorial Guinea Travel Advisory\nLevel 1\nGuinea Travel Advisory"
        );
    }

    #[test]
    fn page_text_decodes_amp_last() {
        assert_eq!(page_text("Bosnia &amp;lt;b&amp;gt;"), "Bosnia &lt;b&gt;");
    }

    #[test]
    fn window_snaps_to_char_boundaries() {
        let text = "ééé level 4 ééé";
        let start = text.find("level").unwrap();
        let end = start + "level 4".len();
        let slice = window(text, start, end, 3, 3);
        assert!(slice.contains("level 4"));
    }

    #[test]
    fn window_clamps_to_text_bounds() {
        assert_eq!(window("abc", 1, 2, 10, 10), "abc");
    }

    #[test]
    fn truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("Côte d'Ivoire", 4), "Côte");
    }
}
