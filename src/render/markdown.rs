//! Shared markdown text transforms.
//!
//! Everything that makes free text safe to embed in a markdown table cell
//! lives here: underscore escaping for identifiers, line-break conversion
//! for multi-line cells, and the whole-document sanitize pass.

use regex::Regex;
use std::sync::LazyLock;

static RE_TRAILING_BLANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

static RE_NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Escape literal underscores so markdown does not read them as emphasis.
///
/// Applied to identifier names only; description and type text is expected
/// to be pre-safe apart from line breaks.
pub fn escape_name(name: &str) -> String {
    name.replace('_', "\\_")
}

/// Collapse embedded line breaks into `<br>` so multi-line text stays inside
/// a single table cell. Text without breaks is returned unchanged.
pub fn convert_multi_line_text(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    text.replace("\r\n", "<br>").replace('\n', "<br>")
}

/// Whole-document cleanup pass, run once after assembly.
///
/// Strips trailing whitespace from line ends, collapses runs of blank lines
/// to a single blank line, and normalizes the tail to exactly one newline.
/// Idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize(document: &str) -> String {
    let stripped = RE_TRAILING_BLANKS.replace_all(document, "");
    let collapsed = RE_NEWLINE_RUN.replace_all(&stripped, "\n\n");
    let body = collapsed.trim_end_matches('\n');
    if body.is_empty() {
        String::new()
    } else {
        format!("{}\n", body)
    }
}
