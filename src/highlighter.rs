// WHY: markup is inserted into the caller's original text, so every non-matched character
// must survive byte for byte

use std::ops::Range;

use crate::report::FinalMatch;

pub const PLAGIARISM_CLASS: &str = "highlight-plagiarism";

/// Wrap each occurrence of each match's text in a highlight span.
///
/// Matches are ordered by first occurrence. Every non-overlapping occurrence of a match is
/// claimed unless it overlaps a range an earlier-ordered match already claimed; overlapping
/// occurrences stay plain text, so spans never nest. Markup is applied from the last claimed
/// range to the first so earlier offsets stay valid. The wrapped text is inserted unescaped;
/// only attribute values are escaped.
pub fn highlight_matches(original: &str, matches: &[FinalMatch]) -> String {
    let mut ordered: Vec<(Option<usize>, &FinalMatch)> =
        matches.iter().map(|m| (original.find(m.text.as_str()), m)).collect();
    ordered.sort_by_key(|(position, _)| *position);

    let mut claimed: Vec<(Range<usize>, &FinalMatch)> = Vec::new();
    for (_, m) in ordered {
        if m.text.is_empty() {
            continue;
        }
        for (start, found) in original.match_indices(m.text.as_str()) {
            let range = start..start + found.len();
            if claimed.iter().all(|(r, _)| r.end <= range.start || range.end <= r.start) {
                claimed.push((range, m));
            }
        }
    }
    claimed.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));

    let mut highlighted = original.to_string();
    for (range, m) in claimed {
        highlighted.insert_str(range.end, "</span>");
        highlighted.insert_str(range.start, &opening_tag(m));
    }
    highlighted
}

fn opening_tag(m: &FinalMatch) -> String {
    format!(
        r#"<span class="{PLAGIARISM_CLASS}" title="{}" data-url="{}" data-percentage="{}">"#,
        escape_attribute(&m.source),
        escape_attribute(&m.url),
        m.match_percentage
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Remove plagiarism highlight markup, leaving the wrapped text in place
pub fn strip_highlights(highlighted: &str) -> String {
    let opening = format!(r#"<span class="{PLAGIARISM_CLASS}""#);
    let mut stripped = String::with_capacity(highlighted.len());
    let mut rest = highlighted;

    while let Some(start) = rest.find(opening.as_str()) {
        let after_open = &rest[start..];
        let Some(tag_end) = after_open.find('>') else { break };
        let inner = &after_open[tag_end + 1..];
        let Some(close) = inner.find("</span>") else { break };

        stripped.push_str(&rest[..start]);
        stripped.push_str(&inner[..close]);
        rest = &inner[close + "</span>".len()..];
    }
    stripped.push_str(rest);
    stripped
}
