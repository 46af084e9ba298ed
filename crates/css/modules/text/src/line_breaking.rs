//! Soft wrap opportunities.
//!
//! Spec: §5 Line Breaking and Word Boundaries, with opportunities taken from
//! the Unicode line breaking algorithm (UAX #14).

use unicode_linebreak::{BreakOpportunity, linebreaks};

/// One unbreakable piece of a paragraph plus the white space that follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakSegment<'text> {
    /// Visible part; may be empty for leading preserved spaces.
    pub word: &'text str,
    /// Trailing spaces/tabs that hang at a line end.
    pub trailing_space: &'text str,
    /// A break after this segment is mandatory.
    pub mandatory: bool,
}

/// Split a paragraph at every line break opportunity.
pub fn break_segments(paragraph: &str) -> Vec<BreakSegment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (index, opportunity) in linebreaks(paragraph) {
        let Some(piece) = paragraph.get(start..index) else {
            continue;
        };
        start = index;
        if piece.is_empty() {
            continue;
        }
        let content = piece.trim_end_matches(['\n', '\r', '\u{2028}', '\u{2029}']);
        let word = content.trim_end_matches([' ', '\t']);
        segments.push(BreakSegment {
            word,
            trailing_space: content.get(word.len()..).unwrap_or_default(),
            mandatory: matches!(opportunity, BreakOpportunity::Mandatory)
                && index < paragraph.len(),
        });
    }
    segments
}
