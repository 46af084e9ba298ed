//! CSS Text Module Level 3 — Line breaking, white space, justification.
//! Spec: <https://www.w3.org/TR/css-text-3/>
//!
//! Text shaping is not done here: glyph advances come from an injected
//! [`TextMeasurer`], so the same layout code serves terminals, SVG and GPU
//! backends alike.

mod line_breaking;
mod measurement;
mod style;
mod text_layout;
mod white_space;

pub use line_breaking::{BreakSegment, break_segments};
pub use measurement::{ApproximateTextMeasurer, TextMeasurer, TextMetrics};
pub use style::{LineHeight, OverflowWrap, TextAlign, TextStyle, WhiteSpace};
pub use text_layout::{
    TextLayout, TextLine, TextRun, layout_text, max_content_width, min_content_width,
};
pub use white_space::{collapse_whitespace, process_white_space};

/// Return the UA default font-size in pixels when not specified by author CSS.
pub const fn default_font_size_px() -> f32 {
    16.0
}
