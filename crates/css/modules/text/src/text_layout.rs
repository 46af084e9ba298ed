//! Line layout for a single text leaf.
//!
//! Spec: §5 Line Breaking, §7 Alignment and Justification, §8 Spacing

use smallvec::SmallVec;

use crate::line_breaking::break_segments;
use crate::measurement::{TextMeasurer, TextMetrics};
use crate::style::{OverflowWrap, TextAlign, TextStyle};
use crate::white_space::process_white_space;

/// A positioned run of text inside a line.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Offset from the start of the line box (after `offset_x`).
    pub offset_x: f32,
    pub width: f32,
    natural_x: f32,
}

/// One line box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub runs: SmallVec<TextRun, 4>,
    /// Width of the runs, without indent and without hanging spaces.
    pub width: f32,
    /// Horizontal position of the line inside the content box (alignment + indent).
    pub offset_x: f32,
    /// Top of the line box inside the content box.
    pub offset_y: f32,
    pub ascent: f32,
    pub descent: f32,
    /// `text-indent` applied to this line.
    pub indent: f32,
    /// Last line of a paragraph (never justified).
    pub ends_paragraph: bool,
}

/// Line boxes for a text leaf.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<TextLine>,
    pub line_height: f32,
    /// Widest line including its indent.
    pub width: f32,
    /// `max(1, lines) × line_height`.
    pub height: f32,
}

impl TextLayout {
    /// Distance from the top of the content box to the first line's baseline.
    pub fn first_baseline(&self) -> Option<f32> {
        self.lines.first().map(|line| {
            let half_leading = (self.line_height - (line.ascent + line.descent)) / 2.0;
            half_leading + line.ascent
        })
    }

    /// Re-run `text-align` against a final content width.
    pub fn align(&mut self, content_width: f32, align: TextAlign) {
        for line in &mut self.lines {
            for run in &mut line.runs {
                run.offset_x = run.natural_x;
            }
            let free = (content_width - line.indent - line.width).max(0.0);
            line.offset_x = match align {
                TextAlign::Start | TextAlign::Left | TextAlign::Justify => line.indent,
                TextAlign::End | TextAlign::Right => content_width - line.width,
                TextAlign::Center => line.indent + free / 2.0,
            };
            let gaps = line.runs.len().saturating_sub(1);
            if align == TextAlign::Justify && !line.ends_paragraph && gaps > 0 {
                let extra = free / gaps as f32;
                for (index, run) in line.runs.iter_mut().enumerate() {
                    run.offset_x = (index as f32).mul_add(extra, run.natural_x);
                }
                line.width += free;
            }
        }
    }
}

struct LineBuilder {
    runs: SmallVec<TextRun, 4>,
    width: f32,
    pending_space: f32,
    indent: f32,
    ascent: f32,
    descent: f32,
}

impl LineBuilder {
    fn new(indent: f32) -> Self {
        Self {
            runs: SmallVec::new(),
            width: 0.0,
            pending_space: 0.0,
            indent,
            ascent: 0.0,
            descent: 0.0,
        }
    }

    fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Line extent if a word of `advance` were appended.
    fn extent_with(&self, advance: f32) -> f32 {
        self.indent + self.width + self.pending_space + advance
    }

    fn place(&mut self, text: &str, metrics: TextMetrics) {
        let start = self.width + self.pending_space;
        self.runs.push(TextRun {
            text: text.to_owned(),
            offset_x: start,
            width: metrics.advance,
            natural_x: start,
        });
        self.width = start + metrics.advance;
        self.pending_space = 0.0;
        self.ascent = self.ascent.max(metrics.ascent);
        self.descent = self.descent.max(metrics.descent);
    }

    fn finish(self, ends_paragraph: bool, empty_metrics: TextMetrics) -> TextLine {
        let (ascent, descent) = if self.runs.is_empty() {
            (empty_metrics.ascent, empty_metrics.descent)
        } else {
            (self.ascent, self.descent)
        };
        TextLine {
            runs: self.runs,
            width: self.width,
            offset_x: self.indent,
            offset_y: 0.0,
            ascent,
            descent,
            indent: self.indent,
            ends_paragraph,
        }
    }
}

struct Breaker<'ctx> {
    style: &'ctx TextStyle,
    measurer: &'ctx dyn TextMeasurer,
    max_width: f32,
    wraps: bool,
    empty_metrics: TextMetrics,
    lines: Vec<TextLine>,
    indent: f32,
}

impl Breaker<'_> {
    fn new_line(&mut self) -> LineBuilder {
        let indent = self.indent;
        self.indent = 0.0;
        LineBuilder::new(indent)
    }

    fn space_width(&self, spaces: &str) -> f32 {
        if spaces.is_empty() {
            return 0.0;
        }
        let count = spaces.chars().count() as f32;
        count.mul_add(
            self.style.word_spacing,
            self.measurer.measure(spaces, self.style).advance,
        )
    }

    fn paragraph(&mut self, paragraph: &str) {
        let mut line = self.new_line();
        for segment in break_segments(paragraph) {
            let metrics = self.measurer.measure(segment.word, self.style);
            if self.wraps && !line.is_empty() && line.extent_with(metrics.advance) > self.max_width
            {
                self.lines.push(line.finish(false, self.empty_metrics));
                line = self.new_line();
            }
            if self.wraps
                && self.style.overflow_wrap == OverflowWrap::BreakWord
                && line.extent_with(metrics.advance) > self.max_width
            {
                line = self.split_word(line, segment.word);
            } else if !segment.word.is_empty() {
                line.place(segment.word, metrics);
            }
            line.pending_space += self.space_width(segment.trailing_space);
            if segment.mandatory {
                self.lines.push(line.finish(true, self.empty_metrics));
                line = self.new_line();
            }
        }
        self.lines.push(line.finish(true, self.empty_metrics));
    }

    /// Place a word that does not fit on any line, character by character.
    fn split_word(&mut self, mut line: LineBuilder, word: &str) -> LineBuilder {
        let mut chunk = String::new();
        for character in word.chars() {
            chunk.push(character);
            let advance = self.measurer.measure(&chunk, self.style).advance;
            if line.extent_with(advance) > self.max_width && chunk.chars().count() > 1 {
                chunk.pop();
                let metrics = self.measurer.measure(&chunk, self.style);
                line.place(&chunk, metrics);
                self.lines.push(line.finish(false, self.empty_metrics));
                line = self.new_line();
                chunk.clear();
                chunk.push(character);
            }
        }
        if !chunk.is_empty() {
            let metrics = self.measurer.measure(&chunk, self.style);
            line.place(&chunk, metrics);
        }
        line
    }
}

/// Break `text` into line boxes no wider than `available_width` and align them.
///
/// An unbounded `available_width` disables wrapping; lines are then aligned
/// against the widest line.
pub fn layout_text(
    text: &str,
    style: &TextStyle,
    available_width: f32,
    measurer: &dyn TextMeasurer,
) -> TextLayout {
    let line_height = style.line_height_px();
    let mut breaker = Breaker {
        style,
        measurer,
        max_width: available_width.max(0.0),
        wraps: style.white_space.wraps() && available_width.is_finite(),
        empty_metrics: measurer.measure("", style),
        lines: Vec::new(),
        indent: style.text_indent,
    };
    for paragraph in process_white_space(text, style.white_space) {
        breaker.paragraph(&paragraph);
    }
    let mut lines = breaker.lines;
    for (index, line) in lines.iter_mut().enumerate() {
        line.offset_y = index as f32 * line_height;
    }
    let width = lines
        .iter()
        .map(|line| (line.indent + line.width).max(0.0))
        .fold(0.0f32, f32::max);
    let mut layout = TextLayout {
        height: lines.len().max(1) as f32 * line_height,
        lines,
        line_height,
        width,
    };
    let align_width = if available_width.is_finite() {
        available_width
    } else {
        width
    };
    layout.align(align_width, style.text_align);
    tracing::trace!(
        lines = layout.lines.len(),
        width = layout.width,
        height = layout.height,
        "layout_text"
    );
    layout
}

/// Widest unbreakable piece of the text (the min-content inline size).
pub fn min_content_width(text: &str, style: &TextStyle, measurer: &dyn TextMeasurer) -> f32 {
    if !style.white_space.wraps() {
        return max_content_width(text, style, measurer);
    }
    process_white_space(text, style.white_space)
        .iter()
        .flat_map(|paragraph| {
            break_segments(paragraph)
                .into_iter()
                .map(|segment| measurer.measure(segment.word, style).advance)
                .collect::<Vec<_>>()
        })
        .fold(style.text_indent.max(0.0), f32::max)
}

/// Width of the text laid out without any soft wrapping (the max-content inline size).
pub fn max_content_width(text: &str, style: &TextStyle, measurer: &dyn TextMeasurer) -> f32 {
    layout_text(text, style, f32::INFINITY, measurer).width
}
