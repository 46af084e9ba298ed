//! Spec: CSS 2.2 §8.1 Box dimensions; CSS Box Sizing L3 §3 `box-sizing`
//!
//! Declared sizes and min/max limits are stored as border-box pixels so the
//! layout algorithms never look at `box-sizing` again.

use css_box::clamp::clamp_min_max;
use css_box::{BoxSides, BoxSizing, Edges, UNBOUNDED, compute_box_sides, content_from_declared};
use css_values_units::{Dimension, Length};
use css_writing_modes::{LogicalEdges, WritingMode};

use crate::box_tree::LayoutContext;
use crate::style_model::{Sides, Style};

/// Minimum and maximum border-box size along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: UNBOUNDED,
        }
    }
}

impl AxisLimits {
    /// Clamp into `[min, max]`; `min` wins when the pair is inverted.
    #[inline]
    pub fn clamp(self, value: f32) -> f32 {
        clamp_min_max(value, self.min, self.max)
    }
}

/// Box edges and declared sizes of one node, resolved to pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedBox {
    pub sides: BoxSides,
    /// Margins declared `auto`; they are zero in `sides`.
    pub auto_margins: Sides<bool>,
    /// Declared border-box width when `width` is a length.
    pub width: Option<f32>,
    /// Declared border-box height when `height` is a length.
    pub height: Option<f32>,
    pub width_limits: AxisLimits,
    pub height_limits: AxisLimits,
}

impl ResolvedBox {
    #[inline]
    pub fn horizontal_inset(&self) -> f32 {
        self.sides.horizontal_inset()
    }

    #[inline]
    pub fn vertical_inset(&self) -> f32 {
        self.sides.vertical_inset()
    }

    /// Padding plus border on each side.
    pub fn inset_edges(&self) -> Edges {
        let padding = self.sides.padding;
        let border = self.sides.border;
        Edges::new(
            padding.top + border.top,
            padding.right + border.right,
            padding.bottom + border.bottom,
            padding.left + border.left,
        )
    }

    pub const fn logical_margins(&self, mode: WritingMode) -> LogicalEdges {
        LogicalEdges::from_physical(self.sides.margin, mode)
    }

    pub fn logical_inset(&self, mode: WritingMode) -> LogicalEdges {
        LogicalEdges::from_physical(self.inset_edges(), mode)
    }

    /// `auto` margin flags at the `(start, end)` of the inline axis of
    /// `mode`, or of its block axis when `inline` is false.
    pub fn auto_margins_along(&self, mode: WritingMode, inline: bool) -> (bool, bool) {
        let flag = |is_auto: bool| f32::from(u8::from(is_auto));
        let auto = self.auto_margins;
        let flags = LogicalEdges::from_physical(
            Edges::new(
                flag(auto.top),
                flag(auto.right),
                flag(auto.bottom),
                flag(auto.left),
            ),
            mode,
        );
        if inline {
            (flags.inline_start > 0.0, flags.inline_end > 0.0)
        } else {
            (flags.block_start > 0.0, flags.block_end > 0.0)
        }
    }

    /// Declared border-box size along the inline axis of `mode`.
    pub const fn declared_inline(&self, mode: WritingMode) -> Option<f32> {
        if mode.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Declared border-box size along the block axis of `mode`.
    pub const fn declared_block(&self, mode: WritingMode) -> Option<f32> {
        if mode.is_vertical() {
            self.width
        } else {
            self.height
        }
    }

    pub const fn inline_limits(&self, mode: WritingMode) -> AxisLimits {
        if mode.is_vertical() {
            self.height_limits
        } else {
            self.width_limits
        }
    }

    pub const fn block_limits(&self, mode: WritingMode) -> AxisLimits {
        if mode.is_vertical() {
            self.width_limits
        } else {
            self.height_limits
        }
    }
}

/// Spec: §8.1 — Resolve the box edges and declared sizes of `style`.
///
/// Padding and border clamp to zero; margins may stay negative. Intrinsic
/// keywords on `min-*`/`max-*` are ignored.
pub fn resolve_box(style: &Style, ctx: &LayoutContext<'_>) -> ResolvedBox {
    let px = |length: Length| ctx.px(length, &style.text);
    let margin_px = |dimension: Dimension| dimension.length().map_or(0.0, px);
    let margin = Edges::new(
        margin_px(style.margin.top),
        margin_px(style.margin.right),
        margin_px(style.margin.bottom),
        margin_px(style.margin.left),
    );
    let padding = Edges::new(
        px(style.padding.top),
        px(style.padding.right),
        px(style.padding.bottom),
        px(style.padding.left),
    );
    let border = Edges::new(
        px(style.border.top),
        px(style.border.right),
        px(style.border.bottom),
        px(style.border.left),
    );
    let sides = compute_box_sides(margin, padding, border);
    let horizontal = sides.horizontal_inset();
    let vertical = sides.vertical_inset();
    let border_box = |dimension: Dimension, inset: f32| {
        dimension
            .length()
            .map(|length| to_border_box(px(length), inset, style.box_sizing))
    };
    let limits = |min: Dimension, max: Dimension, inset: f32| AxisLimits {
        min: border_box(min, inset).unwrap_or(0.0),
        max: border_box(max, inset).unwrap_or(UNBOUNDED),
    };
    ResolvedBox {
        sides,
        auto_margins: Sides {
            top: style.margin.top.is_auto(),
            right: style.margin.right.is_auto(),
            bottom: style.margin.bottom.is_auto(),
            left: style.margin.left.is_auto(),
        },
        width: border_box(style.width, horizontal),
        height: border_box(style.height, vertical),
        width_limits: limits(style.min_width, style.max_width, horizontal),
        height_limits: limits(style.min_height, style.max_height, vertical),
    }
}

/// Border-box size for a declared size: never smaller than padding plus border.
#[inline]
fn to_border_box(declared: f32, inset: f32, sizing: BoxSizing) -> f32 {
    content_from_declared(declared, inset, sizing) + inset
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_text::ApproximateTextMeasurer;
    use css_values_units::LengthContext;

    fn padded_style(sizing: BoxSizing) -> Style {
        Style {
            width: Dimension::px(100.0),
            min_height: Dimension::px(30.0),
            max_width: Dimension::px(80.0),
            padding: Sides::all(Length::px(10.0)),
            border: Sides::all(Length::px(2.0)),
            box_sizing: sizing,
            margin: Sides::symmetric(Dimension::px(5.0), Dimension::Auto),
            ..Style::default()
        }
    }

    /// # Panics
    /// Panics if content-box sizes are not widened by padding and border.
    #[test]
    fn content_box_sizes_grow_by_inset() {
        let ctx = LayoutContext::new(LengthContext::default(), &ApproximateTextMeasurer);
        let boxed = resolve_box(&padded_style(BoxSizing::ContentBox), &ctx);
        assert!(boxed.width.is_some_and(|width| (width - 124.0).abs() < 0.001));
        assert!((boxed.width_limits.max - 104.0).abs() < 0.001);
        assert!((boxed.height_limits.min - 54.0).abs() < 0.001);
        assert!(boxed.height.is_none());
        assert!(boxed.auto_margins.left && !boxed.auto_margins.top);
        assert!((boxed.sides.margin.left).abs() < 0.001);
    }

    /// # Panics
    /// Panics if border-box sizes are altered or allowed below the inset.
    #[test]
    fn border_box_sizes_are_kept() {
        let ctx = LayoutContext::new(LengthContext::default(), &ApproximateTextMeasurer);
        let boxed = resolve_box(&padded_style(BoxSizing::BorderBox), &ctx);
        assert!(boxed.width.is_some_and(|width| (width - 100.0).abs() < 0.001));
        let tiny = Style {
            width: Dimension::px(4.0),
            ..padded_style(BoxSizing::BorderBox)
        };
        let clamped = resolve_box(&tiny, &ctx);
        assert!(clamped.width.is_some_and(|width| (width - 24.0).abs() < 0.001));
    }

    /// # Panics
    /// Panics if logical accessors do not swap axes in vertical modes.
    #[test]
    fn logical_accessors_follow_writing_mode() {
        let ctx = LayoutContext::new(LengthContext::default(), &ApproximateTextMeasurer);
        let boxed = resolve_box(&padded_style(BoxSizing::BorderBox), &ctx);
        assert_eq!(boxed.declared_block(WritingMode::VerticalRl), boxed.width);
        assert_eq!(boxed.declared_inline(WritingMode::HorizontalTb), boxed.width);
        assert!((boxed.logical_inset(WritingMode::VerticalLr).block_start - 12.0).abs() < 0.001);
        assert!((boxed.width_limits.clamp(500.0) - 80.0).abs() < 0.001);
        assert_eq!(boxed.auto_margins_along(WritingMode::HorizontalTb, true), (true, true));
        assert_eq!(boxed.auto_margins_along(WritingMode::VerticalRl, true), (false, false));
    }
}
