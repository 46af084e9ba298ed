//! Spec: CSS 2.2 §10.3.3 Block-level, non-replaced elements in normal flow;
//! CSS Box Sizing L3 §3.2 intrinsic sizing keywords

use css_box::{BoxSizing, Constraints};
use css_values_units::Dimension;

use crate::box_tree::{LayoutContext, Node};
use crate::chapter8::{AxisLimits, ResolvedBox};
use crate::sizing::{fit_content_width, max_content_width, min_content_width};

/// How a box's border-box size along one physical axis is determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UsedAxis {
    /// Imposed by the parent through tight constraints; min/max do not apply.
    Forced(f32),
    /// A length or an intrinsic sizing keyword.
    Declared(f32),
    /// `auto` inline size stretched over the available space.
    Fill(f32),
    /// Taken from the content after layout.
    Auto,
}

impl UsedAxis {
    pub const fn size(self) -> Option<f32> {
        match self {
            Self::Forced(size) | Self::Declared(size) | Self::Fill(size) => Some(size),
            Self::Auto => None,
        }
    }

    /// The size with min/max applied, unless it was forced.
    pub fn settle(self, limits: AxisLimits) -> Option<f32> {
        match self {
            Self::Forced(size) => Some(size),
            Self::Declared(size) | Self::Fill(size) => Some(limits.clamp(size)),
            Self::Auto => None,
        }
    }
}

/// Spec: §10.3.3 — Used border-box width before content layout.
///
/// Intrinsic keywords only apply in horizontal writing modes, where width is
/// the inline axis; an `auto` width fills a bounded available width there.
pub fn used_width(
    node: &Node,
    boxed: &ResolvedBox,
    constraints: Constraints,
    ctx: &LayoutContext<'_>,
) -> UsedAxis {
    if constraints.is_tight_width() {
        return UsedAxis::Forced(constraints.max_width);
    }
    let horizontal = !node.style.writing_mode.is_vertical();
    match node.style.width {
        Dimension::Length(_) => boxed.width.map_or(UsedAxis::Auto, UsedAxis::Declared),
        Dimension::MinContent if horizontal => UsedAxis::Declared(min_content_width(node, ctx)),
        Dimension::MaxContent if horizontal => UsedAxis::Declared(max_content_width(node, ctx)),
        Dimension::FitContent(limit) if horizontal => {
            let inset = match node.style.box_sizing {
                BoxSizing::ContentBox => boxed.horizontal_inset(),
                BoxSizing::BorderBox => 0.0,
            };
            let limit = limit.map(|length| ctx.px(length, &node.style.text) + inset);
            UsedAxis::Declared(fit_content_width(node, ctx, constraints.max_width, limit))
        }
        _ if horizontal && constraints.has_bounded_width() => UsedAxis::Fill(constraints.max_width),
        _ => UsedAxis::Auto,
    }
}
