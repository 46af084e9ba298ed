//! Shorthand constructors for common container shapes, and chained style
//! modifiers on [`Node`].
//!
//! ```ignore
//! let toolbar = hstack(vec![fixed(80.0, 24.0), spacer(), fixed(80.0, 24.0)])
//!     .with_padding(8.0)
//!     .with_gap(4.0);
//! ```

use css_core::{Display, Node, Position, Sides, Style};
use css_flexbox::{AlignItems, FlexDirection, FlexWrap, JustifyContent};
use css_grid::GridTrackSize;
use css_values_units::{Dimension, Length};
use css_writing_modes::WritingMode;

/// Flex row: children run left to right.
pub fn hstack(children: Vec<Node>) -> Node {
    flex(FlexDirection::Row, children)
}

/// Flex column: children run top to bottom.
pub fn vstack(children: Vec<Node>) -> Node {
    flex(FlexDirection::Column, children)
}

fn flex(direction: FlexDirection, children: Vec<Node>) -> Node {
    Node::with_children(
        Style {
            display: Display::Flex,
            flex_direction: direction,
            ..Style::default()
        },
        children,
    )
}

/// Overlapping children: a single-cell grid with every child placed in
/// row 1, column 1. The stack is as large as its largest child.
pub fn zstack(children: Vec<Node>) -> Node {
    let layered = children
        .into_iter()
        .map(|child| child.with_grid_cell(1, 1))
        .collect();
    Node::with_children(
        Style {
            display: Display::Grid,
            ..Style::default()
        },
        layered,
    )
}

/// Empty box that takes up the free space of a stack.
pub fn spacer() -> Node {
    Node::new(Style {
        flex_grow: 1.0,
        ..Style::default()
    })
}

/// Box of exactly `width` × `height` pixels.
pub fn fixed(width: f32, height: f32) -> Node {
    Node::default().with_size(width, height)
}

/// Text leaf with the default text style.
pub fn text(content: impl Into<String>) -> Node {
    Node::text_leaf(content, Style::default())
}

/// Grid container with explicit column and row tracks; children are
/// auto-placed row by row.
pub fn grid(columns: Vec<GridTrackSize>, rows: Vec<GridTrackSize>) -> Node {
    Node::new(Style {
        display: Display::Grid,
        grid_template_columns: columns,
        grid_template_rows: rows,
        ..Style::default()
    })
}

/// `count` copies of `track`, for uniform grids.
pub fn tracks(count: usize, track: GridTrackSize) -> Vec<GridTrackSize> {
    vec![track; count]
}

/// Chained style modifiers.
///
/// Every modifier consumes the node and returns it, so trees can be written
/// as one expression.
pub trait NodeExt: Sized {
    /// Apply an arbitrary edit to the style.
    #[must_use]
    fn with_style(self, edit: impl FnOnce(&mut Style)) -> Self;

    #[must_use]
    fn with_width(self, width: impl Into<Dimension>) -> Self {
        let width = width.into();
        self.with_style(|style| style.width = width)
    }

    #[must_use]
    fn with_height(self, height: impl Into<Dimension>) -> Self {
        let height = height.into();
        self.with_style(|style| style.height = height)
    }

    #[must_use]
    fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    #[must_use]
    fn with_min_size(self, width: f32, height: f32) -> Self {
        self.with_style(|style| {
            style.min_width = Dimension::px(width);
            style.min_height = Dimension::px(height);
        })
    }

    #[must_use]
    fn with_max_size(self, width: f32, height: f32) -> Self {
        self.with_style(|style| {
            style.max_width = Dimension::px(width);
            style.max_height = Dimension::px(height);
        })
    }

    #[must_use]
    fn with_aspect_ratio(self, ratio: f32) -> Self {
        self.with_style(|style| style.aspect_ratio = Some(ratio))
    }

    /// Same padding on all four sides.
    #[must_use]
    fn with_padding(self, padding: f32) -> Self {
        self.with_style(|style| style.padding = Sides::all(Length::px(padding)))
    }

    /// Same margin on all four sides.
    #[must_use]
    fn with_margin(self, margin: f32) -> Self {
        self.with_style(|style| style.margin = Sides::all(Dimension::px(margin)))
    }

    #[must_use]
    fn with_border(self, width: f32) -> Self {
        self.with_style(|style| style.border = Sides::all(Length::px(width)))
    }

    /// Row and column gap.
    #[must_use]
    fn with_gap(self, gap: f32) -> Self {
        self.with_style(|style| style.gap = Length::px(gap))
    }

    #[must_use]
    fn with_flex_grow(self, grow: f32) -> Self {
        self.with_style(|style| style.flex_grow = grow)
    }

    #[must_use]
    fn with_flex_shrink(self, shrink: f32) -> Self {
        self.with_style(|style| style.flex_shrink = shrink)
    }

    #[must_use]
    fn with_flex_basis(self, basis: impl Into<Dimension>) -> Self {
        let basis = basis.into();
        self.with_style(|style| style.flex_basis = basis)
    }

    #[must_use]
    fn with_wrap(self, wrap: FlexWrap) -> Self {
        self.with_style(|style| style.flex_wrap = wrap)
    }

    #[must_use]
    fn with_justify_content(self, justify: JustifyContent) -> Self {
        self.with_style(|style| style.justify_content = justify)
    }

    #[must_use]
    fn with_align_items(self, align: AlignItems) -> Self {
        self.with_style(|style| style.align_items = align)
    }

    #[must_use]
    fn with_align_self(self, align: AlignItems) -> Self {
        self.with_style(|style| style.align_self = align)
    }

    /// 1-based grid lines of the cell the node starts in.
    #[must_use]
    fn with_grid_cell(self, row: i32, column: i32) -> Self {
        self.with_style(|style| {
            style.grid_row_start = Some(row);
            style.grid_column_start = Some(column);
        })
    }

    #[must_use]
    fn with_grid_span(self, rows: usize, columns: usize) -> Self {
        self.with_style(|style| {
            style.grid_row_span = rows;
            style.grid_column_span = columns;
        })
    }

    #[must_use]
    fn with_grid_area(self, area: impl Into<String>) -> Self {
        let area = area.into();
        self.with_style(|style| style.grid_area = Some(area))
    }

    /// Position scheme plus the `top`/`right`/`bottom`/`left` offsets in
    /// pixels; `None` is `auto`.
    #[must_use]
    fn with_position(self, position: Position, inset: Sides<Option<f32>>) -> Self {
        let px = |side: Option<f32>| side.map(Length::px);
        let inset = Sides {
            top: px(inset.top),
            right: px(inset.right),
            bottom: px(inset.bottom),
            left: px(inset.left),
        };
        self.with_style(|style| {
            style.position = position;
            style.inset = inset;
        })
    }

    #[must_use]
    fn with_writing_mode(self, mode: WritingMode) -> Self {
        self.with_style(|style| style.writing_mode = mode)
    }

    #[must_use]
    fn hidden(self) -> Self {
        self.with_style(|style| style.display = Display::None)
    }
}

impl NodeExt for Node {
    fn with_style(mut self, edit: impl FnOnce(&mut Style)) -> Self {
        edit(&mut self.style);
        self
    }
}
