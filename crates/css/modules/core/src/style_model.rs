//! Flat computed-style record read by every layout algorithm.
//!
//! Properties irrelevant to a node's display mode are ignored. Values are
//! already cascaded; lengths keep their units and are resolved at layout time.

use css_box::BoxSizing;
use css_flexbox::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
use css_grid::{GridAlignment, GridAutoFlow, GridTrackSize, TrackRepeat};
use css_text::TextStyle;
use css_values_units::{Dimension, Length};
use css_writing_modes::WritingMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Flex,
    Grid,
    /// Generates no box; children are skipped.
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    /// Laid out like `relative`; there is no scroll container to stick to.
    Sticky,
}

impl Position {
    /// Absolutely and fixed positioned boxes are taken out of normal flow.
    #[inline]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }

    /// Relative and sticky boxes are shifted from their flow position.
    #[inline]
    pub const fn is_offset_in_flow(self) -> bool {
        matches!(self, Self::Relative | Self::Sticky)
    }
}

/// Four physical sides of a property.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    #[inline]
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Computed style of one node.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub display: Display,
    pub position: Position,
    /// `top`/`right`/`bottom`/`left`; `None` is `auto`.
    pub inset: Sides<Option<Length>>,
    pub box_sizing: BoxSizing,
    pub writing_mode: WritingMode,

    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    /// `Auto` means `none`.
    pub max_width: Dimension,
    /// `Auto` means `none`.
    pub max_height: Dimension,
    /// Preferred width / height ratio.
    pub aspect_ratio: Option<f32>,

    /// `Dimension::Auto` margins absorb free space in flex layout; elsewhere they are zero.
    pub margin: Sides<Dimension>,
    pub padding: Sides<Length>,
    pub border: Sides<Length>,

    /// `gap` shorthand, used when the longhand is absent.
    pub gap: Length,
    pub row_gap: Option<Length>,
    pub column_gap: Option<Length>,

    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,
    pub order: i32,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignItems,
    pub align_content: AlignContent,

    pub grid_template_columns: Vec<GridTrackSize>,
    pub grid_template_rows: Vec<GridTrackSize>,
    /// Repetition placed after the explicit columns.
    pub grid_repeat_columns: Option<TrackRepeat>,
    pub grid_repeat_rows: Option<TrackRepeat>,
    pub grid_auto_columns: GridTrackSize,
    pub grid_auto_rows: GridTrackSize,
    pub grid_auto_flow: GridAutoFlow,
    /// `grid-template-areas`, one string per row.
    pub grid_template_areas: Vec<String>,
    pub grid_row_start: Option<i32>,
    pub grid_row_end: Option<i32>,
    pub grid_column_start: Option<i32>,
    pub grid_column_end: Option<i32>,
    pub grid_row_span: usize,
    pub grid_column_span: usize,
    pub grid_area: Option<String>,
    pub justify_items: GridAlignment,
    pub justify_self: GridAlignment,

    pub text: TextStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            display: Display::Block,
            position: Position::Static,
            inset: Sides::all(None),
            box_sizing: BoxSizing::ContentBox,
            writing_mode: WritingMode::HorizontalTb,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            max_width: Dimension::Auto,
            max_height: Dimension::Auto,
            aspect_ratio: None,
            margin: Sides::all(Dimension::px(0.0)),
            padding: Sides::all(Length::ZERO),
            border: Sides::all(Length::ZERO),
            gap: Length::ZERO,
            row_gap: None,
            column_gap: None,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Nowrap,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,
            order: 0,
            justify_content: JustifyContent::Unset,
            align_items: AlignItems::Unset,
            align_self: AlignItems::Unset,
            align_content: AlignContent::Unset,
            grid_template_columns: Vec::new(),
            grid_template_rows: Vec::new(),
            grid_repeat_columns: None,
            grid_repeat_rows: None,
            grid_auto_columns: GridTrackSize::auto(),
            grid_auto_rows: GridTrackSize::auto(),
            grid_auto_flow: GridAutoFlow::Row,
            grid_template_areas: Vec::new(),
            grid_row_start: None,
            grid_row_end: None,
            grid_column_start: None,
            grid_column_end: None,
            grid_row_span: 1,
            grid_column_span: 1,
            grid_area: None,
            justify_items: GridAlignment::Unset,
            justify_self: GridAlignment::Unset,
            text: TextStyle::default(),
        }
    }
}

impl Style {
    /// Gap between rows, falling back to the `gap` shorthand.
    #[inline]
    pub fn row_gap(&self) -> Length {
        self.row_gap.unwrap_or(self.gap)
    }

    /// Gap between columns, falling back to the `gap` shorthand.
    #[inline]
    pub fn column_gap(&self) -> Length {
        self.column_gap.unwrap_or(self.gap)
    }
}
