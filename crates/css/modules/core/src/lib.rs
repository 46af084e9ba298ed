//! Core of the layout engine: the styled box tree, the display-mode
//! dispatcher and the block, flex, grid and text algorithms over it.
//!
//! Callers build a [`Node`] tree, create one [`LayoutContext`] per pass and
//! call [`layout`] (or [`layout_with_positioning`] to also place positioned
//! boxes). Layout never fails: every size is clamped into range instead.

pub mod box_tree;
mod orchestrator;
mod sizing;
pub mod style_model;

// Chapter modules mapped to the CSS 2.2 spec structure.
// Spec: §8 — Box model
#[path = "8_box_model/mod.rs"]
mod chapter8;
// Spec: §9 — Visual formatting model
#[path = "9_visual_formatting/mod.rs"]
mod chapter9;
// Spec: §10 — Visual formatting model details
#[path = "10_visual_details/mod.rs"]
mod chapter10;

pub use box_tree::{LayoutContext, Measured, Node};
pub use chapter8::{AxisLimits, ResolvedBox, collapse_margins_pair, collapsed_gap, resolve_box};
pub use chapter9::{layout_with_positioning, relative_offset};
pub use chapter10::{FlowSize, UsedAxis, resolve_flow_size};
pub use css_box::{BoxSizing, Constraints, Point, Rect, Size};
pub use orchestrator::{
    ChildFrame, Fragment, layout, layout_block, layout_flexbox, layout_grid, measure,
};
pub use sizing::{
    fit_content_width, max_content_contribution, max_content_width, min_content_contribution,
    min_content_width,
};
pub use style_model::{Display, Position, Sides, Style};
