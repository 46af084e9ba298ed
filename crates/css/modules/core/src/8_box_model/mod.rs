//! CSS 2.2 Chapter 8 — Box model
//!
//! Resolves margin, padding and border widths and the declared size limits of
//! a box into pixels. Every layout algorithm starts from a [`ResolvedBox`].

pub mod part_8_1_box_dimensions;
pub mod part_8_3_1_collapsing_margins;

pub use part_8_1_box_dimensions::{AxisLimits, ResolvedBox, resolve_box};
pub use part_8_3_1_collapsing_margins::{collapse_margins_pair, collapsed_gap};
