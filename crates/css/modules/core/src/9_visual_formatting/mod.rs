//! CSS 2.2 Chapter 9 — Visual formatting model
//!
//! Normal-flow block layout and the positioning schemes applied after it.

pub mod part_9_3_positioning_schemes;
pub mod part_9_4_1_block_formatting_context;
pub mod part_9_4_3_relative_positioning;

pub use part_9_3_positioning_schemes::layout_with_positioning;
pub use part_9_4_1_block_formatting_context::compute_block;
pub use part_9_4_3_relative_positioning::relative_offset;
