//! CSS Flexible Box Layout Module Level 1 — flex container and item layout.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! The solver here is tree-agnostic: callers describe items as [`FlexChild`]
//! records in main/cross terms and map the resulting [`FlexPlacement`]s back
//! to physical space.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §5 — Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 — Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 — Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 — Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 — Flex Layout Algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

pub use chapter5::{FlexDirection, FlexWrap};
pub use chapter6::ItemRef;
pub use chapter7::{Axes, order_key, resolve_axes, sort_items_by_order_stable};
pub use chapter8::{AlignContent, AlignItems, JustifyContent};
pub use chapter9::{
    BaselineMetrics, CrossMeasure, FlexChild, FlexContainerInputs, FlexLayoutOutput, FlexLine,
    FlexPlacement, KeepMeasuredCross, LineRange, MeasureCross, align_content_params,
    break_into_lines, distribute_grow, distribute_shrink, justify_params, layout_flex,
};
