//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use css_writing_modes::WritingMode;

use crate::chapter5::FlexDirection;

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// True when the main axis is the inline axis (row directions).
    pub main_is_inline: bool,
    /// True when main axis is reversed (row-reverse or column-reverse)
    pub main_reverse: bool,
    /// True when the main axis runs along physical x.
    pub main_is_horizontal: bool,
}

/// Resolve main/cross axes and direction given flex-direction and writing mode.
///
/// Rows follow the inline axis and columns the block axis, so a vertical
/// writing mode turns a row container's main axis vertical.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection, writing_mode: WritingMode) -> Axes {
    let main_is_inline = direction.is_row();
    Axes {
        main_is_inline,
        main_reverse: direction.is_reverse(),
        main_is_horizontal: main_is_inline != writing_mode.is_vertical(),
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so sorting by this key respects DOM order ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

/// Stable sort by `order`: returns indices into `orders`, ties kept in input order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable(orders: &[i32]) -> Vec<usize> {
    let mut keys: Vec<(i32, usize)> = orders
        .iter()
        .enumerate()
        .map(|(original_index, order)| order_key(*order, original_index))
        .collect();
    keys.sort_unstable();
    keys.into_iter().map(|(_, index)| index).collect()
}
