//! Spec: CSS 2.2 §10.6.3 Block-level non-replaced elements in normal flow
//! when `overflow` computes to `visible`

use css_box::Constraints;

use super::UsedAxis;
use crate::box_tree::Node;
use crate::chapter8::ResolvedBox;

/// Spec: §10.6.3 — Used border-box height before content layout.
///
/// An `auto` height depends on the content, except in vertical writing modes
/// where height is the inline axis and fills a bounded available height.
pub fn used_height(node: &Node, boxed: &ResolvedBox, constraints: Constraints) -> UsedAxis {
    if constraints.is_tight_height() {
        return UsedAxis::Forced(constraints.max_height);
    }
    if let Some(height) = boxed.height {
        return UsedAxis::Declared(height);
    }
    if node.style.writing_mode.is_vertical() && constraints.has_bounded_height() {
        return UsedAxis::Fill(constraints.max_height);
    }
    UsedAxis::Auto
}
