//! Flex Items
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>
//!
//! Callers filter out `display: none` and out-of-flow children before
//! building item records; the solver only sees in-flow items.

/// Opaque caller handle carried from a [`FlexChild`](crate::FlexChild) to
/// its [`FlexPlacement`](crate::FlexPlacement).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemRef(pub u64);
