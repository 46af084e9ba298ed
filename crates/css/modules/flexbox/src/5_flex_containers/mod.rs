//! Flex Containers — container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// Row directions put the main axis on the inline axis.
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// A container that may wrap is multi-line even when it holds a single line.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#multi-line>
    #[inline]
    pub const fn is_multi_line(self) -> bool {
        matches!(self, Self::Wrap | Self::WrapReverse)
    }
}
