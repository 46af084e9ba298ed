//! Styled box tree and per-pass layout state.
//!
//! Spec: CSS 2.2 §9 Visual Formatting Model
//!   - <https://www.w3.org/TR/CSS22/visuren.html>
//!
//! Layout is computed by passing constraints down the tree and returning
//! border-box sizes back up. Parents write their children's rectangles.

pub mod layout_context;

use css_box::Rect;
use css_text::TextLayout;

use crate::style_model::{Display, Style};

pub use layout_context::{LayoutContext, Measured};

/// A styled box with its children and layout output.
///
/// Only `rect`, `baseline` and `text_layout` are written by layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub style: Style,
    pub children: Vec<Self>,
    /// Content of a text leaf.
    pub text: Option<String>,
    /// Border box relative to the parent's content-box origin.
    pub rect: Rect,
    /// First baseline, measured from the top of the border box.
    pub baseline: Option<f32>,
    /// Line boxes of a text leaf.
    pub text_layout: Option<TextLayout>,
}

impl Node {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_children(style: Style, children: Vec<Self>) -> Self {
        Self {
            style,
            children,
            ..Self::default()
        }
    }

    /// A text leaf.
    pub fn text_leaf(content: impl Into<String>, style: Style) -> Self {
        Self {
            style,
            text: Some(content.into()),
            ..Self::default()
        }
    }

    #[inline]
    pub const fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Takes part in its parent's layout: generates a box and is not
    /// absolutely or fixed positioned.
    #[inline]
    pub fn is_in_flow(&self) -> bool {
        self.style.display != Display::None && !self.style.position.is_out_of_flow()
    }
}
