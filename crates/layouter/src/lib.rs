//! Layout entry point for hosts.
//!
//! A [`Layouter`] owns the viewport settings and the text measurer, builds a
//! fresh [`LayoutContext`] for each pass and runs normal-flow layout followed
//! by positioned layout over a [`Node`] tree. The [`builder`] module has
//! shorthand constructors for common trees; [`LayoutSnapshot`] copies the
//! result out for rendering or comparison.

pub mod builder;
mod config;
mod snapshot;

use css_core::{LayoutContext, layout_with_positioning};
use css_text::ApproximateTextMeasurer;
use log::debug;
use tracing::debug_span;

pub use builder::NodeExt;
pub use config::LayoutConfig;
pub use snapshot::{LayoutSnapshot, LineSnapshot};

pub use css_core::{
    BoxSizing, Constraints, Display, Measured, Node, Point, Position, Rect, Sides, Size, Style,
    layout, layout_block, layout_flexbox, layout_grid, measure,
};
pub use css_flexbox::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
pub use css_grid::{GridAlignment, GridAutoFlow, GridTrackSize, TrackBreadth, TrackRepeat};
pub use css_text::{TextAlign, TextMeasurer, TextMetrics, TextStyle, WhiteSpace};
pub use css_values_units::{Dimension, Length, LengthUnit};
pub use css_writing_modes::WritingMode;

/// Runs layout passes over box trees with one configuration.
pub struct Layouter<'measurer> {
    config: LayoutConfig,
    measurer: &'measurer dyn TextMeasurer,
}

impl Layouter<'static> {
    /// A layouter that measures text with [`ApproximateTextMeasurer`].
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_measurer(config, &ApproximateTextMeasurer)
    }
}

impl Default for Layouter<'static> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<'measurer> Layouter<'measurer> {
    pub fn with_measurer(config: LayoutConfig, measurer: &'measurer dyn TextMeasurer) -> Self {
        Self { config, measurer }
    }

    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `root` inside the viewport and place its positioned boxes.
    ///
    /// The root is placed at the origin. Returns its border-box size.
    pub fn layout(&self, root: &mut Node) -> Size {
        self.layout_with(root, self.config.constraints())
    }

    /// Like [`Layouter::layout`], under caller-chosen root constraints.
    pub fn layout_with(&self, root: &mut Node, constraints: Constraints) -> Size {
        let _span = debug_span!(
            "layouter.layout",
            viewport_width = self.config.viewport_width,
            viewport_height = self.config.viewport_height
        )
        .entered();
        let ctx = LayoutContext::new(self.config.length_context(), self.measurer);
        root.rect.x = 0.0;
        root.rect.y = 0.0;
        let size = layout_with_positioning(root, constraints, &ctx, self.config.viewport());
        debug!(
            target: "layouter",
            "[LAYOUT] root={:.3}x{:.3} measured={}",
            size.width,
            size.height,
            ctx.cached_measurements()
        );
        size
    }

    /// Size `root` under `constraints` without writing to the tree.
    pub fn measure(&self, root: &Node, constraints: Constraints) -> Measured {
        let ctx = LayoutContext::new(self.config.length_context(), self.measurer);
        measure(root, constraints, &ctx)
    }

    /// Lay out `root` and copy the resulting geometry.
    pub fn snapshot(&self, root: &mut Node) -> LayoutSnapshot {
        self.layout(root);
        LayoutSnapshot::capture(root)
    }
}
