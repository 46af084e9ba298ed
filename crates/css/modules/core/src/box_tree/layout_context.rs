//! Per-pass layout context: length resolution, text measurement and the
//! measure cache.

use core::cell::RefCell;
use core::ptr;
use std::collections::HashMap;

use css_box::{Constraints, Size};
use css_text::{TextMeasurer, TextStyle};
use css_values_units::{Length, LengthContext, LengthUnit};

use super::Node;

/// Border-box size and first baseline of a node under some constraints.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measured {
    pub size: Size,
    pub baseline: Option<f32>,
}

/// Node address plus the bit patterns of the constraints it was measured under.
type CacheKey = (usize, [u32; 4]);

/// Everything a layout pass needs besides the tree itself.
///
/// Create one per pass: measurements are cached by node identity, so a
/// context must not outlive changes to the tree it measured.
pub struct LayoutContext<'measurer> {
    pub lengths: LengthContext,
    pub measurer: &'measurer dyn TextMeasurer,
    measure_cache: RefCell<HashMap<CacheKey, Measured>>,
}

impl<'measurer> LayoutContext<'measurer> {
    pub fn new(lengths: LengthContext, measurer: &'measurer dyn TextMeasurer) -> Self {
        Self {
            lengths,
            measurer,
            measure_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve a length to pixels for an element with the given text style.
    pub fn px(&self, length: Length, text: &TextStyle) -> f32 {
        let ch_advance = (length.unit == LengthUnit::Ch).then(|| {
            let reference = self.lengths.ch_reference_char.to_string();
            self.measurer.measure(&reference, text).advance
        });
        length.resolve(&self.lengths, text.font_size, ch_advance)
    }

    /// Forget all cached measurements.
    pub fn clear_cache(&self) {
        self.measure_cache.borrow_mut().clear();
    }

    /// Number of cached measurements.
    pub fn cached_measurements(&self) -> usize {
        self.measure_cache.borrow().len()
    }

    fn key(node: &Node, constraints: Constraints) -> CacheKey {
        (
            ptr::from_ref(node).addr(),
            [
                constraints.min_width.to_bits(),
                constraints.max_width.to_bits(),
                constraints.min_height.to_bits(),
                constraints.max_height.to_bits(),
            ],
        )
    }

    pub(crate) fn cached(&self, node: &Node, constraints: Constraints) -> Option<Measured> {
        self.measure_cache
            .borrow()
            .get(&Self::key(node, constraints))
            .copied()
    }

    pub(crate) fn store(&self, node: &Node, constraints: Constraints, measured: Measured) {
        self.measure_cache
            .borrow_mut()
            .insert(Self::key(node, constraints), measured);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_text::ApproximateTextMeasurer;

    /// # Panics
    /// Panics if relative units ignore the context or the measured `ch` advance.
    #[test]
    fn resolves_relative_lengths() {
        let ctx = LayoutContext::new(LengthContext::default(), &ApproximateTextMeasurer);
        let text = TextStyle::default();
        assert!((ctx.px(Length::rem(2.0), &text) - 32.0).abs() < 0.001);
        assert!((ctx.px(Length::vw(10.0), &text) - 80.0).abs() < 0.001);
        assert!((ctx.px(Length::ch(2.0), &text) - 19.2).abs() < 0.001);
    }

    /// # Panics
    /// Panics if a stored measurement is not returned for the same node and constraints.
    #[test]
    fn cache_is_keyed_by_node_and_constraints() {
        let ctx = LayoutContext::new(LengthContext::default(), &ApproximateTextMeasurer);
        let node = Node::default();
        let limits = Constraints::loose(100.0, 50.0);
        let measured = Measured {
            size: Size::new(10.0, 20.0),
            baseline: None,
        };
        ctx.store(&node, limits, measured);
        assert_eq!(ctx.cached(&node, limits), Some(measured));
        assert_eq!(ctx.cached(&node, Constraints::unconstrained()), None);
        ctx.clear_cache();
        assert_eq!(ctx.cached_measurements(), 0);
    }
}
