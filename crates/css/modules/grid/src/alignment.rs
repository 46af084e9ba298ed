//! Box alignment in grid containers.
//!
//! Spec: §11 Alignment and Spacing
//! <https://www.w3.org/TR/css-grid-2/#alignment>

use log::debug;

/// `justify-items`/`align-items` and their `-self` overrides.
///
/// Spec: §11.1 Aligning with `*-self` and `*-items`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAlignment {
    /// `normal`/`auto`: defers to the container, then to stretch.
    #[default]
    Unset,
    /// Start alignment
    Start,
    /// End alignment
    End,
    /// Center alignment
    Center,
    /// Stretch to fill
    Stretch,
    /// Align first baselines across a row; start on the inline axis.
    Baseline,
}

impl GridAlignment {
    /// Resolve an item's `*-self` value against the container's `*-items`.
    ///
    /// Items with a preferred aspect ratio default to start instead of stretch.
    pub const fn resolve_self(self, container: Self, has_aspect_ratio: bool) -> Self {
        let picked = match self {
            Self::Unset => container,
            other => other,
        };
        match picked {
            Self::Unset if has_aspect_ratio => Self::Start,
            Self::Unset => Self::Stretch,
            other => other,
        }
    }
}

/// `justify-content`/`align-content` for the grid as a whole.
///
/// Spec: §11.5 Aligning the Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentDistribution {
    #[default]
    Unset,
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    /// Add free space equally to every track.
    Stretch,
}

impl ContentDistribution {
    /// `Unset` resolves to stretch.
    pub const fn resolve(self) -> Self {
        match self {
            Self::Unset => Self::Stretch,
            other => other,
        }
    }
}

/// Distribute free space in a definite container over tracks.
///
/// Returns the offset of the first track and the extra spacing between
/// tracks. `Stretch` grows `sizes` in place instead. Negative free space is
/// treated as zero.
pub fn distribute_content(
    distribution: ContentDistribution,
    container_size: f32,
    sizes: &mut [f32],
    gaps_total: f32,
) -> (f32, f32) {
    let count = sizes.len();
    let used: f32 = sizes.iter().sum::<f32>() + gaps_total;
    let free = (container_size - used).max(0.0);
    let resolved = distribution.resolve();
    debug!(
        target: "css::grid::content",
        "[GRID-CONTENT] mode={resolved:?} container={container_size:.3} used={used:.3} free={free:.3} tracks={count}"
    );
    if count == 0 || free <= 0.0 {
        return (0.0, 0.0);
    }
    match resolved {
        ContentDistribution::Stretch => {
            let each = free / count as f32;
            for size in sizes.iter_mut() {
                *size += each;
            }
            (0.0, 0.0)
        }
        ContentDistribution::End => (free, 0.0),
        ContentDistribution::Center => (free * 0.5, 0.0),
        ContentDistribution::SpaceBetween if count > 1 => (0.0, free / (count as f32 - 1.0)),
        ContentDistribution::SpaceAround => {
            let around = free / count as f32;
            (around * 0.5, around)
        }
        ContentDistribution::SpaceEvenly => {
            let slot = free / (count as f32 + 1.0);
            (slot, slot)
        }
        _ => (0.0, 0.0),
    }
}

/// Offset and size of an item inside its grid area along one axis.
///
/// `natural` is the item's measured (or declared) border-box size; the
/// returned offset is relative to the area start and includes the start margin.
pub fn align_in_area(
    alignment: GridAlignment,
    area_size: f32,
    natural: f32,
    margin_start: f32,
    margin_end: f32,
    can_stretch: bool,
) -> (f32, f32) {
    let room = (area_size - margin_start - margin_end).max(0.0);
    match alignment {
        GridAlignment::Stretch | GridAlignment::Unset if can_stretch => (margin_start, room),
        GridAlignment::End => (margin_start + room - natural, natural),
        GridAlignment::Center => (margin_start + (room - natural) * 0.5, natural),
        _ => (margin_start, natural),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if the default self alignment is not stretch, or start for ratio items.
    #[test]
    fn self_alignment_defaults() {
        assert_eq!(
            GridAlignment::Unset.resolve_self(GridAlignment::Unset, false),
            GridAlignment::Stretch
        );
        assert_eq!(
            GridAlignment::Unset.resolve_self(GridAlignment::Unset, true),
            GridAlignment::Start
        );
        assert_eq!(
            GridAlignment::End.resolve_self(GridAlignment::Center, true),
            GridAlignment::End
        );
        assert_eq!(
            GridAlignment::Unset.resolve_self(GridAlignment::Center, false),
            GridAlignment::Center
        );
    }

    /// # Panics
    /// Panics if stretch does not grow every track equally.
    #[test]
    fn stretch_grows_every_track() {
        let mut sizes = [50.0, 50.0];
        let (start, between) =
            distribute_content(ContentDistribution::Unset, 200.0, &mut sizes, 0.0);
        assert!(start.abs() < 0.001 && between.abs() < 0.001);
        assert!(sizes.iter().all(|size| (size - 100.0).abs() < 0.001));
    }

    /// # Panics
    /// Panics if positional distributions compute the wrong offsets.
    #[test]
    fn positional_distributions() {
        let mut sizes = [50.0, 50.0];
        let (end, _) = distribute_content(ContentDistribution::End, 200.0, &mut sizes, 0.0);
        assert!((end - 100.0).abs() < 0.001);
        let (center, _) = distribute_content(ContentDistribution::Center, 200.0, &mut sizes, 10.0);
        assert!((center - 45.0).abs() < 0.001);
        let (first, between) =
            distribute_content(ContentDistribution::SpaceBetween, 200.0, &mut sizes, 0.0);
        assert!(first.abs() < 0.001 && (between - 100.0).abs() < 0.001);
        let (overflow, _) = distribute_content(ContentDistribution::End, 50.0, &mut sizes, 0.0);
        assert!(overflow.abs() < 0.001);
        assert!(sizes.iter().all(|size| (size - 50.0).abs() < 0.001));
    }

    /// # Panics
    /// Panics if item alignment in an area is wrong.
    #[test]
    fn align_in_area_modes() {
        let (offset, size) = align_in_area(GridAlignment::Stretch, 100.0, 40.0, 5.0, 5.0, true);
        assert!((offset - 5.0).abs() < 0.001 && (size - 90.0).abs() < 0.001);
        let (fixed_offset, fixed_size) =
            align_in_area(GridAlignment::Stretch, 100.0, 40.0, 0.0, 0.0, false);
        assert!(fixed_offset.abs() < 0.001 && (fixed_size - 40.0).abs() < 0.001);
        let (center, _) = align_in_area(GridAlignment::Center, 100.0, 40.0, 0.0, 0.0, true);
        assert!((center - 30.0).abs() < 0.001);
        let (end, _) = align_in_area(GridAlignment::End, 100.0, 40.0, 0.0, 10.0, true);
        assert!((end - 50.0).abs() < 0.001);
    }
}
