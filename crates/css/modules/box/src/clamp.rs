//! Clamping helpers shared by every layout algorithm.
//!
//! Layout never fails: negative sizes, negative free space, empty spans and
//! inverted min/max pairs are all folded back into range here, so the policy
//! lives in one place.

/// Largest value treated as a real size. Anything at or above is "unbounded".
pub const UNBOUNDED: f32 = f32::INFINITY;

/// True when `value` is a finite, usable size.
#[inline]
pub fn is_definite(value: f32) -> bool {
    value.is_finite()
}

/// Clamp a size, content extent or free space to zero from below.
#[inline]
pub fn non_negative(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// Clamp `value` into `[min, max]`. When the pair is inverted, `min` wins
/// (CSS resolves a min/max conflict in favour of the minimum).
#[inline]
pub fn clamp_min_max(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Positive free space left after `used` is taken out of `available`.
///
/// Indefinite availability yields no free space.
#[inline]
pub fn free_space(available: f32, used: f32) -> f32 {
    if is_definite(available) {
        non_negative(available - used)
    } else {
        0.0
    }
}

/// Signed free space (may be negative), or zero when `available` is indefinite.
#[inline]
pub fn signed_free_space(available: f32, used: f32) -> f32 {
    if is_definite(available) {
        available - used
    } else {
        0.0
    }
}

/// A track span of zero or fewer tracks counts as one.
#[inline]
pub fn span(raw: i32) -> usize {
    if raw <= 0 { 1 } else { raw as usize }
}

/// Turn a possibly unbounded length into a finite one, using `fallback` when unbounded.
#[inline]
pub fn definite_or(value: f32, fallback: f32) -> f32 {
    if is_definite(value) { value } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if an inverted min/max pair does not resolve to the minimum.
    #[test]
    fn inverted_pair_prefers_min() {
        assert!((clamp_min_max(50.0, 80.0, 20.0) - 80.0).abs() < 0.001);
        assert!((clamp_min_max(50.0, 0.0, 20.0) - 20.0).abs() < 0.001);
        assert!((clamp_min_max(5.0, 10.0, 20.0) - 10.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if free space is negative or non-zero for unbounded availability.
    #[test]
    fn free_space_is_clamped() {
        assert!(free_space(100.0, 150.0).abs() < 0.001);
        assert!((free_space(100.0, 40.0) - 60.0).abs() < 0.001);
        assert!(free_space(UNBOUNDED, 40.0).abs() < 0.001);
        assert!((signed_free_space(100.0, 150.0) + 50.0).abs() < 0.001);
    }

    /// # Panics
    /// Panics if non-positive spans are not coerced to one.
    #[test]
    fn spans_are_at_least_one() {
        assert_eq!(span(0), 1);
        assert_eq!(span(-3), 1);
        assert_eq!(span(4), 4);
    }

    /// # Panics
    /// Panics if NaN leaks through the non-negative clamp.
    #[test]
    fn nan_becomes_zero() {
        assert!(non_negative(f32::NAN).abs() < 0.001);
        assert!(non_negative(-2.0).abs() < 0.001);
    }
}
