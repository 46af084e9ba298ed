//! Resolving flexible lengths.
//!
//! Spec: §9.7 — <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>
//!
//! Items that hit a min/max clamp are frozen and the leftover space is handed
//! to the remaining items on the next round.

use css_box::clamp::clamp_min_max;

use super::FlexChild;

/// Distribute positive free space to items in proportion to their flex-grow factors.
pub fn distribute_grow(free_space: f32, items: &[FlexChild], sizes: &mut [f32]) {
    debug_assert!(free_space >= 0.0, "grow called with negative free space");
    let mut remaining = free_space;
    let mut frozen = vec![false; items.len()];
    for _ in 0..items.len() {
        let sum_grow: f32 = items
            .iter()
            .zip(&frozen)
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(child, _)| child.flex_grow.max(0.0))
            .sum();
        if sum_grow <= 0.0 || remaining <= 0.0 {
            break;
        }
        let unit = remaining / sum_grow;
        let mut any_frozen = false;
        let mut applied_total = 0.0f32;
        for ((size_ref, child), frozen_ref) in sizes.iter_mut().zip(items).zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let target = child.flex_grow.max(0.0).mul_add(unit, *size_ref);
            let clamped = clamp_min_max(target, child.min_main, child.max_main);
            applied_total += clamped - *size_ref;
            *size_ref = clamped;
            if clamped < target {
                *frozen_ref = true;
                any_frozen = true;
            }
        }
        remaining -= applied_total;
        if !any_frozen {
            break;
        }
    }
}

/// Remove negative free space from items in proportion to their flex-shrink factors.
///
/// Each round removes `|free| × shrink / Σshrink` from every unfrozen item,
/// flooring at zero (or the item's min main size).
pub fn distribute_shrink(free_space: f32, items: &[FlexChild], sizes: &mut [f32]) {
    debug_assert!(free_space <= 0.0, "shrink called with positive free space");
    let mut remaining = -free_space;
    let mut frozen = vec![false; items.len()];
    for _ in 0..items.len() {
        let sum_shrink: f32 = items
            .iter()
            .zip(&frozen)
            .filter(|(_, is_frozen)| !**is_frozen)
            .map(|(child, _)| child.flex_shrink.max(0.0))
            .sum();
        if sum_shrink <= 0.0 || remaining <= 0.0 {
            break;
        }
        let mut any_frozen = false;
        let mut applied_total = 0.0f32;
        for ((size_ref, child), frozen_ref) in sizes.iter_mut().zip(items).zip(frozen.iter_mut()) {
            if *frozen_ref {
                continue;
            }
            let delta = remaining * (child.flex_shrink.max(0.0) / sum_shrink);
            let target = *size_ref - delta;
            let clamped = clamp_min_max(target.max(0.0), child.min_main, child.max_main);
            applied_total += *size_ref - clamped;
            *size_ref = clamped;
            if clamped > target {
                *frozen_ref = true;
                any_frozen = true;
            }
        }
        remaining -= applied_total;
        if !any_frozen {
            break;
        }
    }
}
