// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamut mapping: the `in_gamut` predicate and four strategies for fitting
//! an out-of-gamut color into sRGB, implemented as explicit numeric
//! iteration (binary/grid search) with fixed iteration counts for
//! determinism.

use alloc::sync::Arc;

use crate::color_value::ColorValue;
use crate::space::{srgb_space, Oklch, Space};

const BINARY_SEARCH_ITERATIONS: u32 = 20;
const GAMUT_TOLERANCE: f64 = 1e-7;

fn oklch_space() -> Arc<dyn Space> {
    Arc::new(Oklch)
}

fn oklch_channels(color: &ColorValue) -> [f64; 3] {
    Oklch.from_xyz(color.to_xyz())
}

fn in_gamut_xyz(xyz: [f64; 3]) -> bool {
    let linear = srgb_space().linear_from_xyz(xyz);
    linear.iter().all(|&c| c >= -GAMUT_TOLERANCE && c <= 1.0 + GAMUT_TOLERANCE)
}

fn in_gamut_oklch(l: f64, c: f64, h: f64) -> bool {
    in_gamut_xyz(Oklch.to_xyz([l, c, h]))
}

/// True iff `color`'s linear sRGB channels all lie within `[0, 1]`.
#[must_use]
pub fn in_gamut(color: &ColorValue) -> bool {
    in_gamut_xyz(color.to_xyz())
}

/// The four gamut-mapping strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamutMapping {
    /// Clamp each sRGB channel to `[0, 1]` directly.
    Clip,
    /// Binary-search chroma downward in OKLCh, holding lightness and hue fixed.
    PreserveLightness,
    /// Scan lightness in OKLCh, holding chroma and hue fixed.
    PreserveChroma,
    /// Grid-search a joint lightness/chroma reduction toward the gamut.
    Project,
}

fn clip(color: &ColorValue) -> ColorValue {
    let (r, g, b, a) = color.rgba();
    ColorValue::new(Arc::new(srgb_space()), [r, g, b], a)
}

fn preserve_lightness(color: &ColorValue) -> ColorValue {
    let [l, c, h] = oklch_channels(color);
    if in_gamut_oklch(l, c, h) {
        return ColorValue::new(oklch_space(), [l, c, h], color.alpha());
    }
    let mut lo = 0.0_f64;
    let mut hi = c;
    for _ in 0..BINARY_SEARCH_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        if in_gamut_oklch(l, mid, h) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    ColorValue::new(oklch_space(), [l, lo, h], color.alpha())
}

/// Number of lightness samples scanned by [`preserve_chroma`] when looking
/// for an in-gamut lightness at a fixed chroma.
const LIGHTNESS_SCAN_STEPS: u32 = 200;

fn preserve_chroma(color: &ColorValue) -> ColorValue {
    let [l, c, h] = oklch_channels(color);
    if in_gamut_oklch(l, c, h) {
        return ColorValue::new(oklch_space(), [l, c, h], color.alpha());
    }
    // Unlike chroma at a fixed lightness (which is always in gamut down to
    // 0), the in-gamut lightness range at a fixed chroma isn't bounded by
    // black, so a plain binary search from 0 isn't sound here. Scan instead.
    let mut best: Option<f64> = None;
    for i in 0..=LIGHTNESS_SCAN_STEPS {
        let candidate_l = f64::from(i) / f64::from(LIGHTNESS_SCAN_STEPS);
        if in_gamut_oklch(candidate_l, c, h)
            && best.map(|b: f64| (candidate_l - l).abs() < (b - l).abs()).unwrap_or(true)
        {
            best = Some(candidate_l);
        }
    }
    match best {
        Some(found_l) => ColorValue::new(oklch_space(), [found_l, c, h], color.alpha()),
        None => preserve_lightness(color),
    }
}

fn project(color: &ColorValue) -> ColorValue {
    let [l, c, h] = oklch_channels(color);
    if in_gamut_oklch(l, c, h) {
        return ColorValue::new(oklch_space(), [l, c, h], color.alpha());
    }
    let mut best: Option<(f64, f64, f64)> = None; // (l, c, squared distance)
    let mut ratio_l = 0.0_f64;
    while ratio_l <= 1.0 + 1e-9 {
        let mut ratio_c = 0.0_f64;
        while ratio_c <= 1.0 + 1e-9 {
            let candidate_l = l * (1.0 - ratio_l);
            let candidate_c = c * (1.0 - ratio_c);
            if in_gamut_oklch(candidate_l, candidate_c, h) {
                let dl = candidate_l - l;
                let dc = candidate_c - c;
                let dist = dl * dl + dc * dc;
                if best.map(|(_, _, best_dist)| dist < best_dist).unwrap_or(true) {
                    best = Some((candidate_l, candidate_c, dist));
                }
            }
            ratio_c += 0.1;
        }
        ratio_l += 0.1;
    }
    match best {
        Some((l, c, _)) => ColorValue::new(oklch_space(), [l, c, h], color.alpha()),
        None => preserve_lightness(color),
    }
}

/// Map `color` into the sRGB gamut using `strategy`. Never fails;
/// pathological colors reduce to black at the requested hue/chroma
/// constraints.
#[must_use]
pub fn map_to_gamut(color: &ColorValue, strategy: GamutMapping) -> ColorValue {
    match strategy {
        GamutMapping::Clip => clip(color),
        GamutMapping::PreserveLightness => preserve_lightness(color),
        GamutMapping::PreserveChroma => preserve_chroma(color),
        GamutMapping::Project => project(color),
    }
}

/// Shorthand for `map_to_gamut(color, GamutMapping::Clip)`.
#[must_use]
pub fn clip_to_gamut(color: &ColorValue) -> ColorValue {
    clip(color)
}
