// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient generation: two-endpoint, multi-stop with positions, pluggable
//! easing, and the hue-interpolation policies that govern cylindrical
//! interpolation spaces.

use alloc::sync::Arc;
use alloc::vec::Vec;

use color::color_value::ColorValue;
use color::matrix::normalize_hue;
use color::space::{Hsl, Lab, Lch, Oklab, Oklch, Space};

/// The four hue-interpolation policies for traversing a cylindrical space's
/// hue channel from a start angle to an end angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HueInterpolation {
    /// Rotate the hue delta so the traversal is never more than 180 degrees.
    #[default]
    Shorter,
    /// The opposite of [`Self::Shorter`]: always take the long way around.
    Longer,
    /// Always increase hue, wrapping forward through 360.
    Increasing,
    /// Always decrease hue, wrapping backward through 360.
    Decreasing,
}

/// The color spaces a gradient can interpolate in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientSpace {
    /// Linear interpolation in sRGB.
    Srgb,
    /// Interpolation in HSL, with hue treated as a cylindrical channel.
    Hsl,
    /// Interpolation in CIELAB.
    Lab,
    /// Interpolation in OKLab.
    Oklab,
    /// Interpolation in CIELCh, with hue treated as a cylindrical channel.
    Lch,
    /// Interpolation in OKLCh, with hue treated as a cylindrical channel.
    Oklch,
}

impl GradientSpace {
    fn space(self) -> Arc<dyn Space> {
        match self {
            Self::Srgb => Arc::new(color::space::srgb_space()),
            Self::Hsl => Arc::new(Hsl),
            Self::Lab => Arc::new(Lab),
            Self::Oklab => Arc::new(Oklab),
            Self::Lch => Arc::new(Lch),
            Self::Oklch => Arc::new(Oklch),
        }
    }

    /// The index of the hue channel, for cylindrical spaces.
    fn hue_channel(self) -> Option<usize> {
        match self {
            Self::Hsl => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            Self::Srgb | Self::Lab | Self::Oklab => None,
        }
    }
}

/// One stop in a multi-stop gradient: a color at a position in `[0, 1]`.
/// Duplicate positions are allowed.
#[derive(Clone, Debug)]
pub struct GradientStop {
    /// The color at this stop.
    pub color: ColorValue,
    /// The stop's position along the gradient, in `[0, 1]`.
    pub position: f64,
}

impl GradientStop {
    /// Creates a stop at `position` with the given `color`.
    #[must_use]
    pub fn new(color: ColorValue, position: f64) -> Self {
        Self { color, position }
    }
}

fn hue_delta(h1: f64, h2: f64, policy: HueInterpolation) -> f64 {
    let mut dh = h2 - h1;
    match policy {
        HueInterpolation::Shorter => {
            if dh.abs() > 180.0 {
                dh -= 360.0 * dh.signum();
            }
        }
        HueInterpolation::Longer => {
            if dh.abs() <= 180.0 && dh != 0.0 {
                dh -= 360.0 * dh.signum();
            }
        }
        HueInterpolation::Increasing => {
            if dh < 0.0 {
                dh += 360.0;
            }
        }
        HueInterpolation::Decreasing => {
            if dh > 0.0 {
                dh -= 360.0;
            }
        }
    }
    dh
}

/// Interpolate `start` and `end` (both already converted to `space`'s
/// channels) at `t`, applying the hue-interpolation policy on the hue
/// channel if `space` is cylindrical.
fn interpolate_channels(space: GradientSpace, start: [f64; 3], end: [f64; 3], t: f64, policy: HueInterpolation) -> [f64; 3] {
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = start[i] + t * (end[i] - start[i]);
    }
    if let Some(hue_ix) = space.hue_channel() {
        let dh = hue_delta(start[hue_ix], end[hue_ix], policy);
        out[hue_ix] = normalize_hue(start[hue_ix] + t * dh);
    }
    out
}

fn interpolate(space: GradientSpace, start: &ColorValue, end: &ColorValue, t: f64, policy: HueInterpolation) -> ColorValue {
    let target = space.space();
    let start_ch = start.convert_to(target.clone());
    let end_ch = end.convert_to(target.clone());
    let channels = interpolate_channels(space, start_ch.channels(), end_ch.channels(), t, policy);
    let alpha = start.alpha() + t * (end.alpha() - start.alpha());
    ColorValue::new(target, channels, alpha)
}

/// Sample indices for an `n`-stop gradient: `t = i / (n - 1)` for
/// `i = 0..n`, with `n = 1` yielding a single sample at `t = 0`.
fn sample_ts(n: usize) -> Vec<f64> {
    if n <= 1 {
        return alloc::vec![0.0; n];
    }
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

/// `n` colors interpolated from `start` to `end` in OKLCh with
/// shortest-arc hue. `n = 1` yields `[start]`.
#[must_use]
pub fn gradient(start: &ColorValue, end: &ColorValue, n: usize) -> Vec<ColorValue> {
    gradient_in_space(start, end, n, GradientSpace::Oklch)
}

/// [`gradient`], interpolating in `space` instead of OKLCh. Cylindrical
/// spaces use shortest-arc hue by default.
#[must_use]
pub fn gradient_in_space(start: &ColorValue, end: &ColorValue, n: usize, space: GradientSpace) -> Vec<ColorValue> {
    gradient_with_easing(start, end, n, space, |t| t)
}

/// [`gradient_in_space`], applying `easing(t)` to the global `t` before
/// interpolating.
#[must_use]
pub fn gradient_with_easing(
    start: &ColorValue,
    end: &ColorValue,
    n: usize,
    space: GradientSpace,
    easing: impl Fn(f64) -> f64,
) -> Vec<ColorValue> {
    gradient_with_easing_and_hue(start, end, n, space, easing, HueInterpolation::Shorter)
}

/// [`gradient_in_space`], traversing the hue channel (for cylindrical
/// spaces) according to `hue_interpolation` instead of always taking the
/// shortest arc.
#[must_use]
pub fn gradient_with_hue(
    start: &ColorValue,
    end: &ColorValue,
    n: usize,
    space: GradientSpace,
    hue_interpolation: HueInterpolation,
) -> Vec<ColorValue> {
    gradient_with_easing_and_hue(start, end, n, space, |t| t, hue_interpolation)
}

/// The fully general two-endpoint gradient: `easing(t)` reshapes the
/// sampling grid, `hue_interpolation` selects how a cylindrical space's
/// hue channel is traversed.
#[must_use]
pub fn gradient_with_easing_and_hue(
    start: &ColorValue,
    end: &ColorValue,
    n: usize,
    space: GradientSpace,
    easing: impl Fn(f64) -> f64,
    hue_interpolation: HueInterpolation,
) -> Vec<ColorValue> {
    sample_ts(n)
        .into_iter()
        .map(|t| interpolate(space, start, end, easing(t), hue_interpolation))
        .collect()
}

fn sorted_stops(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut sorted: Vec<GradientStop> = stops.to_vec();
    sorted.sort_by(|a, b| a.position.partial_cmp(&b.position).unwrap_or(core::cmp::Ordering::Equal));
    if let Some(first) = sorted.first() {
        if first.position > 0.0 {
            let clone = GradientStop::new(first.color.clone(), 0.0);
            sorted.insert(0, clone);
        }
    }
    if let Some(last) = sorted.last() {
        if last.position < 1.0 {
            let clone = GradientStop::new(last.color.clone(), 1.0);
            sorted.push(clone);
        }
    }
    sorted
}

fn sample_multistop(stops: &[GradientStop], t: f64, space: GradientSpace, hue_interpolation: HueInterpolation) -> ColorValue {
    // Find the segment whose position range contains `t`. `stops` is
    // sorted and padded at 0/1 by `sorted_stops`.
    for window in stops.windows(2) {
        let (lo, hi) = (&window[0], &window[1]);
        if t <= hi.position || core::ptr::eq(hi, stops.last().unwrap()) {
            let width = hi.position - lo.position;
            let local_t = if width == 0.0 { 0.0 } else { (t - lo.position) / width };
            return interpolate(space, &lo.color, &hi.color, local_t.clamp(0.0, 1.0), hue_interpolation);
        }
    }
    stops.last().unwrap().color.clone()
}

/// `n` colors sampled across `stops`: stops are sorted by position,
/// synthetic stops are added at `0`/`1` if the first/last stop doesn't
/// already cover them, then each sample finds its containing segment and
/// interpolates locally within it, using shortest-arc hue.
#[must_use]
pub fn gradient_multistop(stops: &[GradientStop], n: usize, space: GradientSpace) -> Vec<ColorValue> {
    gradient_multistop_with_easing(stops, n, space, |t| t)
}

/// [`gradient_multistop`], applying `easing(t)` to the global `t` before
/// segment lookup and local interpolation.
#[must_use]
pub fn gradient_multistop_with_easing(
    stops: &[GradientStop],
    n: usize,
    space: GradientSpace,
    easing: impl Fn(f64) -> f64,
) -> Vec<ColorValue> {
    gradient_multistop_with_easing_and_hue(stops, n, space, easing, HueInterpolation::Shorter)
}

/// [`gradient_multistop`], traversing each segment's hue channel (for
/// cylindrical spaces) according to `hue_interpolation` instead of always
/// taking the shortest arc.
#[must_use]
pub fn gradient_multistop_with_hue(
    stops: &[GradientStop],
    n: usize,
    space: GradientSpace,
    hue_interpolation: HueInterpolation,
) -> Vec<ColorValue> {
    gradient_multistop_with_easing_and_hue(stops, n, space, |t| t, hue_interpolation)
}

/// The fully general multi-stop gradient: `easing(t)` reshapes the
/// sampling grid, `hue_interpolation` selects how each segment's hue
/// channel is traversed.
#[must_use]
pub fn gradient_multistop_with_easing_and_hue(
    stops: &[GradientStop],
    n: usize,
    space: GradientSpace,
    easing: impl Fn(f64) -> f64,
    hue_interpolation: HueInterpolation,
) -> Vec<ColorValue> {
    let padded = sorted_stops(stops);
    sample_ts(n)
        .into_iter()
        .map(|t| sample_multistop(&padded, easing(t), space, hue_interpolation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb(r: f64, g: f64, b: f64) -> ColorValue {
        ColorValue::new(Arc::new(color::space::srgb_space()), [r, g, b], 1.0)
    }

    #[test]
    fn single_sample_gradient_returns_start() {
        let c = srgb(0.2, 0.3, 0.4);
        let g = gradient(&c, &srgb(0.9, 0.1, 0.1), 1);
        assert_eq!(g.len(), 1);
        let (r1, g1, b1, a1) = g[0].rgba();
        let (r2, g2, b2, a2) = c.rgba();
        assert!((r1 - r2).abs() < 1e-9 && (g1 - g2).abs() < 1e-9 && (b1 - b2).abs() < 1e-9 && (a1 - a2).abs() < 1e-9);
    }

    #[test]
    fn two_sample_gradient_returns_exactly_start_and_end() {
        let start = srgb(1.0, 0.0, 0.0);
        let end = srgb(0.0, 0.0, 1.0);
        let g = gradient(&start, &end, 2);
        assert_eq!(g.len(), 2);
        let (r, gg, b, _) = g[0].rgba();
        assert!((r - 1.0).abs() < 1e-4 && gg.abs() < 1e-4 && b.abs() < 1e-4);
        let (r, gg, b, _) = g[1].rgba();
        assert!(r.abs() < 1e-4 && gg.abs() < 1e-4 && (b - 1.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_gradient_is_n_copies() {
        let c = srgb(0.3, 0.6, 0.9);
        let g = gradient(&c, &c, 5);
        assert_eq!(g.len(), 5);
        for sample in &g {
            let (r, gg, b, _) = sample.rgba();
            let (r0, g0, b0, _) = c.rgba();
            assert!((r - r0).abs() < 1e-6);
            assert!((gg - g0).abs() < 1e-6);
            assert!((b - b0).abs() < 1e-6);
        }
    }

    #[test]
    fn red_to_blue_passes_through_purple_in_oklch() {
        let start = srgb(1.0, 0.0, 0.0);
        let end = srgb(0.0, 0.0, 1.0);
        let g = gradient(&start, &end, 5);
        let mid = g[2].channels();
        assert!(mid[0] > 0.45 && mid[0] < 0.55, "L = {}", mid[0]);
        assert!(mid[1] > 0.1, "C = {}", mid[1]);
        assert!(mid[2] > 290.0 && mid[2] < 350.0, "H = {}", mid[2]);
    }

    #[test]
    fn multistop_middle_of_three_is_the_middle_color() {
        let stops = [
            GradientStop::new(srgb(1.0, 0.0, 0.0), 0.0),
            GradientStop::new(srgb(1.0, 1.0, 0.0), 0.5),
            GradientStop::new(srgb(0.0, 0.0, 1.0), 1.0),
        ];
        let g = gradient_multistop(&stops, 11, GradientSpace::Oklch);
        let (r, gg, b, _) = g[5].rgba();
        assert!(r > 0.8 && gg > 0.8 && b < 0.2, "rgba = ({r}, {gg}, {b})");
        let (r, _, b, _) = g[0].rgba();
        assert!(r > 0.9 && b < 0.1);
        let (r, _, b, _) = g[10].rgba();
        assert!(r < 0.1 && b > 0.9);
    }

    #[test]
    fn easing_changes_the_midpoint_sample() {
        let start = srgb(0.0, 0.0, 0.0);
        let end = srgb(1.0, 1.0, 1.0);
        let linear = gradient_with_easing(&start, &end, 3, GradientSpace::Srgb, |t| t);
        let eased = gradient_with_easing(&start, &end, 3, GradientSpace::Srgb, crate::easing::quadratic_in);
        let (lr, _, _, _) = linear[1].rgba();
        let (er, _, _, _) = eased[1].rgba();
        assert!(er < lr);
    }

    #[test]
    fn hue_interpolation_policies_agree_at_shorter_vs_longer() {
        let dh_shorter = hue_delta(10.0, 350.0, HueInterpolation::Shorter);
        let dh_longer = hue_delta(10.0, 350.0, HueInterpolation::Longer);
        assert!(dh_shorter.abs() <= 180.0);
        assert!(dh_longer.abs() >= 180.0);
    }

    #[test]
    fn increasing_policy_always_moves_forward() {
        let dh = hue_delta(350.0, 10.0, HueInterpolation::Increasing);
        assert!(dh > 0.0);
    }

    #[test]
    fn decreasing_policy_always_moves_backward() {
        let dh = hue_delta(10.0, 350.0, HueInterpolation::Decreasing);
        assert!(dh < 0.0);
    }

    #[test]
    fn gradient_with_hue_reaches_every_policy() {
        // hue 10 -> 350: Shorter goes backward through 0, Longer goes
        // forward through 180, Increasing always goes up, Decreasing
        // always goes down.
        let start = ColorValue::new(Arc::new(Oklch), [0.7, 0.2, 10.0], 1.0);
        let end = ColorValue::new(Arc::new(Oklch), [0.7, 0.2, 350.0], 1.0);

        let shorter = gradient_with_hue(&start, &end, 3, GradientSpace::Oklch, HueInterpolation::Shorter);
        let [_, _, h_mid_shorter] = shorter[1].channels();
        assert!(h_mid_shorter < 10.0 || h_mid_shorter > 350.0, "h = {h_mid_shorter}");

        let longer = gradient_with_hue(&start, &end, 3, GradientSpace::Oklch, HueInterpolation::Longer);
        let [_, _, h_mid_longer] = longer[1].channels();
        assert!((170.0..=190.0).contains(&h_mid_longer), "h = {h_mid_longer}");

        let increasing = gradient_with_hue(&start, &end, 3, GradientSpace::Oklch, HueInterpolation::Increasing);
        let [_, _, h_mid_increasing] = increasing[1].channels();
        assert!((170.0..=190.0).contains(&h_mid_increasing), "h = {h_mid_increasing}");

        let decreasing = gradient_with_hue(&start, &end, 3, GradientSpace::Oklch, HueInterpolation::Decreasing);
        let [_, _, h_mid_decreasing] = decreasing[1].channels();
        assert!(h_mid_decreasing < 10.0 || h_mid_decreasing > 350.0, "h = {h_mid_decreasing}");
    }

    #[test]
    fn gradient_multistop_with_hue_is_reachable() {
        let stops = [
            GradientStop::new(ColorValue::new(Arc::new(Oklch), [0.7, 0.2, 10.0], 1.0), 0.0),
            GradientStop::new(ColorValue::new(Arc::new(Oklch), [0.7, 0.2, 350.0], 1.0), 1.0),
        ];
        let g = gradient_multistop_with_hue(&stops, 3, GradientSpace::Oklch, HueInterpolation::Longer);
        let [_, _, h_mid] = g[1].channels();
        assert!((170.0..=190.0).contains(&h_mid), "h = {h_mid}");
    }
}
