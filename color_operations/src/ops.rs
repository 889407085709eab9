// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perceptual operations: lighten/darken/saturate/desaturate/adjust-hue/
//! complement/mix, all routed through OKLCh, plus the sRGB-direct
//! `invert`/`grayscale`/`mix_rgb` and the alpha-only helpers.

use alloc::sync::Arc;

use color::color_value::ColorValue;
use color::matrix::{clamp, clamp01, normalize_hue};
use color::space::{srgb_space, Oklch, Space};

fn oklch_space() -> Arc<dyn Space> {
    Arc::new(Oklch)
}

fn to_oklch(color: &ColorValue) -> [f64; 3] {
    Oklch.from_xyz(color.to_xyz())
}

/// Convert `color` to OKLCh, apply `f` to its `[L, C, h]` channels, then
/// convert back to `color`'s original space.
fn in_oklch(color: &ColorValue, f: impl FnOnce([f64; 3]) -> [f64; 3]) -> ColorValue {
    let mutated = f(to_oklch(color));
    let oklch_color = ColorValue::new(oklch_space(), mutated, color.alpha());
    oklch_color.convert_to(color.space().clone())
}

/// `new L = L + a * (1 - L)`, clamped so lightness never overshoots `1`.
#[must_use]
pub fn lighten(color: &ColorValue, amount: f64) -> ColorValue {
    let a = clamp01(amount);
    in_oklch(color, |[l, c, h]| [l + a * (1.0 - l), c, h])
}

/// `new L = L * (1 - a)`, so lightness never undershoots `0`.
#[must_use]
pub fn darken(color: &ColorValue, amount: f64) -> ColorValue {
    let a = clamp01(amount);
    in_oklch(color, |[l, c, h]| [l * (1.0 - a), c, h])
}

/// A conservative, hue-independent estimate of the maximum OKLCh chroma at
/// lightness `l`.
#[must_use]
pub fn max_oklch_chroma_estimate(l: f64) -> f64 {
    (0.4 * (1.0 - 2.0 * (l - 0.5).abs())).max(0.0)
}

/// `new C = clamp(C + a * (C_max - C), 0, C_max)` where `C_max` is
/// [`max_oklch_chroma_estimate`].
#[must_use]
pub fn saturate(color: &ColorValue, amount: f64) -> ColorValue {
    let a = clamp01(amount);
    in_oklch(color, |[l, c, h]| {
        let c_max = max_oklch_chroma_estimate(l);
        [l, clamp(c + a * (c_max - c), 0.0, c_max), h]
    })
}

/// `new C = C * (1 - a)`.
#[must_use]
pub fn desaturate(color: &ColorValue, amount: f64) -> ColorValue {
    let a = clamp01(amount);
    in_oklch(color, |[l, c, h]| [l, c * (1.0 - a), h])
}

/// `new H = normalize(H + degrees)`.
#[must_use]
pub fn adjust_hue(color: &ColorValue, degrees: f64) -> ColorValue {
    in_oklch(color, |[l, c, h]| [l, c, normalize_hue(h + degrees)])
}

/// `adjust_hue(color, 180)`.
#[must_use]
pub fn complement(color: &ColorValue) -> ColorValue {
    adjust_hue(color, 180.0)
}

/// RGB bit-inversion: `(1 - r, 1 - g, 1 - b)` in sRGB. Not a perceptual
/// operation, unlike every other function in this module.
#[must_use]
pub fn invert(color: &ColorValue) -> ColorValue {
    let (r, g, b, a) = color.rgba();
    ColorValue::new(Arc::new(srgb_space()), [1.0 - r, 1.0 - g, 1.0 - b], a)
}

/// BT.601-like luma `0.299r + 0.587g + 0.114b`, propagated to all three
/// sRGB channels.
#[must_use]
pub fn grayscale(color: &ColorValue) -> ColorValue {
    let (r, g, b, a) = color.rgba();
    let luma = 0.299 * r + 0.587 * g + 0.114 * b;
    ColorValue::new(Arc::new(srgb_space()), [luma, luma, luma], a)
}

/// Componentwise linear blend in sRGB, including alpha.
#[must_use]
pub fn mix_rgb(c1: &ColorValue, c2: &ColorValue, weight: f64) -> ColorValue {
    let w = clamp01(weight);
    let (r1, g1, b1, a1) = c1.rgba();
    let (r2, g2, b2, a2) = c2.rgba();
    let lerp = |x: f64, y: f64| x + w * (y - x);
    ColorValue::new(
        Arc::new(srgb_space()),
        [lerp(r1, r2), lerp(g1, g2), lerp(b1, b2)],
        lerp(a1, a2),
    )
}

/// Interpolate `L` and `C` linearly, `H` via the shortest-arc policy, and
/// alpha linearly; returns an OKLCh color.
#[must_use]
pub fn mix_oklch(c1: &ColorValue, c2: &ColorValue, weight: f64) -> ColorValue {
    let w = clamp01(weight);
    let [l1, c1_chroma, h1] = to_oklch(c1);
    let [l2, c2_chroma, h2] = to_oklch(c2);
    let mut dh = h2 - h1;
    if dh.abs() > 180.0 {
        dh -= 360.0 * dh.signum();
    }
    let lerp = |x: f64, y: f64| x + w * (y - x);
    let l = lerp(l1, l2);
    let c = lerp(c1_chroma, c2_chroma);
    let h = normalize_hue(h1 + w * dh);
    let alpha = lerp(c1.alpha(), c2.alpha());
    ColorValue::new(oklch_space(), [l, c, h], alpha)
}

/// Set alpha to `x` (clamped to `[0, 1]`), all other fields unchanged.
#[must_use]
pub fn opacity(color: &ColorValue, x: f64) -> ColorValue {
    color.with_alpha(clamp01(x))
}

/// `new alpha = min(alpha + a, 1)`.
#[must_use]
pub fn fade_in(color: &ColorValue, amount: f64) -> ColorValue {
    color.with_alpha((color.alpha() + clamp01(amount)).min(1.0))
}

/// `new alpha = max(alpha - a, 0)`.
#[must_use]
pub fn fade_out(color: &ColorValue, amount: f64) -> ColorValue {
    color.with_alpha((color.alpha() - clamp01(amount)).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb(r: f64, g: f64, b: f64) -> ColorValue {
        ColorValue::new(Arc::new(srgb_space()), [r, g, b], 1.0)
    }

    #[test]
    fn lighten_never_overshoots_one() {
        let c = srgb(0.8, 0.2, 0.1);
        let lightened = lighten(&c, 5.0);
        let [l, _, _] = to_oklch(&lightened);
        assert!(l <= 1.0 + 1e-9);
    }

    #[test]
    fn darken_never_undershoots_zero() {
        let c = srgb(0.8, 0.2, 0.1);
        let darkened = darken(&c, 5.0);
        let [l, _, _] = to_oklch(&darkened);
        assert!(l >= -1e-9);
    }

    #[test]
    fn lighten_by_zero_is_identity() {
        use approx::assert_relative_eq;

        let c = srgb(0.4, 0.5, 0.6);
        let same = lighten(&c, 0.0);
        let (r1, g1, b1, a1) = c.rgba();
        let (r2, g2, b2, a2) = same.rgba();
        assert_relative_eq!([r1, g1, b1, a1].as_slice(), [r2, g2, b2, a2].as_slice(), epsilon = 1e-9);
    }

    #[test]
    fn desaturate_fully_removes_chroma() {
        let c = srgb(0.9, 0.1, 0.2);
        let gray = desaturate(&c, 1.0);
        let [_, chroma, _] = to_oklch(&gray);
        assert!(chroma.abs() < 1e-9);
    }

    #[test]
    fn complement_is_adjust_hue_by_180() {
        let c = srgb(0.9, 0.1, 0.2);
        let a = complement(&c);
        let b = adjust_hue(&c, 180.0);
        let (ar, ag, ab, _) = a.rgba();
        let (br, bg, bb, _) = b.rgba();
        assert!((ar - br).abs() < 1e-9);
        assert!((ag - bg).abs() < 1e-9);
        assert!((ab - bb).abs() < 1e-9);
    }

    #[test]
    fn invert_is_involutive() {
        let c = srgb(0.2, 0.7, 0.9);
        let back = invert(&invert(&c));
        let (r1, g1, b1, _) = c.rgba();
        let (r2, g2, b2, _) = back.rgba();
        assert!((r1 - r2).abs() < 1e-9);
        assert!((g1 - g2).abs() < 1e-9);
        assert!((b1 - b2).abs() < 1e-9);
    }

    #[test]
    fn grayscale_produces_equal_channels() {
        let c = srgb(0.9, 0.3, 0.1);
        let (r, g, b, _) = grayscale(&c).rgba();
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn mix_rgb_at_zero_and_one_returns_endpoints() {
        let c1 = srgb(1.0, 0.0, 0.0);
        let c2 = srgb(0.0, 0.0, 1.0);
        let (r, g, b, _) = mix_rgb(&c1, &c2, 0.0).rgba();
        assert!((r - 1.0).abs() < 1e-9 && g.abs() < 1e-9 && b.abs() < 1e-9);
        let (r, g, b, _) = mix_rgb(&c1, &c2, 1.0).rgba();
        assert!(r.abs() < 1e-9 && g.abs() < 1e-9 && (b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mix_oklch_takes_the_shorter_hue_arc() {
        // 10 degrees and 350 degrees are 20 degrees apart the short way.
        let c1 = ColorValue::new(oklch_space(), [0.5, 0.1, 10.0], 1.0);
        let c2 = ColorValue::new(oklch_space(), [0.5, 0.1, 350.0], 1.0);
        let mid = mix_oklch(&c1, &c2, 0.5);
        let [_, _, h] = mid.channels();
        assert!(h.abs() < 1e-6 || (h - 360.0).abs() < 1e-6);
    }

    #[test]
    fn alpha_only_ops_preserve_channels() {
        let c = ColorValue::new(oklch_space(), [0.5, 0.2, 30.0], 0.5);
        for op in [
            |c: &ColorValue| opacity(c, 0.9),
            |c: &ColorValue| fade_in(c, 0.2),
            |c: &ColorValue| fade_out(c, 0.2),
        ] {
            let out = op(&c);
            assert_eq!(out.channels(), c.channels());
        }
    }

    #[test]
    fn fade_in_saturates_at_one_and_fade_out_at_zero() {
        let c = ColorValue::new(oklch_space(), [0.5, 0.2, 30.0], 0.9);
        assert_eq!(fade_in(&c, 0.5).alpha(), 1.0);
        let c2 = c.with_alpha(0.1);
        assert_eq!(fade_out(&c2, 0.5).alpha(), 0.0);
    }
}
