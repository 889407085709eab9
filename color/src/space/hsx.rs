// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HSL, HSV and HWB, all defined on sRGB: `to_xyz` routes through sRGB then
//! `sRGB.to_xyz`.

use super::rgb::srgb;
use super::Space;
use crate::matrix::{clamp01, normalize_hue};

fn max3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c)
}
fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// The hue (in degrees) of an RGB triple, shared by HSL/HSV/HWB. Achromatic
/// triples (`max == min`) get hue `0`.
fn rgb_hue(r: f64, g: f64, b: f64) -> f64 {
    let max = max3(r, g, b);
    let min = min3(r, g, b);
    let d = max - min;
    if d == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    normalize_hue(h * 60.0)
}

fn hue_to_rgb_component(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h_norm = h / 360.0;
    [
        hue_to_rgb_component(p, q, h_norm + 1.0 / 3.0),
        hue_to_rgb_component(p, q, h_norm),
        hue_to_rgb_component(p, q, h_norm - 1.0 / 3.0),
    ]
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = max3(r, g, b);
    let min = min3(r, g, b);
    let l = (max + min) / 2.0;
    if max == min {
        return [0.0, 0.0, l];
    }
    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    [rgb_hue(r, g, b), s, l]
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = v - c;
    let (r1, g1, b1) = match h_prime as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r1 + m, g1 + m, b1 + m]
}

fn rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = max3(r, g, b);
    let min = min3(r, g, b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };
    [rgb_hue(r, g, b), s, max]
}

fn hwb_to_rgb(h: f64, w: f64, b: f64) -> [f64; 3] {
    let (w, b) = if w + b > 1.0 {
        let sum = w + b;
        (w / sum, b / sum)
    } else {
        (w, b)
    };
    let v = 1.0 - b;
    let s = if v == 0.0 { 0.0 } else { 1.0 - w / v };
    hsv_to_rgb(h, s, v)
}

fn rgb_to_hwb(r: f64, g: f64, b: f64) -> [f64; 3] {
    let w = min3(r, g, b);
    let black = 1.0 - max3(r, g, b);
    [rgb_hue(r, g, b), w, black]
}

/// HSL, hue/saturation/lightness over sRGB. `S` and `L` are fractions in
/// `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct Hsl;

impl Space for Hsl {
    fn name(&self) -> &'static str {
        "hsl"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["H", "S", "L"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        let [h, s, l] = channels;
        let rgb = hsl_to_rgb(h, clamp01(s), clamp01(l));
        srgb().to_xyz(rgb)
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let [r, g, b] = srgb().from_xyz(xyz);
        rgb_to_hsl(r, g, b)
    }
}

/// HSV, hue/saturation/value over sRGB.
#[derive(Clone, Copy, Debug)]
pub struct Hsv;

impl Space for Hsv {
    fn name(&self) -> &'static str {
        "hsv"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["H", "S", "V"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        let [h, s, v] = channels;
        let rgb = hsv_to_rgb(h, clamp01(s), clamp01(v));
        srgb().to_xyz(rgb)
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let [r, g, b] = srgb().from_xyz(xyz);
        rgb_to_hsv(r, g, b)
    }
}

/// HWB, hue/whiteness/blackness over sRGB. Normalizes `W + B` to `1` when
/// their sum exceeds it.
#[derive(Clone, Copy, Debug)]
pub struct Hwb;

impl Space for Hwb {
    fn name(&self) -> &'static str {
        "hwb"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["H", "W", "B"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        let [h, w, b] = channels;
        let rgb = hwb_to_rgb(h, clamp01(w), clamp01(b));
        srgb().to_xyz(rgb)
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let [r, g, b] = srgb().from_xyz(xyz);
        rgb_to_hwb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [[f64; 3]; 5] = [
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.2, 0.5, 0.8],
        [0.9, 0.1, 0.4],
    ];

    #[test]
    fn hsl_round_trips_rgb() {
        for &[r, g, b] in &GRID {
            let hsl = rgb_to_hsl(r, g, b);
            let back = hsl_to_rgb(hsl[0], hsl[1], hsl[2]);
            assert!((back[0] - r).abs() < 1e-9);
            assert!((back[1] - g).abs() < 1e-9);
            assert!((back[2] - b).abs() < 1e-9);
        }
    }

    #[test]
    fn hsv_round_trips_rgb() {
        for &[r, g, b] in &GRID {
            let hsv = rgb_to_hsv(r, g, b);
            let back = hsv_to_rgb(hsv[0], hsv[1], hsv[2]);
            assert!((back[0] - r).abs() < 1e-9);
            assert!((back[1] - g).abs() < 1e-9);
            assert!((back[2] - b).abs() < 1e-9);
        }
    }

    #[test]
    fn hwb_normalizes_overflowing_w_plus_b() {
        let rgb = hwb_to_rgb(120.0, 0.8, 0.8);
        // w=b=0.8 normalizes to 0.5/0.5, which is always achromatic gray.
        assert!((rgb[0] - 0.5).abs() < 1e-9);
        assert!((rgb[1] - 0.5).abs() < 1e-9);
        assert!((rgb[2] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn hsx_spaces_round_trip_through_xyz() {
        let hsl = Hsl;
        for &rgb in &GRID {
            let xyz = srgb().to_xyz(rgb);
            let hsl_ch = hsl.from_xyz(xyz);
            let xyz2 = hsl.to_xyz(hsl_ch);
            for i in 0..3 {
                assert!((xyz[i] - xyz2[i]).abs() < 1e-6);
            }
        }
    }
}
