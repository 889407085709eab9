// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CIE Lab and its polar form CIE LCh, both referenced to D65. The reference
//! white is fixed rather than parameterized.

use super::{cartesian_to_polar, polar_to_cartesian, Space};
use crate::floatfuncs::FloatFuncs;
use crate::white_point::WhitePoint;

const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 903.3;

fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let white = WhitePoint::D65.as_xyz();
    let xr = xyz[0] / white[0];
    let yr = xyz[1] / white[1];
    let zr = xyz[2] / white[2];
    let fx = f(xr);
    let fy = f(yr);
    let fz = f(zr);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let white = WhitePoint::D65.as_xyz();
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let yr = if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powf(3.0)
    } else {
        l / KAPPA
    };
    [f_inv(fx) * white[0], yr * white[1], f_inv(fz) * white[2]]
}

/// CIE L*a*b*, referenced to D65.
#[derive(Clone, Copy, Debug)]
pub struct Lab;

impl Space for Lab {
    fn name(&self) -> &'static str {
        "lab"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["L", "a", "b"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        lab_to_xyz(channels)
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        xyz_to_lab(xyz)
    }
}

/// CIE LCh, the polar form of [`Lab`].
#[derive(Clone, Copy, Debug)]
pub struct Lch;

impl Space for Lch {
    fn name(&self) -> &'static str {
        "lch"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["L", "C", "h"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        let [l, c, h] = channels;
        let (a, b) = polar_to_cartesian(c, h);
        lab_to_xyz([l, a, b])
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let [l, a, b] = xyz_to_lab(xyz);
        let (c, h) = cartesian_to_polar(a, b);
        [l, c, h]
    }
}
