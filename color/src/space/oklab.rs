// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! OKLab and OKLCh, Björn Ottosson's perceptually uniform space, built
//! directly from CIE XYZ (D65) via the published XYZ→LMS and LMS'→Lab
//! matrices.

use super::{cartesian_to_polar, polar_to_cartesian, Space};
use crate::floatfuncs::FloatFuncs;
use crate::matrix::{mat3_inverse, mat3_mul_vec3, Mat3};

const XYZ_TO_LMS: Mat3 = [
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
];

const LMS_TO_LAB: Mat3 = [
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
];

fn xyz_to_oklab(xyz: [f64; 3]) -> [f64; 3] {
    let lms = mat3_mul_vec3(&XYZ_TO_LMS, xyz);
    let lms_cbrt = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
    mat3_mul_vec3(&LMS_TO_LAB, lms_cbrt)
}

fn oklab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let lms_cbrt = mat3_mul_vec3(&mat3_inverse(&LMS_TO_LAB), lab);
    let lms = [
        lms_cbrt[0] * lms_cbrt[0] * lms_cbrt[0],
        lms_cbrt[1] * lms_cbrt[1] * lms_cbrt[1],
        lms_cbrt[2] * lms_cbrt[2] * lms_cbrt[2],
    ];
    mat3_mul_vec3(&mat3_inverse(&XYZ_TO_LMS), lms)
}

/// OKLab, a modern perceptually uniform space. `L` in `[0, 1]`; `a`, `b`
/// unbounded.
#[derive(Clone, Copy, Debug)]
pub struct Oklab;

impl Space for Oklab {
    fn name(&self) -> &'static str {
        "oklab"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["L", "a", "b"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        oklab_to_xyz(channels)
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        xyz_to_oklab(xyz)
    }
}

/// OKLCh, the polar form of [`Oklab`].
#[derive(Clone, Copy, Debug)]
pub struct Oklch;

impl Space for Oklch {
    fn name(&self) -> &'static str {
        "oklch"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["L", "C", "h"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        let [l, c, h] = channels;
        let (a, b) = polar_to_cartesian(c, h);
        oklab_to_xyz([l, a, b])
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let [l, a, b] = xyz_to_oklab(xyz);
        let (c, h) = cartesian_to_polar(a, b);
        [l, c, h]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::white_point::WhitePoint;

    #[test]
    fn oklab_round_trips() {
        for &xyz in &[[0.3, 0.5, 0.2], [0.95047, 1.0, 1.08883], [0.01, 0.02, 0.015]] {
            let lab = xyz_to_oklab(xyz);
            let back = oklab_to_xyz(lab);
            for i in 0..3 {
                assert!((back[i] - xyz[i]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn oklab_of_hub_white_has_lightness_near_one() {
        let lab = Oklab.from_xyz(WhitePoint::D65.as_xyz());
        assert!((lab[0] - 1.0).abs() < 1e-3);
        assert!(lab[1].abs() < 1e-3);
        assert!(lab[2].abs() < 1e-3);
    }

    #[test]
    fn oklch_is_exact_inverse_of_oklab() {
        let oklab_space = Oklab;
        let oklch_space = Oklch;
        for &lab in &[[0.6, 0.1, -0.05], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]] {
            let xyz = oklab_space.to_xyz(lab);
            let oklch = oklch_space.from_xyz(xyz);
            let xyz2 = oklch_space.to_xyz(oklch);
            for i in 0..3 {
                assert!((xyz[i] - xyz2[i]).abs() < 1e-6);
            }
        }
    }
}
