// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! White points and the Bradford chromatic adaptation transform.
//!
//! The hub color space of this crate is always [`XyzD65`](crate::space::XyzD65).
//! [`ProphotoRgb`](crate::space::ProphotoRgb) and [`Lab`](crate::space::Lab)-family
//! spaces are defined relative to the D50 white point instead, so their
//! `to_xyz`/`from_xyz` implementations adapt internally -- callers never see
//! D50-referenced XYZ.

use crate::matrix::{mat3_inverse, mat3_mul_vec3, Mat3};

/// A reference white, expressed as CIE XYZ tristimulus values with `Y = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhitePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WhitePoint {
    /// CIE Standard Illuminant D65, the reference white of sRGB and most
    /// built-in color spaces.
    pub const D65: Self = Self {
        x: 0.95047,
        y: 1.0,
        z: 1.08883,
    };

    /// CIE Standard Illuminant D50, the reference white of ProPhoto RGB and
    /// of CIE Lab as specified here.
    pub const D50: Self = Self {
        x: 0.96422,
        y: 1.0,
        z: 0.82521,
    };

    /// This white point's tristimulus values as a plain `[X, Y, Z]` array.
    #[must_use]
    pub const fn as_xyz(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

// Bradford cone-response matrices.
const BRADFORD: Mat3 = [
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
];

fn bradford_inverse() -> Mat3 {
    mat3_inverse(&BRADFORD)
}

/// Adapt an XYZ tristimulus value from one reference white to another using
/// the Bradford linear chromatic adaptation transform.
///
/// If `white_src == white_dst`, returns `xyz` unchanged (up to floating point
/// precision of the identity scale).
#[must_use]
pub fn adapt(xyz: [f64; 3], white_src: WhitePoint, white_dst: WhitePoint) -> [f64; 3] {
    if white_src == white_dst {
        return xyz;
    }
    let lms = mat3_mul_vec3(&BRADFORD, xyz);
    let lms_src_white = mat3_mul_vec3(&BRADFORD, white_src.as_xyz());
    let lms_dst_white = mat3_mul_vec3(&BRADFORD, white_dst.as_xyz());
    let scaled = [
        lms[0] * lms_dst_white[0] / lms_src_white[0],
        lms[1] * lms_dst_white[1] / lms_src_white[1],
        lms[2] * lms_dst_white[2] / lms_src_white[2],
    ];
    mat3_mul_vec3(&bradford_inverse(), scaled)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn identity_when_same_white_point() {
        let xyz = [0.3, 0.6, 0.2];
        let out = adapt(xyz, WhitePoint::D65, WhitePoint::D65);
        assert_eq!(out, xyz);
    }

    #[test]
    fn white_maps_to_white() {
        let out = adapt(WhitePoint::D50.as_xyz(), WhitePoint::D50, WhitePoint::D65);
        assert_relative_eq!(out.as_slice(), WhitePoint::D65.as_xyz().as_slice(), epsilon = 1e-6);
    }

    #[test]
    fn round_trip() {
        let xyz = [0.4, 0.35, 0.18];
        let there = adapt(xyz, WhitePoint::D65, WhitePoint::D50);
        let back = adapt(there, WhitePoint::D50, WhitePoint::D65);
        assert_relative_eq!(xyz.as_slice(), back.as_slice(), epsilon = 1e-8);
    }
}
