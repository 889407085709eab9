// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build an RGB-to-XYZ primaries matrix from chromaticity coordinates.
//!
//! Reference algorithm: the standard "RGB to XYZ matrix from primaries and
//! white point" construction used throughout colorimetry (see e.g. Bruce
//! Lindbloom's derivation). Given each primary's `(x, y)` chromaticity and
//! the white point's chromaticity, it builds the matrix `M` such that
//! `M * [1,1,1] == white_xyz` and `M` maps linear RGB to XYZ referenced to
//! that same white point.

use crate::matrix::{mat3_inverse, mat3_mul_vec3, Mat3};
use crate::white_point::WhitePoint;

/// A primary's chromaticity coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    const fn xyz(self) -> [f64; 3] {
        [self.x / self.y, 1.0, (1. - self.x - self.y) / self.y]
    }
}

/// Build the linear-RGB-to-XYZ matrix for a set of primaries and a white
/// point. The resulting XYZ is referenced to the given white point (callers
/// adapt to the hub D65 white point separately if needed, see
/// [`crate::white_point::adapt`]).
#[must_use]
pub fn rgb_to_xyz_matrix(red: Chromaticity, green: Chromaticity, blue: Chromaticity, white: WhitePoint) -> Mat3 {
    let [xr, yr, zr] = red.xyz();
    let [xg, yg, zg] = green.xyz();
    let [xb, yb, zb] = blue.xyz();

    let primaries: Mat3 = [[xr, xg, xb], [yr, yg, yb], [zr, zg, zb]];
    let primaries_inv = mat3_inverse(&primaries);
    let scale = mat3_mul_vec3(&primaries_inv, white.as_xyz());

    [
        [xr * scale[0], xg * scale[1], xb * scale[2]],
        [yr * scale[0], yg * scale[1], yb * scale[2]],
        [zr * scale[0], zg * scale[1], zb * scale[2]],
    ]
}
