// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RGB-family spaces: a primaries matrix + transfer pair + source white
//! point bundle, shared by sRGB, the wide-gamut variants, and the six
//! camera LOG encodings.

use super::Space;
use crate::matrix::{mat3_inverse, mat3_mul_vec3, Mat3};
use crate::primaries::{rgb_to_xyz_matrix, Chromaticity};
use crate::transfer::{
    TransferPair, ARRI_LOGC, BMD_FILM, C_LOG, GAMMA_1_8, GAMMA_2_2, GAMMA_2_6, LINEAR, RED_LOG3G10,
    REC2020_SIMPLIFIED, S_LOG3, SRGB, V_LOG,
};
use crate::white_point::{adapt, WhitePoint};

/// An RGB-family color space: linear-RGB/XYZ matrix pair, transfer
/// function, and source white point.
#[derive(Clone, Copy, Debug)]
pub struct RgbSpace {
    name: &'static str,
    to_xyz: Mat3,
    from_xyz: Mat3,
    transfer: TransferPair,
    white: WhitePoint,
}

impl RgbSpace {
    fn build(
        name: &'static str,
        red: Chromaticity,
        green: Chromaticity,
        blue: Chromaticity,
        white: WhitePoint,
        transfer: TransferPair,
    ) -> Self {
        let to_xyz = rgb_to_xyz_matrix(red, green, blue, white);
        let from_xyz = mat3_inverse(&to_xyz);
        Self {
            name,
            to_xyz,
            from_xyz,
            transfer,
            white,
        }
    }
}

impl Space for RgbSpace {
    fn name(&self) -> &'static str {
        self.name
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["r", "g", "b"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        let linear = [
            self.transfer.decode(channels[0]),
            self.transfer.decode(channels[1]),
            self.transfer.decode(channels[2]),
        ];
        let xyz = mat3_mul_vec3(&self.to_xyz, linear);
        adapt(xyz, self.white, WhitePoint::D65)
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let linear = self.linear_from_xyz(xyz);
        [
            self.transfer.encode(linear[0]),
            self.transfer.encode(linear[1]),
            self.transfer.encode(linear[2]),
        ]
    }
}

impl RgbSpace {
    /// XYZ (D65) to this space's linear-light RGB, without applying the
    /// transfer function's encode step. Used by [`crate::gamut::in_gamut`]
    /// to test gamut membership directly in linear-light RGB.
    #[must_use]
    pub fn linear_from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let xyz = adapt(xyz, WhitePoint::D65, self.white);
        mat3_mul_vec3(&self.from_xyz, xyz)
    }
}

// --- Rec.709 / sRGB primaries (shared by sRGB, sRGB-linear, Rec.709) ------

const REC709_RED: Chromaticity = Chromaticity { x: 0.6400, y: 0.3300 };
const REC709_GREEN: Chromaticity = Chromaticity { x: 0.3000, y: 0.6000 };
const REC709_BLUE: Chromaticity = Chromaticity { x: 0.1500, y: 0.0600 };

pub(crate) fn srgb() -> RgbSpace {
    RgbSpace::build("srgb", REC709_RED, REC709_GREEN, REC709_BLUE, WhitePoint::D65, SRGB)
}

pub(crate) fn srgb_linear() -> RgbSpace {
    RgbSpace::build("srgb-linear", REC709_RED, REC709_GREEN, REC709_BLUE, WhitePoint::D65, LINEAR)
}

pub(crate) fn rec709() -> RgbSpace {
    RgbSpace::build("rec709", REC709_RED, REC709_GREEN, REC709_BLUE, WhitePoint::D65, SRGB)
}

// --- Display P3 / DCI-P3 (DCI/P3 primaries) -------------------------------

const P3_RED: Chromaticity = Chromaticity { x: 0.6800, y: 0.3200 };
const P3_GREEN: Chromaticity = Chromaticity { x: 0.2650, y: 0.6900 };
const P3_BLUE: Chromaticity = Chromaticity { x: 0.1500, y: 0.0600 };

pub(crate) fn display_p3() -> RgbSpace {
    RgbSpace::build("display-p3", P3_RED, P3_GREEN, P3_BLUE, WhitePoint::D65, SRGB)
}

pub(crate) fn dci_p3() -> RgbSpace {
    RgbSpace::build("dci-p3", P3_RED, P3_GREEN, P3_BLUE, WhitePoint::D65, GAMMA_2_6)
}

// --- Adobe RGB (a98-rgb) --------------------------------------------------

pub(crate) fn adobe_rgb() -> RgbSpace {
    RgbSpace::build(
        "a98-rgb",
        Chromaticity { x: 0.6400, y: 0.3300 },
        Chromaticity { x: 0.2100, y: 0.7100 },
        Chromaticity { x: 0.1500, y: 0.0600 },
        WhitePoint::D65,
        GAMMA_2_2,
    )
}

// --- ProPhoto RGB (D50 source white point) --------------------------------

pub(crate) fn prophoto_rgb() -> RgbSpace {
    RgbSpace::build(
        "prophoto-rgb",
        Chromaticity { x: 0.7347, y: 0.2653 },
        Chromaticity { x: 0.1596, y: 0.8404 },
        Chromaticity { x: 0.0366, y: 0.0001 },
        WhitePoint::D50,
        GAMMA_1_8,
    )
}

// --- Rec.2020 --------------------------------------------------------------

const REC2020_RED: Chromaticity = Chromaticity { x: 0.7080, y: 0.2920 };
const REC2020_GREEN: Chromaticity = Chromaticity { x: 0.1700, y: 0.7970 };
const REC2020_BLUE: Chromaticity = Chromaticity { x: 0.1310, y: 0.0460 };

pub(crate) fn rec2020() -> RgbSpace {
    RgbSpace::build(
        "rec2020",
        REC2020_RED,
        REC2020_GREEN,
        REC2020_BLUE,
        WhitePoint::D65,
        REC2020_SIMPLIFIED,
    )
}

// --- Camera LOG spaces, each paired with its camera-native wide primaries -

pub(crate) fn c_log() -> RgbSpace {
    // Canon Cinema Gamut.
    RgbSpace::build(
        "c-log",
        Chromaticity { x: 0.7400, y: 0.2700 },
        Chromaticity { x: 0.1700, y: 1.1400 },
        Chromaticity { x: 0.0800, y: -0.1000 },
        WhitePoint::D65,
        C_LOG,
    )
}

pub(crate) fn s_log3() -> RgbSpace {
    // Sony S-Gamut3.
    RgbSpace::build(
        "s-log3",
        Chromaticity { x: 0.7300, y: 0.2800 },
        Chromaticity { x: 0.1400, y: 0.8550 },
        Chromaticity { x: 0.1000, y: -0.0500 },
        WhitePoint::D65,
        S_LOG3,
    )
}

pub(crate) fn v_log() -> RgbSpace {
    // Panasonic V-Gamut.
    RgbSpace::build(
        "v-log",
        Chromaticity { x: 0.7300, y: 0.2800 },
        Chromaticity { x: 0.1650, y: 0.8400 },
        Chromaticity { x: 0.1000, y: -0.0300 },
        WhitePoint::D65,
        V_LOG,
    )
}

pub(crate) fn arri_logc() -> RgbSpace {
    // Arri Wide Gamut.
    RgbSpace::build(
        "arri-logc",
        Chromaticity { x: 0.6840, y: 0.3130 },
        Chromaticity { x: 0.2210, y: 0.8480 },
        Chromaticity { x: 0.0861, y: -0.1020 },
        WhitePoint::D65,
        ARRI_LOGC,
    )
}

pub(crate) fn red_log3g10() -> RgbSpace {
    // RED Wide Gamut RGB.
    RgbSpace::build(
        "red-log3g10",
        Chromaticity { x: 0.7800, y: 0.3040 },
        Chromaticity { x: 0.1210, y: 1.0400 },
        Chromaticity { x: 0.0950, y: -0.0820 },
        WhitePoint::D65,
        RED_LOG3G10,
    )
}

pub(crate) fn bmd_film() -> RgbSpace {
    // Blackmagic Wide Gamut.
    RgbSpace::build(
        "bmd-film",
        Chromaticity { x: 0.7177, y: 0.3171 },
        Chromaticity { x: 0.2280, y: 0.8616 },
        Chromaticity { x: 0.1006, y: -0.0820 },
        WhitePoint::D65,
        BMD_FILM,
    )
}
