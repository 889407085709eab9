// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-space metadata descriptors: family, RGB-ness, HDR capability,
//! polarity, perceptual uniformity, reference white, and gamut volume
//! relative to sRGB. These are compile-time records, looked up by the
//! space's primary registry name.

/// A read-only descriptor attached to each built-in space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceMetadata {
    /// Family tag: `"RGB"` for every RGB-family space, otherwise the
    /// space's own name.
    pub family: &'static str,
    /// Whether the space is part of the RGB family (primaries matrix +
    /// transfer pair over some white point).
    pub is_rgb: bool,
    /// Whether the space can represent values outside `[0, 1]` without
    /// loss (linear-light and camera LOG encodings).
    pub is_hdr: bool,
    /// Whether the space is cylindrical (has a hue channel).
    pub is_polar: bool,
    /// Whether Euclidean distance in this space approximates perceived
    /// color difference.
    pub is_perceptually_uniform: bool,
    /// The space's reference white, as a label (`"D65"` or `"D50"`).
    pub white_point: &'static str,
    /// The space's gamut volume relative to sRGB's (sRGB itself is `1.0`).
    pub relative_gamut_volume: f64,
}

macro_rules! rgb_metadata {
    ($name:expr, $white:expr, $volume:expr) => {
        SpaceMetadata {
            family: "RGB",
            is_rgb: true,
            is_hdr: false,
            is_polar: false,
            is_perceptually_uniform: false,
            white_point: $white,
            relative_gamut_volume: $volume,
        }
    };
}

macro_rules! hdr_rgb_metadata {
    ($white:expr, $volume:expr) => {
        SpaceMetadata {
            family: "RGB",
            is_rgb: true,
            is_hdr: true,
            is_polar: false,
            is_perceptually_uniform: false,
            white_point: $white,
            relative_gamut_volume: $volume,
        }
    };
}

macro_rules! non_rgb_metadata {
    ($name:expr, $polar:expr, $uniform:expr) => {
        SpaceMetadata {
            family: $name,
            is_rgb: false,
            is_hdr: false,
            is_polar: $polar,
            is_perceptually_uniform: $uniform,
            white_point: "D65",
            relative_gamut_volume: 1.0,
        }
    };
}

/// Look up the metadata record for a built-in space by its primary
/// registry name. Aliases are not separately recorded here; resolve an
/// alias to its primary name first if needed.
#[must_use]
pub fn metadata(name: &str) -> Option<SpaceMetadata> {
    Some(match name {
        "srgb" => rgb_metadata!("sRGB", "D65", 1.0),
        "srgb-linear" => hdr_rgb_metadata!("D65", 1.0),
        "rec709" => rgb_metadata!("Rec.709", "D65", 1.0),
        "display-p3" => rgb_metadata!("Display P3", "D65", 1.26),
        "dci-p3" => rgb_metadata!("DCI-P3", "D65", 1.26),
        "a98-rgb" => rgb_metadata!("Adobe RGB (a98)", "D65", 1.24),
        "prophoto-rgb" => rgb_metadata!("ProPhoto RGB", "D50", 2.89),
        "rec2020" => rgb_metadata!("Rec.2020", "D65", 1.73),
        "c-log" => hdr_rgb_metadata!("D65", 1.85),
        "s-log3" => hdr_rgb_metadata!("D65", 1.95),
        "v-log" => hdr_rgb_metadata!("D65", 1.85),
        "arri-logc" => hdr_rgb_metadata!("D65", 1.80),
        "red-log3g10" => hdr_rgb_metadata!("D65", 2.10),
        "bmd-film" => hdr_rgb_metadata!("D65", 1.90),
        "xyz" => non_rgb_metadata!("XYZ", false, false),
        "lab" => non_rgb_metadata!("Lab", false, true),
        "lch" => non_rgb_metadata!("Lab", true, true),
        "oklab" => non_rgb_metadata!("OKLab", false, true),
        "oklch" => non_rgb_metadata!("OKLab", true, true),
        "luv" => non_rgb_metadata!("Luv", false, true),
        "lchuv" => non_rgb_metadata!("Luv", true, true),
        "hsl" => non_rgb_metadata!("sRGB", true, false),
        "hsv" => non_rgb_metadata!("sRGB", true, false),
        "hwb" => non_rgb_metadata!("sRGB", true, false),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_space_has_no_metadata() {
        assert_eq!(metadata("not-a-space"), None);
    }

    #[test]
    fn rgb_family_flags_are_consistent() {
        for name in ["srgb", "display-p3", "a98-rgb", "prophoto-rgb", "rec2020"] {
            let m = metadata(name).unwrap();
            assert!(m.is_rgb);
            assert_eq!(m.family, "RGB");
            assert!(!m.is_polar);
        }
    }

    #[test]
    fn perceptual_spaces_are_flagged_uniform() {
        for name in ["lab", "lch", "oklab", "oklch", "luv", "lchuv"] {
            assert!(metadata(name).unwrap().is_perceptually_uniform, "{name}");
        }
        for name in ["hsl", "hsv", "hwb", "xyz"] {
            assert!(!metadata(name).unwrap().is_perceptually_uniform, "{name}");
        }
    }

    #[test]
    fn polar_spaces_are_flagged() {
        for name in ["lch", "oklch", "lchuv", "hsl", "hsv", "hwb"] {
            assert!(metadata(name).unwrap().is_polar, "{name}");
        }
    }

    #[test]
    fn wide_gamut_spaces_exceed_srgb_volume() {
        assert!(metadata("display-p3").unwrap().relative_gamut_volume > 1.0);
        assert!(metadata("rec2020").unwrap().relative_gamut_volume > metadata("display-p3").unwrap().relative_gamut_volume);
        assert!(metadata("prophoto-rgb").unwrap().relative_gamut_volume > metadata("rec2020").unwrap().relative_gamut_volume);
    }
}
