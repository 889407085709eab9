// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The catalog of built-in color spaces and the [`Space`] abstraction they
//! all implement.
//!
//! Every space is a bundle of a name, its channel labels, and the pair of
//! operations [`Space::to_xyz`]/[`Space::from_xyz`] that route through the
//! CIE XYZ (D65) hub -- [`crate::color_value::ColorValue::convert_to`] never
//! knows anything about a space beyond this trait.
//! RGB-family spaces additionally carry a primaries matrix and a
//! [`TransferPair`](crate::transfer::TransferPair); non-RGB spaces implement
//! the trait directly with their own closed-form formulas.
//!
//! Unlike the generic, compile-time `ColorSpace` markers common in this
//! lineage, `Space` here is object-safe and stored behind `Arc<dyn Space>` so
//! the [`SpaceRegistry`](crate::registry::SpaceRegistry) can look spaces up
//! by name at runtime.

mod hsx;
mod lab;
mod luv;
mod oklab;
mod rgb;
mod xyz;

pub use hsx::{Hsl, Hsv, Hwb};
pub use lab::{Lab, Lch};
pub use luv::{Luv, LchUv};
pub use oklab::{Oklab, Oklch};
pub use rgb::RgbSpace;

/// The sRGB space, standalone (not through the registry). Used by
/// [`crate::color_value::ColorValue::rgba`] and `from_kelvin`, which must
/// work without a [`crate::registry::SpaceRegistry`] in scope.
#[must_use]
pub fn srgb_space() -> RgbSpace {
    rgb::srgb()
}
pub use xyz::Xyz;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use crate::floatfuncs::FloatFuncs;

/// A named color space: channel labels plus the pair of operations that
/// route it through the XYZ hub.
///
/// Implementors must be pure, total, and panic-free: `to_xyz`/`from_xyz`
/// never fail, they merely produce values outside their nominal range for
/// out-of-gamut or HDR input.
pub trait Space: Send + Sync {
    /// The space's canonical name, as registered in the
    /// [`SpaceRegistry`](crate::registry::SpaceRegistry).
    fn name(&self) -> &'static str;

    /// Per-channel labels, e.g. `["L", "C", "h"]` for OKLCh.
    fn channel_labels(&self) -> [&'static str; 3];

    /// Convert this space's channels to CIE XYZ referenced to the D65 white
    /// point (the hub). Spaces whose native white point differs (ProPhoto
    /// RGB) adapt internally.
    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3];

    /// Convert CIE XYZ (D65) to this space's channels.
    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3];
}

/// Convert a Cartesian pair `(a, b)` to polar `(C, h)`, with hue in degrees
/// normalized to `[0, 360)`. A zero-chroma point has hue `0` by convention,
/// since hue is undefined at the achromatic point.
#[must_use]
pub(crate) fn cartesian_to_polar(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c == 0.0 {
        0.0
    } else {
        crate::matrix::normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

/// Convert polar `(C, h)` (degrees) back to Cartesian `(a, b)`.
#[must_use]
pub(crate) fn polar_to_cartesian(c: f64, h: f64) -> (f64, f64) {
    let rad = h.to_radians();
    (c * rad.cos(), c * rad.sin())
}

/// Build the built-in space catalog, keyed by primary name.
///
/// This is the seed list the [`SpaceRegistry`](crate::registry::SpaceRegistry)
/// loads at construction; aliases are layered on top by the registry itself.
#[must_use]
pub fn builtin_catalog() -> Vec<(&'static str, Arc<dyn Space>)> {
    macro_rules! dyn_space {
        ($e:expr) => {
            Arc::new($e) as Arc<dyn Space>
        };
    }
    vec![
        ("srgb", dyn_space!(rgb::srgb())),
        ("srgb-linear", dyn_space!(rgb::srgb_linear())),
        ("display-p3", dyn_space!(rgb::display_p3())),
        ("dci-p3", dyn_space!(rgb::dci_p3())),
        ("a98-rgb", dyn_space!(rgb::adobe_rgb())),
        ("prophoto-rgb", dyn_space!(rgb::prophoto_rgb())),
        ("rec709", dyn_space!(rgb::rec709())),
        ("rec2020", dyn_space!(rgb::rec2020())),
        ("c-log", dyn_space!(rgb::c_log())),
        ("s-log3", dyn_space!(rgb::s_log3())),
        ("v-log", dyn_space!(rgb::v_log())),
        ("arri-logc", dyn_space!(rgb::arri_logc())),
        ("red-log3g10", dyn_space!(rgb::red_log3g10())),
        ("bmd-film", dyn_space!(rgb::bmd_film())),
        ("xyz", dyn_space!(Xyz)),
        ("lab", dyn_space!(Lab)),
        ("lch", dyn_space!(Lch)),
        ("oklab", dyn_space!(Oklab)),
        ("oklch", dyn_space!(Oklch)),
        ("luv", dyn_space!(Luv)),
        ("lchuv", dyn_space!(LchUv)),
        ("hsl", dyn_space!(Hsl)),
        ("hsv", dyn_space!(Hsv)),
        ("hwb", dyn_space!(Hwb)),
    ]
}

/// Documented aliases layered onto [`builtin_catalog`]'s primary names.
#[must_use]
pub fn builtin_aliases() -> Vec<(&'static str, &'static str)> {
    vec![
        ("display-p3-d65", "display-p3"),
        ("dci-p3-d65", "dci-p3"),
        ("a98rgb", "a98-rgb"),
        ("adobe-rgb-1998", "a98-rgb"),
        ("prophoto", "prophoto-rgb"),
        ("rec-2020", "rec2020"),
        ("rec-709", "rec709"),
        ("clog", "c-log"),
        ("slog3", "s-log3"),
        ("vlog", "v-log"),
        ("logc", "arri-logc"),
        ("log3g10", "red-log3g10"),
        ("bmdfilm", "bmd-film"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_round_trips_cartesian() {
        for &(a, b) in &[(0.5, 0.3), (-0.2, 0.4), (0.0, 0.0), (-0.1, -0.1)] {
            let (c, h) = cartesian_to_polar(a, b);
            let (a2, b2) = polar_to_cartesian(c, h);
            assert!((a - a2).abs() < 1e-9);
            assert!((b - b2).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_chroma_has_zero_hue() {
        let (c, h) = cartesian_to_polar(0.0, 0.0);
        assert_eq!(c, 0.0);
        assert_eq!(h, 0.0);
    }
}
