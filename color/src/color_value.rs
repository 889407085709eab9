// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`ColorValue`]: a tagged pair of (space reference, channel vector) plus
//! alpha, rather than an inheritance hierarchy of per-space classes -- a
//! color in any space is a value of this one type.

use alloc::sync::Arc;

use crate::error::Error;
use crate::matrix::clamp01;
use crate::space::{self, Space};
use crate::temperature::kelvin_to_srgb;

/// A color in a named space: a channel vector plus alpha, all immutable
/// after construction. Every operation that changes a `ColorValue` returns
/// a new one.
#[derive(Clone)]
pub struct ColorValue {
    space: Arc<dyn Space>,
    channels: [f64; 3],
    alpha: f64,
}

impl core::fmt::Debug for ColorValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColorValue")
            .field("space", &self.space.name())
            .field("channels", &self.channels)
            .field("alpha", &self.alpha)
            .finish()
    }
}

impl ColorValue {
    /// Construct a color in `space` with the given `channels` and `alpha`
    /// (clamped to `[0, 1]`). `channels` is defensively copied (it's `Copy`,
    /// so this is implicit).
    #[must_use]
    pub fn new(space: Arc<dyn Space>, channels: [f64; 3], alpha: f64) -> Self {
        Self {
            space,
            channels,
            alpha: clamp01(alpha),
        }
    }

    /// The space this value is expressed in.
    #[must_use]
    pub fn space(&self) -> &Arc<dyn Space> {
        &self.space
    }

    /// A defensive copy of the channel vector.
    #[must_use]
    pub fn channels(&self) -> [f64; 3] {
        self.channels
    }

    /// The stored alpha.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// A new value with `alpha` replaced (clamped to `[0, 1]`), all other
    /// fields unchanged.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            space: self.space.clone(),
            channels: self.channels,
            alpha: clamp01(alpha),
        }
    }

    /// Convert to CIE XYZ (D65), the hub.
    #[must_use]
    pub fn to_xyz(&self) -> [f64; 3] {
        self.space.to_xyz(self.channels)
    }

    /// Convert to `target`, preserving alpha.
    #[must_use]
    pub fn convert_to(&self, target: Arc<dyn Space>) -> Self {
        let xyz = self.to_xyz();
        let channels = target.from_xyz(xyz);
        Self {
            space: target,
            channels,
            alpha: self.alpha,
        }
    }

    /// Explicit sRGB reduction: convert to XYZ, apply the sRGB primaries
    /// inverse and encode, then clamp to `[0, 1]`. This is the only place
    /// in the core that silently clips.
    #[must_use]
    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        let srgb: Arc<dyn Space> = Arc::new(space::srgb_space());
        let [r, g, b] = srgb.from_xyz(self.to_xyz());
        (clamp01(r), clamp01(g), clamp01(b), self.alpha)
    }

    /// WCAG-style relative luminance: the Y channel of this color's CIE
    /// XYZ, which for sRGB-primaried content is exactly the WCAG weighted
    /// sum of linear-light channels.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        self.to_xyz()[1]
    }

    /// Construct an sRGB color approximating a blackbody radiator at
    /// `kelvin`, using the Tanner Helland approximation.
    #[must_use]
    pub fn from_kelvin(kelvin: f64, alpha: f64) -> Self {
        let srgb: Arc<dyn Space> = Arc::new(space::srgb_space());
        Self::new(srgb, kelvin_to_srgb(kelvin), alpha)
    }

    /// A plain-old-data snapshot of this color's channels and alpha,
    /// losing the space tag (see [`RawColor`]).
    #[cfg(feature = "bytemuck")]
    #[must_use]
    pub fn to_raw(&self) -> RawColor {
        RawColor {
            channels: self.channels,
            alpha: self.alpha,
        }
    }

    /// Construct a color with an explicit channel arity check, returning
    /// [`Error::ChannelArityMismatch`] if `channels.len()` doesn't match
    /// `space`'s channel count (all built-in spaces are 3-channel, so this
    /// always succeeds for them; it exists for callers that build
    /// `channels` dynamically and want a checked constructor).
    pub fn try_new(space: Arc<dyn Space>, channels: &[f64], alpha: f64) -> Result<Self, Error> {
        if channels.len() != 3 {
            return Err(Error::ChannelArityMismatch {
                expected: 3,
                found: channels.len(),
            });
        }
        Ok(Self::new(space, [channels[0], channels[1], channels[2]], alpha))
    }
}

/// A plain-old-data, space-less snapshot of a [`ColorValue`]'s channels and
/// alpha, for interop with GPU/graphics buffers. `ColorValue` itself can't
/// be `Pod` -- it carries an `Arc<dyn Space>` -- so this is the plain
/// struct that can be cast to/from a `&[u8]` buffer; pair it with a known
/// space to recover a full `ColorValue` via [`ColorValue::new`].
#[cfg(feature = "bytemuck")]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct RawColor {
    /// The channel vector, in the snapshotted color's original space.
    pub channels: [f64; 3],
    /// The alpha value, already clamped to `[0, 1]`.
    pub alpha: f64,
}

#[cfg(feature = "bytemuck")]
impl RawColor {
    /// Re-attach `space` to this raw snapshot, recovering a [`ColorValue`].
    #[must_use]
    pub fn into_color(self, space: Arc<dyn Space>) -> ColorValue {
        ColorValue::new(space, self.channels, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn srgb() -> Arc<dyn Space> {
        Arc::new(crate::space::srgb_space())
    }

    #[test]
    fn alpha_is_clamped() {
        let c = ColorValue::new(srgb(), [0.0, 0.0, 0.0], 5.0);
        assert_eq!(c.alpha(), 1.0);
        let c = ColorValue::new(srgb(), [0.0, 0.0, 0.0], -5.0);
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn with_alpha_preserves_channels() {
        let c = ColorValue::new(srgb(), [0.2, 0.4, 0.6], 0.5);
        let c2 = c.with_alpha(0.9);
        assert_eq!(c2.channels(), [0.2, 0.4, 0.6]);
        assert_eq!(c2.alpha(), 0.9);
    }

    #[test]
    fn try_new_rejects_wrong_arity() {
        let err = ColorValue::try_new(srgb(), &[0.1, 0.2], 1.0).unwrap_err();
        assert_eq!(
            err,
            Error::ChannelArityMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rgba_clips_out_of_gamut_colors() {
        let oklch: Arc<dyn Space> = Arc::new(crate::space::Oklch);
        let vivid = ColorValue::new(oklch, [0.7, 0.4, 30.0], 1.0);
        let (r, g, b, a) = vivid.rgba();
        assert!((0.0..=1.0).contains(&r));
        assert!((0.0..=1.0).contains(&g));
        assert!((0.0..=1.0).contains(&b));
        assert_eq!(a, 1.0);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn raw_color_round_trips_through_bytes() {
        let c = ColorValue::new(srgb(), [0.2, 0.4, 0.6], 0.8);
        let raw = c.to_raw();
        let bytes = bytemuck::bytes_of(&raw);
        let back: &RawColor = bytemuck::from_bytes(bytes);
        assert_eq!(*back, raw);
        let reattached = back.into_color(srgb());
        assert_eq!(reattached.channels(), c.channels());
        assert_eq!(reattached.alpha(), c.alpha());
    }
}
