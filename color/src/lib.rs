// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

//! # Color
//!
//! A hub-and-spoke color conversion engine: every built-in color space
//! ([`space`]) converts to and from CIE XYZ referenced to the D65 white
//! point, so converting between any two spaces is `to_xyz` followed by
//! `from_xyz` (see [`ColorValue::convert_to`]). Chromatic adaptation
//! ([`white_point::adapt`]) handles the one built-in space (ProPhoto RGB)
//! whose native white point isn't D65.
//!
//! The crate is organized as:
//!
//! - [`space`]: the [`space::Space`] trait and the built-in catalog (RGB
//!   family, camera LOG encodings, XYZ, Lab/LCh, OKLab/OKLCh, LUV/LCHuv,
//!   HSL/HSV/HWB).
//! - [`color_value`]: [`ColorValue`], a color tagged with the space it's
//!   expressed in.
//! - [`registry`] (requires `std`): the process-wide, name-keyed
//!   [`registry::SpaceRegistry`].
//! - [`gamut`] (requires the `gamut_map` feature, on by default): the
//!   `in_gamut` predicate and the four gamut-mapping strategies.
//! - [`diff`]: ΔE-OK, ΔE76, and CIEDE2000 color-difference metrics.
//! - [`metadata`]: compile-time descriptors (family, HDR-ness, polarity,
//!   perceptual uniformity, gamut volume) for every built-in space.
//! - [`white_point`] and [`primaries`]: chromatic adaptation and the
//!   primaries-matrix construction shared by every RGB-family space.
//! - [`transfer`]: the encode/decode transfer function catalog.
//! - [`temperature`]: a blackbody-radiation approximation over sRGB.
//! - [`cache_key`]: a bitwise hash/equality wrapper for caching on
//!   [`ColorValue`], which can't be `Hash`/`Eq` itself (it's backed by
//!   `f64`).

extern crate alloc;

mod floatfuncs;
mod primaries;

pub mod cache_key;
pub mod color_value;
pub mod diff;
pub mod error;
pub mod matrix;
pub mod metadata;
pub mod space;
pub mod temperature;
pub mod transfer;
pub mod white_point;

#[cfg(feature = "gamut_map")]
pub mod gamut;

#[cfg(feature = "std")]
pub mod registry;

#[cfg(feature = "serde")]
mod serde_impl;

pub use color_value::ColorValue;
#[cfg(feature = "bytemuck")]
pub use color_value::RawColor;
pub use error::Error;
pub use matrix::{clamp, clamp01, normalize_hue};
pub use white_point::{adapt, WhitePoint};

#[cfg(feature = "gamut_map")]
pub use gamut::{clip_to_gamut, in_gamut, map_to_gamut, GamutMapping};

#[cfg(feature = "std")]
pub use registry::SpaceRegistry;
