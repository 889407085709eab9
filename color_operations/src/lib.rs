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

//! # Color Operations
//!
//! Perceptual operations and gradients built on top of [`color`]'s
//! hub-and-spoke conversion engine.
//!
//! - [`ops`]: lighten/darken/saturate/desaturate/adjust-hue/complement/mix,
//!   all routed through OKLCh, plus the sRGB-direct `invert`/`grayscale`
//!   and the alpha-only helpers.
//! - [`gradient`]: two-endpoint and multi-stop gradients, with pluggable
//!   easing and a choice of interpolation space and hue policy.
//! - [`easing`]: the built-in easing library (linear, quadratic, cubic,
//!   sine, each in/out/in-out).

extern crate alloc;

mod floatfuncs;

pub mod easing;
pub mod gradient;
pub mod ops;

pub use gradient::{
    gradient, gradient_in_space, gradient_multistop, gradient_multistop_with_easing, gradient_multistop_with_easing_and_hue,
    gradient_multistop_with_hue, gradient_with_easing, gradient_with_easing_and_hue, gradient_with_hue, GradientSpace, GradientStop,
    HueInterpolation,
};
pub use ops::{
    adjust_hue, complement, darken, desaturate, fade_in, fade_out, grayscale, invert, lighten, max_oklch_chroma_estimate, mix_oklch, mix_rgb,
    opacity, saturate,
};
