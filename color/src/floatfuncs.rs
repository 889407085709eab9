// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `no_std`-compatible float transcendental functions.
//!
//! Core Rust doesn't provide `powf`/`log10`/`cbrt` and friends without `std`,
//! so under `feature = "libm"` (and no `std`) this crate routes through the
//! `libm` crate instead. The `FloatFuncs` extension trait lets the rest of
//! the crate call `x.powf(y)` uniformly regardless of which backend is
//! active.

pub(crate) trait FloatFuncs {
    fn powf(self, y: f64) -> f64;
    fn log10(self) -> f64;
    fn log2(self) -> f64;
    fn ln(self) -> f64;
    fn cbrt(self) -> f64;
    fn sqrt(self) -> f64;
    fn exp(self) -> f64;
    fn hypot(self, other: f64) -> f64;
    fn atan2(self, other: f64) -> f64;
    fn sin(self) -> f64;
    fn cos(self) -> f64;
    fn to_radians(self) -> f64;
    fn to_degrees(self) -> f64;
}

#[cfg(feature = "std")]
impl FloatFuncs for f64 {
    fn powf(self, y: f64) -> f64 {
        f64::powf(self, y)
    }
    fn log10(self) -> f64 {
        f64::log10(self)
    }
    fn log2(self) -> f64 {
        f64::log2(self)
    }
    fn ln(self) -> f64 {
        f64::ln(self)
    }
    fn cbrt(self) -> f64 {
        f64::cbrt(self)
    }
    fn sqrt(self) -> f64 {
        f64::sqrt(self)
    }
    fn exp(self) -> f64 {
        f64::exp(self)
    }
    fn hypot(self, other: f64) -> f64 {
        f64::hypot(self, other)
    }
    fn atan2(self, other: f64) -> f64 {
        f64::atan2(self, other)
    }
    fn sin(self) -> f64 {
        f64::sin(self)
    }
    fn cos(self) -> f64 {
        f64::cos(self)
    }
    fn to_radians(self) -> f64 {
        f64::to_radians(self)
    }
    fn to_degrees(self) -> f64 {
        f64::to_degrees(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatFuncs for f64 {
    fn powf(self, y: f64) -> f64 {
        libm::pow(self, y)
    }
    fn log10(self) -> f64 {
        libm::log10(self)
    }
    fn log2(self) -> f64 {
        libm::log2(self)
    }
    fn ln(self) -> f64 {
        libm::log(self)
    }
    fn cbrt(self) -> f64 {
        libm::cbrt(self)
    }
    fn sqrt(self) -> f64 {
        libm::sqrt(self)
    }
    fn exp(self) -> f64 {
        libm::exp(self)
    }
    fn hypot(self, other: f64) -> f64 {
        libm::hypot(self, other)
    }
    fn atan2(self, other: f64) -> f64 {
        libm::atan2(self, other)
    }
    fn sin(self) -> f64 {
        libm::sin(self)
    }
    fn cos(self) -> f64 {
        libm::cos(self)
    }
    fn to_radians(self) -> f64 {
        self * (core::f64::consts::PI / 180.0)
    }
    fn to_degrees(self) -> f64 {
        self * (180.0 / core::f64::consts::PI)
    }
}
