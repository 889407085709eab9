// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `no_std`-compatible float transcendental functions, mirroring
//! [`color`]'s internal module of the same name: under `feature = "libm"`
//! (and no `std`), this routes `sin`/`cos`/`powf` through the `libm` crate
//! instead of `std`.

pub(crate) trait FloatFuncs {
    fn powf(self, y: f64) -> f64;
    fn sin(self) -> f64;
    fn cos(self) -> f64;
}

#[cfg(feature = "std")]
impl FloatFuncs for f64 {
    fn powf(self, y: f64) -> f64 {
        f64::powf(self, y)
    }
    fn sin(self) -> f64 {
        f64::sin(self)
    }
    fn cos(self) -> f64 {
        f64::cos(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatFuncs for f64 {
    fn powf(self, y: f64) -> f64 {
        libm::pow(self, y)
    }
    fn sin(self) -> f64 {
        libm::sin(self)
    }
    fn cos(self) -> f64 {
        libm::cos(self)
    }
}
