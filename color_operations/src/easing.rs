// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing functions for gradient sampling.
//!
//! An easing function is any `Fn(f64) -> f64` satisfying `ease(0) == 0`,
//! `ease(1) == 1`, and `ease(t) in [0, 1]` for `t in [0, 1]`. The library
//! does not enforce the endpoint convention at the type level -- it's
//! documented here instead.

use crate::floatfuncs::FloatFuncs;

const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// The identity easing: `ease(t) = t`.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

/// `ease(t) = t^2`.
#[must_use]
pub fn quadratic_in(t: f64) -> f64 {
    t * t
}

/// `ease(t) = 1 - (1 - t)^2`.
#[must_use]
pub fn quadratic_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in for `t < 0.5`, ease-out for `t >= 0.5`.
#[must_use]
pub fn quadratic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powf(2.0) / 2.0
    }
}

/// `ease(t) = t^3`.
#[must_use]
pub fn cubic_in(t: f64) -> f64 {
    t * t * t
}

/// `ease(t) = 1 - (1 - t)^3`.
#[must_use]
pub fn cubic_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powf(3.0)
}

/// Cubic ease-in for `t < 0.5`, ease-out for `t >= 0.5`.
#[must_use]
pub fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powf(3.0) / 2.0
    }
}

/// `ease(t) = 1 - cos(t * pi / 2)`.
#[must_use]
pub fn sine_in(t: f64) -> f64 {
    1.0 - (t * HALF_PI).cos()
}

/// `ease(t) = sin(t * pi / 2)`.
#[must_use]
pub fn sine_out(t: f64) -> f64 {
    (t * HALF_PI).sin()
}

/// `ease(t) = -(cos(pi * t) - 1) / 2`.
#[must_use]
pub fn sine_in_out(t: f64) -> f64 {
    -((core::f64::consts::PI * t).cos() - 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASINGS: [(&str, fn(f64) -> f64); 10] = [
        ("linear", linear),
        ("quadratic_in", quadratic_in),
        ("quadratic_out", quadratic_out),
        ("quadratic_in_out", quadratic_in_out),
        ("cubic_in", cubic_in),
        ("cubic_out", cubic_out),
        ("cubic_in_out", cubic_in_out),
        ("sine_in", sine_in),
        ("sine_out", sine_out),
        ("sine_in_out", sine_in_out),
    ];

    #[test]
    fn every_builtin_satisfies_the_endpoint_convention() {
        for (name, ease) in EASINGS {
            assert!((ease(0.0)).abs() < 1e-9, "{name}(0) != 0");
            assert!((ease(1.0) - 1.0).abs() < 1e-9, "{name}(1) != 1");
        }
    }

    #[test]
    fn every_builtin_stays_within_unit_range_on_the_sample_grid() {
        for (name, ease) in EASINGS {
            let mut t = 0.0;
            while t <= 1.0 {
                let v = ease(t);
                assert!((0.0..=1.0 + 1e-9).contains(&v), "{name}({t}) = {v} out of range");
                t += 0.05;
            }
        }
    }
}
