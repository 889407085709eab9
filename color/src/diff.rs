// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color-difference metrics: `delta_e_ok`, `delta_e_76`, and the full
//! CIEDE2000 formula, with `kL = kC = kH = 1`.

use alloc::sync::Arc;

use crate::color_value::ColorValue;
use crate::floatfuncs::FloatFuncs;
use crate::space::{Lab, Oklab, Space};

fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    let (d0, d1, d2) = (a[0] - b[0], a[1] - b[1], a[2] - b[2]);
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

/// ΔE-OK: Euclidean distance between `c1` and `c2` in OKLab.
#[must_use]
pub fn delta_e_ok(c1: &ColorValue, c2: &ColorValue) -> f64 {
    let oklab: Arc<dyn Space> = Arc::new(Oklab);
    euclidean(oklab.from_xyz(c1.to_xyz()), oklab.from_xyz(c2.to_xyz()))
}

/// ΔE76: Euclidean distance between `c1` and `c2` in CIE Lab.
#[must_use]
pub fn delta_e_76(c1: &ColorValue, c2: &ColorValue) -> f64 {
    let lab: Arc<dyn Space> = Arc::new(Lab);
    euclidean(lab.from_xyz(c1.to_xyz()), lab.from_xyz(c2.to_xyz()))
}

/// The full CIEDE2000 formula (`kL = kC = kH = 1`), including the
/// chroma-average adjustment factor `G` (constant `25^7`), the hue-average
/// weighting function `T`, and the blue-region rotation term `RT`.
#[must_use]
pub fn delta_e_2000(c1: &ColorValue, c2: &ColorValue) -> f64 {
    let lab: Arc<dyn Space> = Arc::new(Lab);
    let [l1, a1, b1] = lab.from_xyz(c1.to_xyz());
    let [l2, a2, b2] = lab.from_xyz(c2.to_xyz());

    let c1_ab = (a1 * a1 + b1 * b1).sqrt();
    let c2_ab = (a2 * a2 + b2 * b2).sqrt();
    let avg_c_ab = (c1_ab + c2_ab) / 2.0;

    const POW25_7: f64 = 6_103_515_625.0; // 25^7
    let g = 0.5 * (1.0 - (avg_c_ab.powf(7.0) / (avg_c_ab.powf(7.0) + POW25_7)).sqrt());
    let a1_p = (1.0 + g) * a1;
    let a2_p = (1.0 + g) * a2;

    let c1_p = (a1_p * a1_p + b1 * b1).sqrt();
    let c2_p = (a2_p * a2_p + b2 * b2).sqrt();

    let hue_prime = |b: f64, a_p: f64| -> f64 {
        if b == 0.0 && a_p == 0.0 {
            0.0
        } else {
            let h = b.atan2(a_p).to_degrees();
            if h < 0.0 {
                h + 360.0
            } else {
                h
            }
        }
    };
    let h1_p = hue_prime(b1, a1_p);
    let h2_p = hue_prime(b2, a2_p);

    let chroma_product = c1_p * c2_p;

    let delta_l_p = l2 - l1;
    let delta_c_p = c2_p - c1_p;

    let mut delta_h_p_deg = h2_p - h1_p;
    if chroma_product != 0.0 {
        if delta_h_p_deg.abs() > 180.0 {
            if h2_p <= h1_p {
                delta_h_p_deg += 360.0;
            } else {
                delta_h_p_deg -= 360.0;
            }
        }
    } else {
        delta_h_p_deg = 0.0;
    }
    let delta_h_p = 2.0 * chroma_product.sqrt() * (delta_h_p_deg / 2.0).to_radians().sin();

    let avg_l_p = (l1 + l2) / 2.0;
    let avg_c_p = (c1_p + c2_p) / 2.0;

    let avg_h_p = if chroma_product == 0.0 {
        h1_p + h2_p
    } else if (h1_p - h2_p).abs() > 180.0 {
        if h1_p + h2_p < 360.0 {
            (h1_p + h2_p + 360.0) / 2.0
        } else {
            (h1_p + h2_p - 360.0) / 2.0
        }
    } else {
        (h1_p + h2_p) / 2.0
    };

    let t = 1.0 - 0.17 * (avg_h_p - 30.0).to_radians().cos() + 0.24 * (2.0 * avg_h_p).to_radians().cos()
        + 0.32 * (3.0 * avg_h_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * avg_h_p - 63.0).to_radians().cos();

    let s_l = 1.0 + (0.015 * (avg_l_p - 50.0).powf(2.0)) / (20.0 + (avg_l_p - 50.0).powf(2.0)).sqrt();
    let s_c = 1.0 + 0.045 * avg_c_p;
    let s_h = 1.0 + 0.015 * avg_c_p * t;

    let delta_theta = 30.0 * (-((avg_h_p - 275.0) / 25.0).powf(2.0)).exp();
    let r_c = 2.0 * (avg_c_p.powf(7.0) / (avg_c_p.powf(7.0) + POW25_7)).sqrt();
    let r_t = -r_c * (2.0 * delta_theta).to_radians().sin();

    let term_l = delta_l_p / s_l;
    let term_c = delta_c_p / s_c;
    let term_h = delta_h_p / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::srgb_space;

    fn srgb(r: f64, g: f64, b: f64) -> ColorValue {
        ColorValue::new(Arc::new(srgb_space()), [r, g, b], 1.0)
    }

    #[test]
    fn identical_colors_have_zero_difference() {
        let c = srgb(0.3, 0.6, 0.9);
        assert_eq!(delta_e_ok(&c, &c), 0.0);
        assert_eq!(delta_e_76(&c, &c), 0.0);
        assert!(delta_e_2000(&c, &c) < 1e-9);
    }

    #[test]
    fn all_three_metrics_are_symmetric() {
        let c1 = srgb(0.8, 0.2, 0.1);
        let c2 = srgb(0.1, 0.5, 0.9);
        assert!((delta_e_ok(&c1, &c2) - delta_e_ok(&c2, &c1)).abs() < 1e-9);
        assert!((delta_e_76(&c1, &c2) - delta_e_76(&c2, &c1)).abs() < 1e-9);
        assert!((delta_e_2000(&c1, &c2) - delta_e_2000(&c2, &c1)).abs() < 1e-9);
    }

    #[test]
    fn black_to_white_is_large_and_finite() {
        let black = srgb(0.0, 0.0, 0.0);
        let white = srgb(1.0, 1.0, 1.0);
        let d = delta_e_2000(&black, &white);
        assert!(d.is_finite());
        assert!(d > 90.0);
    }

    #[test]
    fn delta_e_is_monotone_on_a_straight_line() {
        let c1 = srgb(0.0, 0.0, 0.0);
        let c2 = srgb(0.5, 0.5, 0.5);
        let c3 = srgb(1.0, 1.0, 1.0);
        assert!(delta_e_ok(&c1, &c2) <= delta_e_ok(&c1, &c3));
        assert!(delta_e_76(&c1, &c2) <= delta_e_76(&c1, &c3));
        assert!(delta_e_2000(&c1, &c2) <= delta_e_2000(&c1, &c3));
    }
}

