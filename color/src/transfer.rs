// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transfer function catalog.
//!
//! A [`TransferPair`] bundles the `encode`/`decode` functions for a color
//! space as a record of two function pointers, rather than as methods on
//! per-space types. `encode` maps scene/display-linear values to the
//! space's native (usually non-linear) signal; `decode` is its inverse.

use crate::floatfuncs::FloatFuncs;

/// A pair of mutually-inverse encode/decode functions.
#[derive(Clone, Copy, Debug)]
pub struct TransferPair {
    /// Maps a scene/display-linear value to the space's native signal.
    pub encode: fn(f64) -> f64,
    /// Maps the space's native signal back to a linear value.
    pub decode: fn(f64) -> f64,
}

impl TransferPair {
    #[must_use]
    pub fn encode(&self, linear: f64) -> f64 {
        (self.encode)(linear)
    }

    #[must_use]
    pub fn decode(&self, encoded: f64) -> f64 {
        (self.decode)(encoded)
    }
}

fn srgb_encode(x: f64) -> f64 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1. / 2.4) - 0.055
    }
}

fn srgb_decode(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// The sRGB piecewise transfer function.
pub const SRGB: TransferPair = TransferPair {
    encode: srgb_encode,
    decode: srgb_decode,
};

fn linear_identity(x: f64) -> f64 {
    x
}

/// The identity transfer function, for linear-light color spaces.
pub const LINEAR: TransferPair = TransferPair {
    encode: linear_identity,
    decode: linear_identity,
};

// `fn` pointers can't close over a runtime gamma value, so each concrete
// gamma used by the built-in catalog gets its own pair of free functions,
// generated below.
macro_rules! gamma_pair {
    ($name_enc:ident, $name_dec:ident, $gamma:expr) => {
        fn $name_enc(x: f64) -> f64 {
            if x >= 0. {
                x.powf(1. / $gamma)
            } else {
                0.
            }
        }
        fn $name_dec(x: f64) -> f64 {
            if x >= 0. {
                x.powf($gamma)
            } else {
                0.
            }
        }
    };
}

gamma_pair!(gamma18_encode, gamma18_decode, 1.8);
gamma_pair!(gamma22_encode, gamma22_decode, 2.2);
gamma_pair!(gamma24_encode, gamma24_decode, 2.4);
gamma_pair!(gamma26_encode, gamma26_decode, 2.6);

/// Pure gamma 1.8 (ProPhoto RGB family).
pub const GAMMA_1_8: TransferPair = TransferPair {
    encode: gamma18_encode,
    decode: gamma18_decode,
};
/// Pure gamma 2.2 (Adobe RGB / a98-rgb).
pub const GAMMA_2_2: TransferPair = TransferPair {
    encode: gamma22_encode,
    decode: gamma22_decode,
};
/// Pure gamma 2.4 (simplified Rec.2020).
pub const GAMMA_2_4: TransferPair = TransferPair {
    encode: gamma24_encode,
    decode: gamma24_decode,
};
/// Pure gamma 2.6 (DCI-P3).
pub const GAMMA_2_6: TransferPair = TransferPair {
    encode: gamma26_encode,
    decode: gamma26_decode,
};

fn rec2020_simplified_encode(x: f64) -> f64 {
    if x >= 0. {
        x.powf(1. / 2.4)
    } else {
        0.
    }
}
fn rec2020_simplified_decode(x: f64) -> f64 {
    x.powf(2.4)
}

/// The simplified (pure gamma-2.4) Rec.2020 transfer function. The real
/// Rec.2020 OETF has a linear toe, which this approximation drops in
/// exchange for a closed-form inverse.
pub const REC2020_SIMPLIFIED: TransferPair = TransferPair {
    encode: rec2020_simplified_encode,
    decode: rec2020_simplified_decode,
};

// --- Camera LOG encodings -------------------------------------------------

fn clog_encode(x: f64) -> f64 {
    if x >= 0. {
        0.529136 * (10.1596 * x + 1.).log10() + 0.0730597
    } else {
        0.
    }
}
fn clog_decode(x: f64) -> f64 {
    (10f64.powf((x - 0.0730597) / 0.529136) - 1.) / 10.1596
}
/// Canon C-Log.
pub const C_LOG: TransferPair = TransferPair {
    encode: clog_encode,
    decode: clog_decode,
};

// Sony S-Log3. Constants per the Sony S-Log3 technical specification.
const SLOG3_CUT: f64 = 0.01125;
const SLOG3_ENCODED_CUT: f64 = 171.2102946929;

fn slog3_encode(x: f64) -> f64 {
    if x < SLOG3_CUT {
        (x * (SLOG3_ENCODED_CUT - 95.) / 0.01125 + 95.) / 1023.
    } else {
        (420. + ((x + 0.01) / 0.19).log10() * 261.5) / 1023.
    }
}
fn slog3_decode(x: f64) -> f64 {
    let y = x * 1023.;
    if y < SLOG3_ENCODED_CUT {
        (y - 95.) * 0.01125 / (SLOG3_ENCODED_CUT - 95.)
    } else {
        10f64.powf((y - 420.) / 261.5) * 0.19 - 0.01
    }
}
/// Sony S-Log3.
pub const S_LOG3: TransferPair = TransferPair {
    encode: slog3_encode,
    decode: slog3_decode,
};

// Panasonic V-Log. Constants per the V-Log specification (`b`, `c`, `d`
// below; cut at linear x = 0.01, encoded cut at 0.181).
const VLOG_B: f64 = 0.00873;
const VLOG_C: f64 = 0.241514;
const VLOG_D: f64 = 0.598206;
const VLOG_CUT: f64 = 0.01;
const VLOG_ENCODED_CUT: f64 = 0.181;

fn vlog_encode(x: f64) -> f64 {
    if x < VLOG_CUT {
        5.6 * x + 0.125
    } else {
        VLOG_C * (x + VLOG_B).log10() + VLOG_D
    }
}
fn vlog_decode(x: f64) -> f64 {
    if x < VLOG_ENCODED_CUT {
        (x - 0.125) / 5.6
    } else {
        10f64.powf((x - VLOG_D) / VLOG_C) - VLOG_B
    }
}
/// Panasonic V-Log.
pub const V_LOG: TransferPair = TransferPair {
    encode: vlog_encode,
    decode: vlog_decode,
};

// Arri LogC (version 3, exposure index 800). Constants from the "Alexa LogC
// Curve in VFX" whitepaper.
const LOGC_CUT: f64 = 0.010591;
const LOGC_A: f64 = 5.555556;
const LOGC_B: f64 = 0.052272;
const LOGC_C: f64 = 0.247190;
const LOGC_D: f64 = 0.385537;
const LOGC_E: f64 = 5.367655;
const LOGC_F: f64 = 0.092809;
const LOGC_ENCODED_CUT: f64 = LOGC_E * LOGC_CUT + LOGC_F;

fn logc_encode(x: f64) -> f64 {
    if x > LOGC_CUT {
        LOGC_C * (LOGC_A * x + LOGC_B).log10() + LOGC_D
    } else {
        LOGC_E * x + LOGC_F
    }
}
fn logc_decode(x: f64) -> f64 {
    if x > LOGC_ENCODED_CUT {
        (10f64.powf((x - LOGC_D) / LOGC_C) - LOGC_B) / LOGC_A
    } else {
        (x - LOGC_F) / LOGC_E
    }
}
/// Arri LogC, version 3, EI 800.
pub const ARRI_LOGC: TransferPair = TransferPair {
    encode: logc_encode,
    decode: logc_decode,
};

// Red Log3G10.
const LOG3G10_A: f64 = 0.224282;
const LOG3G10_B: f64 = 155.975327;
const LOG3G10_C: f64 = 0.01;
const LOG3G10_G: f64 = 15.1927;

fn log3g10_encode(x: f64) -> f64 {
    if x >= 0. {
        LOG3G10_A * (LOG3G10_B * x + 1.).log10() + LOG3G10_C
    } else {
        0.
    }
}
fn log3g10_decode(x: f64) -> f64 {
    let v = (10f64.powf((x - LOG3G10_C) / LOG3G10_A) - 1.) / LOG3G10_B;
    v.max(-1. / LOG3G10_G)
}
/// RED Log3G10.
pub const RED_LOG3G10: TransferPair = TransferPair {
    encode: log3g10_encode,
    decode: log3g10_decode,
};

// Blackmagic Film Generation 5 (BMDFilm). Linear toe below x = 0.005,
// log2-based curve above; the encoded cut is derived from the linear cut
// so both branches agree at the boundary.
const BMDFILM_LIN_CUT: f64 = 0.005;
const BMDFILM_ENCODED_CUT: f64 = 0.133883782925;
const BMDFILM_RANGE: f64 = 0.00609;
const BMDFILM_OFFSET: f64 = 0.08850556062425718;
const BMDFILM_LIN_SLOPE: f64 = 8.283605901;

fn bmdfilm_encode(x: f64) -> f64 {
    if x < BMDFILM_LIN_CUT {
        BMDFILM_LIN_SLOPE * x + 0.09246575342
    } else {
        (x + BMDFILM_RANGE).log2() * 0.07 + BMDFILM_OFFSET + 0.5
    }
}
fn bmdfilm_decode(x: f64) -> f64 {
    if x < BMDFILM_ENCODED_CUT {
        (x - 0.09246575342) / BMDFILM_LIN_SLOPE
    } else {
        2f64.powf((x - BMDFILM_OFFSET - 0.5) / 0.07) - BMDFILM_RANGE
    }
}
/// Blackmagic Film (BMDFilm) generation 5 log encoding.
pub const BMD_FILM: TransferPair = TransferPair {
    encode: bmdfilm_encode,
    decode: bmdfilm_decode,
};
