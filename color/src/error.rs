// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the parts of the core that can fail: space-by-name
//! lookups and color-value construction.

use core::fmt;

/// Errors surfaced by the core. Pure numeric operations never fail; these
/// two variants cover the registry lookup and the construction-time
/// precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A space name wasn't found in the [`SpaceRegistry`](crate::registry::SpaceRegistry).
    UnknownSpace,
    /// A `ColorValue` was constructed with a channel vector whose length
    /// doesn't match the target space's channel count.
    ChannelArityMismatch { expected: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSpace => write!(f, "unknown color space"),
            Error::ChannelArityMismatch { expected, found } => {
                write!(f, "expected {expected} channels, found {found}")
            }
        }
    }
}

impl core::error::Error for Error {}
