// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hashing and other caching utilities for color types.
//!
//! [`ColorValue`] isn't `Hash`/`Eq` for the usual reasons `f64`-backed types
//! aren't: equality on floats isn't reflexive (`NaN`), and some values have
//! multiple bit representations (`-0.0`/`0.0`). It's still useful to key a
//! cache off a color that was computed at runtime, so this module supplies
//! [`CacheKey<T>`] plus the [`BitHash`]/[`BitEq`] traits it requires,
//! generalized from the float-coordinate caching problem to `ColorValue`.

use core::hash::{Hash, Hasher};

use crate::color_value::ColorValue;

/// A key usable in a hash map that compares the bit representation of the
/// wrapped value rather than its semantic equality.
///
/// See the [module level docs](self) for more information.
#[derive(Debug, Copy, Clone)]
pub struct CacheKey<T>(pub T);

impl<T: BitEq> Eq for CacheKey<T> {}
impl<T: BitEq> PartialEq for CacheKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.bit_eq(&other.0)
    }
}
impl<T: BitHash> Hash for CacheKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.bit_hash(state);
    }
}

/// A hash implementation for types that normally wouldn't have one,
/// computed from the bitwise representation.
///
/// If a type is both `BitHash` and `BitEq`, `k1.bit_eq(k2)` must imply
/// `bit_hash(k1) == bit_hash(k2)`, matching the contract on [`Hash`].
pub trait BitHash {
    /// Feeds this value's bit representation into `state`.
    fn bit_hash<H: Hasher>(&self, state: &mut H);
}

/// An equivalence relation for types that normally wouldn't have one,
/// implemented as a bitwise comparison.
pub trait BitEq {
    /// Returns true if `self` is bit-for-bit the same value as `other`.
    fn bit_eq(&self, other: &Self) -> bool;
}

impl<T: Hash> BitHash for T {
    fn bit_hash<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl<T: PartialEq + Eq> BitEq for T {
    fn bit_eq(&self, other: &Self) -> bool {
        self.eq(other)
    }
}

impl BitHash for ColorValue {
    fn bit_hash<H: Hasher>(&self, state: &mut H) {
        self.space().name().hash(state);
        for c in self.channels() {
            c.to_bits().hash(state);
        }
        self.alpha().to_bits().hash(state);
    }
}

impl BitEq for ColorValue {
    fn bit_eq(&self, other: &Self) -> bool {
        self.space().name() == other.space().name()
            && self.channels().iter().zip(other.channels()).all(|(a, b)| a.to_bits() == b.to_bits())
            && self.alpha().to_bits() == other.alpha().to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;

    #[test]
    fn identical_colors_have_equal_cache_keys() {
        let space = Arc::new(crate::space::srgb_space());
        let a = CacheKey(ColorValue::new(space.clone(), [0.2, 0.4, 0.6], 1.0));
        let b = CacheKey(ColorValue::new(space, [0.2, 0.4, 0.6], 1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn different_channels_have_unequal_cache_keys() {
        let space = Arc::new(crate::space::srgb_space());
        let a = CacheKey(ColorValue::new(space.clone(), [0.2, 0.4, 0.6], 1.0));
        let b = CacheKey(ColorValue::new(space, [0.2, 0.4, 0.7], 1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn different_spaces_have_unequal_cache_keys() {
        let srgb = Arc::new(crate::space::srgb_space());
        let oklch: Arc<dyn crate::space::Space> = Arc::new(crate::space::Oklch);
        let a = CacheKey(ColorValue::new(srgb, [0.2, 0.4, 0.6], 1.0));
        let b = CacheKey(ColorValue::new(oklch, [0.2, 0.4, 0.6], 1.0));
        assert_ne!(a, b);
    }
}
