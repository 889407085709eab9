// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide, name-keyed [`SpaceRegistry`].
//!
//! Seeded once with the built-in catalog and its documented aliases. Reads
//! (`get`/`list`) take a shared lock; writes (`register`/`unregister`) take
//! an exclusive one.
//! This is the one module in the crate that needs an OS-backed
//! synchronization primitive, so unlike the rest of `color` it requires the
//! `std` feature.

use std::collections::HashMap;
use std::string::{String, ToString};
use std::sync::{Arc, RwLock};
use std::vec::Vec;

use crate::error::Error;
use crate::space::{builtin_aliases, builtin_catalog, Space};

/// A process-wide name → [`Space`] map with case-insensitive lookup.
///
/// Construct one with [`SpaceRegistry::with_builtins`] to get the seeded
/// built-in catalog, or [`SpaceRegistry::new`] for an empty registry.
pub struct SpaceRegistry {
    spaces: RwLock<HashMap<String, Arc<dyn Space>>>,
}

impl core::fmt::Debug for SpaceRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<String> = self
            .spaces
            .read()
            .map(|g| g.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("SpaceRegistry").field("spaces", &names).finish()
    }
}

impl SpaceRegistry {
    /// An empty registry with no built-in spaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spaces: RwLock::new(HashMap::new()),
        }
    }

    /// A registry seeded with the built-in catalog and its documented
    /// aliases.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        {
            let mut spaces = registry.spaces.write().expect("registry lock poisoned");
            for (name, space) in builtin_catalog() {
                spaces.insert(name.to_string(), space);
            }
            for (alias, target) in builtin_aliases() {
                let resolved = spaces
                    .get(target)
                    .cloned()
                    .unwrap_or_else(|| panic!("builtin alias `{alias}` targets unknown space `{target}`"));
                spaces.insert(alias.to_string(), resolved);
            }
        }
        registry
    }

    /// Register `space` under `name` (lowercased). Overwrites any existing
    /// entry under that name.
    pub fn register(&self, name: &str, space: Arc<dyn Space>) {
        let mut spaces = self.spaces.write().expect("registry lock poisoned");
        spaces.insert(name.to_lowercase(), space);
    }

    /// Look up a space by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Space>> {
        let spaces = self.spaces.read().expect("registry lock poisoned");
        spaces.get(&name.to_lowercase()).cloned()
    }

    /// Look up a space by name, or [`Error::UnknownSpace`] if absent.
    pub fn get_or_err(&self, name: &str) -> Result<Arc<dyn Space>, Error> {
        self.get(name).ok_or(Error::UnknownSpace)
    }

    /// All registered names, in no particular order.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let spaces = self.spaces.read().expect("registry lock poisoned");
        spaces.keys().cloned().collect()
    }

    /// Remove a space by name (case-insensitive). Returns whether an entry
    /// was present.
    pub fn unregister(&self, name: &str) -> bool {
        let mut spaces = self.spaces.write().expect("registry lock poisoned");
        spaces.remove(&name.to_lowercase()).is_some()
    }
}

impl Default for SpaceRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_seeded_case_insensitively() {
        let registry = SpaceRegistry::with_builtins();
        assert!(registry.get("sRGB").is_some());
        assert!(registry.get("SRGB").is_some());
        assert!(registry.get("not-a-space").is_none());
    }

    #[test]
    fn aliases_resolve_to_the_same_space() {
        let registry = SpaceRegistry::with_builtins();
        assert!(registry.get("a98-rgb").is_some());
        assert!(registry.get("adobe-rgb-1998").is_some());
        assert!(registry.get("a98rgb").is_some());
    }

    #[test]
    fn register_and_unregister_round_trip() {
        let registry = SpaceRegistry::with_builtins();
        let before = registry.list().len();
        registry.register("my-srgb-copy", registry.get("srgb").unwrap());
        assert_eq!(registry.list().len(), before + 1);
        assert!(registry.unregister("my-srgb-copy"));
        assert_eq!(registry.list().len(), before);
        assert!(!registry.unregister("my-srgb-copy"));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = SpaceRegistry::with_builtins();
        assert!(matches!(registry.get_or_err("does-not-exist"), Err(Error::UnknownSpace)));
    }
}
