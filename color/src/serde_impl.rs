// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `serde` support for [`ColorValue`], gated behind the `serde` feature and
//! `no_std`-compatible (it never touches [`crate::registry::SpaceRegistry`],
//! only the built-in catalog, so it works without `std`).
//!
//! A [`ColorValue`] carries `Arc<dyn Space>`, which isn't itself
//! serializable; instead this serializes the space's name alongside the
//! channel vector and alpha, and resolves the name back to a built-in space
//! (including aliases) on deserialization.

use alloc::sync::Arc;
use core::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color_value::ColorValue;
use crate::space::{builtin_aliases, builtin_catalog, Space};

fn resolve(name: &str) -> Option<Arc<dyn Space>> {
    let lower_name = name;
    for (candidate, space) in builtin_catalog() {
        if candidate.eq_ignore_ascii_case(lower_name) {
            return Some(space);
        }
    }
    for (alias, target) in builtin_aliases() {
        if alias.eq_ignore_ascii_case(lower_name) {
            return resolve(target);
        }
    }
    None
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ColorValue", 3)?;
        state.serialize_field("space", self.space().name())?;
        state.serialize_field("channels", &self.channels())?;
        state.serialize_field("alpha", &self.alpha())?;
        state.end()
    }
}

struct ColorValueVisitor;

impl<'de> Visitor<'de> for ColorValueVisitor {
    type Value = ColorValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a struct with `space`, `channels`, and `alpha` fields")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let space: alloc::string::String =
            seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let channels: [f64; 3] = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let alpha: f64 = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(2, &self))?;
        build(&space, channels, alpha).map_err(de::Error::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut space: Option<alloc::string::String> = None;
        let mut channels: Option<[f64; 3]> = None;
        let mut alpha: Option<f64> = None;
        while let Some(key) = map.next_key::<alloc::string::String>()? {
            match key.as_str() {
                "space" => space = Some(map.next_value()?),
                "channels" => channels = Some(map.next_value()?),
                "alpha" => alpha = Some(map.next_value()?),
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }
        let space = space.ok_or_else(|| de::Error::missing_field("space"))?;
        let channels = channels.ok_or_else(|| de::Error::missing_field("channels"))?;
        let alpha = alpha.ok_or_else(|| de::Error::missing_field("alpha"))?;
        build(&space, channels, alpha).map_err(de::Error::custom)
    }
}

fn build(space_name: &str, channels: [f64; 3], alpha: f64) -> Result<ColorValue, crate::error::Error> {
    let space = resolve(space_name).ok_or(crate::error::Error::UnknownSpace)?;
    Ok(ColorValue::new(space, channels, alpha))
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("ColorValue", &["space", "channels", "alpha"], ColorValueVisitor)
    }
}
