// Copyright 2024 the Color Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::Space;

/// CIE XYZ (D65): the hub itself. `to_xyz`/`from_xyz` are the identity.
#[derive(Clone, Copy, Debug)]
pub struct Xyz;

impl Space for Xyz {
    fn name(&self) -> &'static str {
        "xyz"
    }

    fn channel_labels(&self) -> [&'static str; 3] {
        ["x", "y", "z"]
    }

    fn to_xyz(&self, channels: [f64; 3]) -> [f64; 3] {
        channels
    }

    fn from_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        xyz
    }
}
