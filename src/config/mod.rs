// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod zones;

pub mod consts;

pub use loader::{load_config, Resources, S3BucketNames, StackConfig};
pub use zones::{load_zone_context, KnownZone, ZoneContext};
