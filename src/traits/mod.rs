// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod declare;
pub mod zone_lookup;

pub use declare::Declare;
pub use zone_lookup::{ZoneLookup, ZoneQuery};
