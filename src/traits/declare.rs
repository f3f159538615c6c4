// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::resources::Resource;

/// A resource specification that can be rendered into a stack template.
pub trait Declare {
    /// Logical id of the resource inside its stack. Must be unique per stack.
    fn logical_id(&self) -> &str;

    fn declare(&self) -> Resource;
}
