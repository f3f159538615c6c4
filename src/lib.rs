// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod app;        // composition + synthesis
pub mod config;     // stack config + zone context
pub mod errors;     // error handling
pub mod observability;
pub mod resources;  // resource declarations + tokens
pub mod stacks;     // hosted zone, web site and web stacks
pub mod traits;     // declaration + lookup seams
