// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod synthesis;
mod validation;

pub use config::ConfigError;
pub use synthesis::SynthesisError;
pub use validation::ValidationError;
