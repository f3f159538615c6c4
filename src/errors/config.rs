// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building a [`StackConfig`](crate::config::StackConfig).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration from the environment or a file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set (or was empty).
    #[error("Required environment variable '{name}' is not set")]
    MissingVariable { name: String },

    /// A property was requested that neither the environment nor the file supplied.
    #[error("Configuration property '{key}' is not defined")]
    MissingProperty { key: String },

    /// The removal policy string did not name a known policy.
    #[error("Invalid removal policy '{value}': expected 'destroy' or 'retain'")]
    InvalidRemovalPolicy { value: String },

    /// The config file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file was read but is not valid YAML for a `StackConfig`.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
