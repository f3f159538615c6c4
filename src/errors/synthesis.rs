// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for stack composition and plan synthesis.
//!
//! Every variant is fatal to the synthesis run. Nothing here is retried; the fix
//! is always a change to configuration or to the zone context.

use crate::errors::{ConfigError, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No known hosted zone matches the requested domain.
    #[error("No hosted zone found for domain '{domain_name}' (private zone: {private_zone})")]
    ZoneNotFound {
        domain_name: String,
        private_zone: bool,
    },

    /// More than one known hosted zone matches the requested domain.
    #[error("Found {count} hosted zones for domain '{domain_name}', expected exactly 1")]
    AmbiguousZone { domain_name: String, count: usize },

    /// The zone context file could not be read.
    #[error("Failed to read zone context '{}': {source}", path.display())]
    ZoneContextIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The zone context file is not valid YAML.
    #[error("Failed to parse zone context '{}': {source}", path.display())]
    ZoneContextParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The stack graph failed validation.
    #[error("Stack graph validation failed:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Writing the plan to the output directory failed.
    #[error("Failed to write deployment plan to '{}': {source}", path.display())]
    WriteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A plan artifact could not be serialized.
    #[error("Failed to serialize deployment plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
