// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `config` - configuration loading
//! * `synthesis` - stack declaration and plan synthesis
//! * `validation` - stack graph validation failures

pub mod config;
pub mod synthesis;
pub mod validation;

use tracing::Span;

/// A log event with a fixed level and typed fields.
pub trait StructuredLog {
    /// Emit the event at its level.
    fn log(&self);

    /// Open a span carrying the same fields.
    fn span(&self, name: &str) -> Span {
        tracing::info_span!("event", span_name = name)
    }
}
