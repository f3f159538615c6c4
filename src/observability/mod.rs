// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for configuration loading, stack synthesis and validation.
//!
//! Every log line is produced by a message struct that implements `Display` for
//! the human-readable text and [`StructuredLog`](messages::StructuredLog) to emit
//! the same event with typed fields. Nothing else in the crate formats log text.
//!
//! # Usage
//!
//! ```rust
//! use sample_app_infra::observability::messages::synthesis::StackDeclared;
//! use sample_app_infra::observability::messages::StructuredLog;
//!
//! StackDeclared {
//!     stack_id: "SampleAppWebStack",
//!     stack_name: "prod-sample-app-web",
//!     resource_count: 4,
//! }
//! .log();
//! ```

pub mod messages;
