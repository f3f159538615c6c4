// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors found while validating the stack graph of an [`App`](crate::app::App).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A circular dependency was detected between stacks
    #[error("Cyclic dependency detected: {}", cycle.join(" -> "))]
    CyclicDependency {
        /// The cycle path, first and last entries are the same stack
        cycle: Vec<String>,
    },

    /// A stack depends on a stack that was never added to the app
    #[error("Stack '{stack_id}' depends on '{missing_dependency}' which does not exist")]
    UnresolvedDependency {
        stack_id: String,
        missing_dependency: String,
    },

    /// Two stacks share an id
    #[error("Duplicate stack ID: '{stack_id}'")]
    DuplicateStackId { stack_id: String },

    /// Two resources inside one stack share a logical id
    #[error("Duplicate logical ID '{logical_id}' in stack '{stack_id}'")]
    DuplicateLogicalId {
        stack_id: String,
        logical_id: String,
    },
}
