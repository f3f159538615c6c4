// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for stack graph validation failures.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Cyclic dependency detected between stacks.
///
/// # Log Level
/// `error!`
pub struct CyclicDependencyDetected<'a> {
    pub cycle: &'a [String],
}

impl Display for CyclicDependencyDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic dependency detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicDependencyDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }
}

/// A stack depends on a stack that is not part of the app.
///
/// # Log Level
/// `error!`
pub struct UnresolvedDependency<'a> {
    pub stack_id: &'a str,
    pub missing_dependency: &'a str,
}

impl Display for UnresolvedDependency<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stack '{}' depends on missing stack '{}'",
            self.stack_id, self.missing_dependency
        )
    }
}

impl StructuredLog for UnresolvedDependency<'_> {
    fn log(&self) {
        tracing::error!(
            stack_id = self.stack_id,
            missing_dependency = self.missing_dependency,
            "{}", self
        );
    }
}

/// Duplicate stack id.
///
/// # Log Level
/// `error!`
pub struct DuplicateStackId<'a> {
    pub stack_id: &'a str,
}

impl Display for DuplicateStackId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate stack ID: '{}'", self.stack_id)
    }
}

impl StructuredLog for DuplicateStackId<'_> {
    fn log(&self) {
        tracing::error!(stack_id = self.stack_id, "{}", self);
    }
}

/// Duplicate logical resource id inside a stack.
///
/// # Log Level
/// `error!`
pub struct DuplicateLogicalId<'a> {
    pub stack_id: &'a str,
    pub logical_id: &'a str,
}

impl Display for DuplicateLogicalId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Duplicate logical ID '{}' in stack '{}'",
            self.logical_id, self.stack_id
        )
    }
}

impl StructuredLog for DuplicateLogicalId<'_> {
    fn log(&self) {
        tracing::error!(
            stack_id = self.stack_id,
            logical_id = self.logical_id,
            "{}", self
        );
    }
}
