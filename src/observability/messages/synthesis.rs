// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for stack declaration and plan synthesis.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;
use tracing::Span;

/// Hosted zone resolved by lookup.
///
/// # Log Level
/// `info!`
pub struct HostedZoneResolved<'a> {
    pub domain_name: &'a str,
    pub zone_id: &'a str,
}

impl Display for HostedZoneResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved hosted zone for '{}': {}",
            self.domain_name, self.zone_id
        )
    }
}

impl StructuredLog for HostedZoneResolved<'_> {
    fn log(&self) {
        tracing::info!(
            domain_name = self.domain_name,
            zone_id = self.zone_id,
            "{}", self
        );
    }
}

/// The alias record's zone was rebuilt from the resolved zone id and the full
/// domain name instead of reusing the resolved zone.
///
/// # Log Level
/// `info!` - kept visible so the behavior gets reviewed
pub struct HostedZoneRederived<'a> {
    pub zone_id: &'a str,
    pub resolved_zone_name: &'a str,
    pub record_zone_name: &'a str,
}

impl Display for HostedZoneRederived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Alias record uses zone {} re-derived as '{}' (resolved as '{}'); review whether the record should live under the resolved zone name",
            self.zone_id, self.record_zone_name, self.resolved_zone_name
        )
    }
}

impl StructuredLog for HostedZoneRederived<'_> {
    fn log(&self) {
        tracing::info!(
            zone_id = self.zone_id,
            resolved_zone_name = self.resolved_zone_name,
            record_zone_name = self.record_zone_name,
            "{}", self
        );
    }
}

/// Log bucket will be deleted together with its stack.
///
/// # Log Level
/// `warn!` - data loss on teardown
pub struct LogBucketDestroyOnTeardown<'a> {
    pub bucket_name: &'a str,
}

impl Display for LogBucketDestroyOnTeardown<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Log bucket '{}' is destroyed when its stack is torn down; set LOG_BUCKET_REMOVAL_POLICY=retain to keep the logs",
            self.bucket_name
        )
    }
}

impl StructuredLog for LogBucketDestroyOnTeardown<'_> {
    fn log(&self) {
        tracing::warn!(bucket_name = self.bucket_name, "{}", self);
    }
}

/// Stack fully declared.
///
/// # Log Level
/// `info!`
pub struct StackDeclared<'a> {
    pub stack_id: &'a str,
    pub stack_name: &'a str,
    pub resource_count: usize,
}

impl Display for StackDeclared<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Declared stack {} ({}) with {} resources",
            self.stack_id, self.stack_name, self.resource_count
        )
    }
}

impl StructuredLog for StackDeclared<'_> {
    fn log(&self) {
        tracing::info!(
            stack_id = self.stack_id,
            stack_name = self.stack_name,
            resource_count = self.resource_count,
            "{}", self
        );
    }
}

/// Synthesis started.
///
/// # Log Level
/// `debug!`
pub struct SynthesisStarted {
    pub stack_count: usize,
}

impl Display for SynthesisStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Synthesizing deployment plan for {} stacks", self.stack_count)
    }
}

impl StructuredLog for SynthesisStarted {
    fn log(&self) {
        tracing::debug!(stack_count = self.stack_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("synthesis", span_name = name, stack_count = self.stack_count)
    }
}

/// Deployment plan synthesized.
///
/// # Log Level
/// `info!`
pub struct PlanSynthesized<'a> {
    pub order: &'a [String],
    pub duration: Duration,
}

impl Display for PlanSynthesized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Synthesized deployment plan with {} stacks in {:?}: {}",
            self.order.len(),
            self.duration,
            self.order.join(" -> ")
        )
    }
}

impl StructuredLog for PlanSynthesized<'_> {
    fn log(&self) {
        tracing::info!(
            stack_count = self.order.len(),
            order = self.order.join(","),
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// Deployment plan written to disk.
///
/// # Log Level
/// `info!`
pub struct PlanWritten<'a> {
    pub path: &'a Path,
    pub stack_count: usize,
}

impl Display for PlanWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrote deployment plan with {} stack templates to {}",
            self.stack_count,
            self.path.display()
        )
    }
}

impl StructuredLog for PlanWritten<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            stack_count = self.stack_count,
            "{}", self
        );
    }
}
