// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stacks: named units of resources deployed together.
//!
//! [`Stack`] is the generic container. [`HostedZoneStack`], [`WebSiteStack`]
//! and [`WebStack`] each build one from configuration and expose the typed
//! references other stacks need.

mod hosted_zone;
mod web;
mod web_site;

pub use hosted_zone::{HostedZoneStack, HostedZoneStackProps};
pub use web::{
    compute_domain_name, declare_alias_record, declare_certificate, declare_distribution,
    declare_log_bucket, log_bucket_name, resolve_hosted_zone, WebStack, WebStackProps,
};
pub use web_site::{WebSiteStack, WebSiteStackProps};

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::SynthesisError;
use crate::resources::{collect_imports, Resource, Token};
use crate::traits::Declare;

/// Account and region a stack deploys into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackEnvironment {
    pub account: String,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackProps {
    pub stack_name: String,
    pub env: StackEnvironment,
    pub description: Option<String>,
}

/// A value published by a stack, optionally exported for other stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub name: String,
    pub value: Token,
    pub export_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Stack {
    id: String,
    props: StackProps,
    resources: Vec<(String, Resource)>,
    outputs: Vec<Output>,
    tags: BTreeMap<String, String>,
    metadata: BTreeMap<String, String>,
    dependencies: Vec<String>,
}

impl Stack {
    pub fn new(id: impl Into<String>, props: StackProps) -> Self {
        Self {
            id: id.into(),
            props,
            resources: Vec::new(),
            outputs: Vec::new(),
            tags: BTreeMap::new(),
            metadata: BTreeMap::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stack_name(&self) -> &str {
        &self.props.stack_name
    }

    pub fn environment(&self) -> &StackEnvironment {
        &self.props.env
    }

    pub fn account(&self) -> &str {
        &self.props.env.account
    }

    pub fn region(&self) -> &str {
        &self.props.env.region
    }

    /// Render a declaration and add it under its logical id.
    ///
    /// Logical ids are not checked here; duplicates are reported when the app
    /// is synthesized.
    pub fn add<D: Declare>(&mut self, declaration: &D) {
        self.resources
            .push((declaration.logical_id().to_string(), declaration.declare()));
    }

    pub fn resources(&self) -> &[(String, Resource)] {
        &self.resources
    }

    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|(id, _)| id == logical_id)
            .map(|(_, resource)| resource)
    }

    pub fn add_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Export names this stack publishes.
    pub fn exports(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().filter_map(|o| o.export_name.as_deref())
    }

    /// Export names this stack consumes from other stacks.
    pub fn imports(&self) -> BTreeSet<String> {
        let mut imports = BTreeSet::new();
        for (_, resource) in &self.resources {
            collect_imports(&resource.properties, &mut imports);
        }
        for output in &self.outputs {
            collect_imports(&output.value.to_json(), &mut imports);
        }
        imports
    }

    pub fn add_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Record that this stack must be deployed after `other`.
    pub fn add_dependency(&mut self, other: &Stack) {
        self.add_dependency_id(other.id());
    }

    pub fn add_dependency_id(&mut self, stack_id: impl Into<String>) {
        let stack_id = stack_id.into();
        if !self.dependencies.contains(&stack_id) {
            self.dependencies.push(stack_id);
        }
    }

    /// Explicit dependencies, in the order they were added.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// The stack template.
    pub fn template(&self) -> Result<Value, SynthesisError> {
        let mut template = Map::new();
        if let Some(description) = &self.props.description {
            template.insert("Description".into(), Value::String(description.clone()));
        }
        if !self.metadata.is_empty() {
            let metadata = self
                .metadata
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            template.insert("Metadata".into(), Value::Object(metadata));
        }

        let mut resources = Map::new();
        for (logical_id, resource) in &self.resources {
            resources.insert(logical_id.clone(), serde_json::to_value(resource)?);
        }
        template.insert("Resources".into(), Value::Object(resources));

        if !self.outputs.is_empty() {
            let mut outputs = Map::new();
            for output in &self.outputs {
                let mut entry = Map::new();
                entry.insert("Value".into(), output.value.to_json());
                if let Some(export_name) = &output.export_name {
                    let mut export = Map::new();
                    export.insert("Name".into(), Value::String(export_name.clone()));
                    entry.insert("Export".into(), Value::Object(export));
                }
                outputs.insert(output.name.clone(), Value::Object(entry));
            }
            template.insert("Outputs".into(), Value::Object(outputs));
        }

        Ok(Value::Object(template))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn props(stack_name: &str) -> StackProps {
        StackProps {
            stack_name: stack_name.to_string(),
            env: StackEnvironment {
                account: "111122223333".to_string(),
                region: "eu-west-1".to_string(),
            },
            description: None,
        }
    }
}
