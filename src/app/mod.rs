// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stack composition and plan synthesis.
//!
//! An [`App`] collects stacks in declaration order. [`App::synth`] validates
//! the stack graph, orders it and renders every stack into a
//! [`DeploymentPlan`].
//!
//! ```
//! use sample_app_infra::app::App;
//! use sample_app_infra::stacks::{Stack, StackEnvironment, StackProps};
//!
//! let props = |name: &str| StackProps {
//!     stack_name: name.to_string(),
//!     env: StackEnvironment {
//!         account: "111122223333".to_string(),
//!         region: "eu-west-1".to_string(),
//!     },
//!     description: None,
//! };
//!
//! let storage = Stack::new("Storage", props("storage"));
//! let mut web = Stack::new("Web", props("web"));
//! web.add_dependency(&storage);
//!
//! let mut app = App::new();
//! app.add_stack(web);
//! app.add_stack(storage);
//!
//! let plan = app.synth().unwrap();
//! assert_eq!(plan.order, vec!["Storage", "Web"]);
//! ```

mod compose;
mod dependency_graph;
mod integration_tests;
mod plan;
mod validation;

pub use compose::{
    compose, HOSTED_ZONE_STACK_ID, HOSTED_ZONE_STACK_NAME, WEB_SITE_STACK_ID, WEB_STACK_ID,
};
pub use dependency_graph::DependencyGraph;
pub use plan::{DeploymentPlan, StackArtifact, MANIFEST_FILE, MANIFEST_VERSION};
pub use validation::validate_stacks;

use std::time::Instant;

use crate::errors::SynthesisError;
use crate::observability::messages::synthesis::{PlanSynthesized, SynthesisStarted};
use crate::observability::messages::StructuredLog;
use crate::stacks::Stack;

#[derive(Debug, Clone, Default)]
pub struct App {
    stacks: Vec<Stack>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stack(&mut self, stack: Stack) {
        self.stacks.push(stack);
    }

    /// Stacks in declaration order.
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn stack(&self, stack_id: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id() == stack_id)
    }

    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph::from_stacks(&self.stacks)
    }

    /// Validate, order and render every stack.
    pub fn synth(&self) -> Result<DeploymentPlan, SynthesisError> {
        let started = SynthesisStarted {
            stack_count: self.stacks.len(),
        };
        let span = started.span("synth");
        let _guard = span.enter();
        started.log();
        let start = Instant::now();

        let graph = self.dependency_graph();
        validate_stacks(&self.stacks, &graph).map_err(SynthesisError::Validation)?;
        let levels = graph
            .topological_levels()
            .map_err(|e| SynthesisError::Validation(vec![e]))?;
        let order: Vec<String> = levels.iter().flatten().cloned().collect();

        let artifacts = order
            .iter()
            .filter_map(|id| self.stack(id))
            .map(|stack| StackArtifact::from_stack(stack, graph.dependencies_of(stack.id()).to_vec()))
            .collect::<Result<Vec<_>, _>>()?;

        PlanSynthesized {
            order: &order,
            duration: start.elapsed(),
        }
        .log();

        Ok(DeploymentPlan {
            version: MANIFEST_VERSION.to_string(),
            order,
            levels,
            artifacts,
        })
    }
}
