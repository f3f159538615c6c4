// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};

use crate::errors::ValidationError;
use crate::stacks::Stack;

/// Deployment-order graph over stack ids.
///
/// Nodes keep the order stacks were declared in; that order breaks ties when
/// the graph is sorted, so the same app always yields the same plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: Vec<String>,
    /// stack id -> stacks it must be deployed after
    dependencies: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for a set of stacks.
    ///
    /// Edges come from explicit dependencies and from cross-stack imports: a
    /// stack importing a value exported by another stack depends on it.
    /// Imports nobody in the set exports are left to the provisioning tool.
    pub fn from_stacks(stacks: &[Stack]) -> Self {
        let mut graph = Self::new();
        for stack in stacks {
            graph.add_node(stack.id());
        }

        let exporters: HashMap<&str, &str> = stacks
            .iter()
            .flat_map(|stack| stack.exports().map(move |name| (name, stack.id())))
            .collect();

        for stack in stacks {
            for dependency in stack.dependencies() {
                graph.add_dependency(stack.id(), dependency);
            }
            for import in stack.imports() {
                if let Some(&exporter) = exporters.get(import.as_str()) {
                    if exporter != stack.id() {
                        graph.add_dependency(stack.id(), exporter);
                    }
                }
            }
        }
        graph
    }

    pub fn add_node(&mut self, stack_id: &str) {
        if !self.dependencies.contains_key(stack_id) {
            self.nodes.push(stack_id.to_string());
            self.dependencies.insert(stack_id.to_string(), Vec::new());
        }
    }

    /// Record that `stack_id` deploys after `depends_on`.
    pub fn add_dependency(&mut self, stack_id: &str, depends_on: &str) {
        self.add_node(stack_id);
        let dependencies = self.dependencies.entry(stack_id.to_string()).or_default();
        if !dependencies.iter().any(|d| d == depends_on) {
            dependencies.push(depends_on.to_string());
        }
    }

    /// Stack ids in declaration order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn contains(&self, stack_id: &str) -> bool {
        self.dependencies.contains_key(stack_id)
    }

    pub fn dependencies_of(&self, stack_id: &str) -> &[String] {
        self.dependencies
            .get(stack_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Forward adjacency: stack id -> stacks that must wait for it.
    pub fn build_dependents(&self) -> HashMap<&str, Vec<&str>> {
        let mut dependents: HashMap<&str, Vec<&str>> =
            self.nodes.iter().map(|id| (id.as_str(), Vec::new())).collect();
        for id in &self.nodes {
            for dependency in self.dependencies_of(id) {
                if let Some(waiting) = dependents.get_mut(dependency.as_str()) {
                    waiting.push(id.as_str());
                }
            }
        }
        dependents
    }

    /// Group stacks into deployment levels with Kahn's algorithm.
    ///
    /// Level 0 holds stacks with no dependencies; every stack in level N only
    /// depends on stacks in earlier levels. Within a level stacks keep
    /// declaration order. Edges to unknown stacks are ignored here, they are
    /// reported by validation.
    pub fn topological_levels(&self) -> Result<Vec<Vec<String>>, ValidationError> {
        let position: HashMap<&str, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        let dependents = self.build_dependents();

        let mut in_degree: HashMap<&str, usize> = self
            .nodes
            .iter()
            .map(|id| {
                let known = self
                    .dependencies_of(id)
                    .iter()
                    .filter(|d| self.contains(d))
                    .count();
                (id.as_str(), known)
            })
            .collect();

        let mut levels = Vec::new();
        let mut processed = HashSet::new();
        let mut current: Vec<&str> = self
            .nodes
            .iter()
            .map(String::as_str)
            .filter(|id| in_degree.get(id).copied().unwrap_or(0) == 0)
            .collect();

        while !current.is_empty() {
            let mut next = Vec::new();
            for &id in &current {
                processed.insert(id);
                for &dependent in dependents.get(id).map(Vec::as_slice).unwrap_or(&[]) {
                    if let Some(degree) = in_degree.get_mut(dependent) {
                        *degree -= 1;
                        if *degree == 0 {
                            next.push(dependent);
                        }
                    }
                }
            }
            next.sort_by_key(|id| position.get(id).copied().unwrap_or(usize::MAX));
            levels.push(current.iter().map(|id| id.to_string()).collect());
            current = next;
        }

        if processed.len() != self.nodes.len() {
            let cycle = self.find_cycle().unwrap_or_else(|| {
                let mut remaining: Vec<String> = self
                    .nodes
                    .iter()
                    .filter(|id| !processed.contains(id.as_str()))
                    .cloned()
                    .collect();
                if let Some(first) = remaining.first().cloned() {
                    remaining.push(first);
                }
                remaining
            });
            return Err(ValidationError::CyclicDependency { cycle });
        }

        Ok(levels)
    }

    /// First cycle found by DFS, as a path whose first and last entries are
    /// the same stack. Stacks are visited in declaration order.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let dependents = self.build_dependents();
        let mut visited = HashSet::new();
        let mut rec_stack = HashSet::new();
        let mut path = Vec::new();

        for node in &self.nodes {
            if !visited.contains(node.as_str()) {
                if let Some(cycle) =
                    dfs_cycle_detection(node, &dependents, &mut visited, &mut rec_stack, &mut path)
                {
                    return Some(cycle);
                }
            }
        }
        None
    }
}

/// Three-colour DFS over the forward adjacency list. A neighbour still on the
/// recursion stack closes a cycle; the path from it to the current node plus
/// the back edge is the cycle.
fn dfs_cycle_detection<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = graph.get(node) {
        for &neighbor in neighbors {
            if !visited.contains(neighbor) {
                if let Some(cycle) = dfs_cycle_detection(neighbor, graph, visited, rec_stack, path) {
                    return Some(cycle);
                }
            } else if rec_stack.contains(neighbor) {
                let cycle_start = path.iter().position(|&id| id == neighbor)?;
                let mut cycle: Vec<String> =
                    path[cycle_start..].iter().map(|id| id.to_string()).collect();
                cycle.push(neighbor.to_string());
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}
