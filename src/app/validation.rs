// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural checks run before a plan is ordered.
//!
//! Checks run in a fixed order and accumulate errors:
//!
//! 1. stack ids are unique
//! 2. logical ids are unique inside each stack
//! 3. every explicit dependency names a stack in the app
//! 4. the graph is acyclic
//!
//! Cycle detection only runs once the first three pass, since it needs a
//! structurally valid graph. It reports the first cycle found as a path whose
//! first and last entries are the same stack.

use std::collections::HashSet;

use crate::app::DependencyGraph;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    CyclicDependencyDetected, DuplicateLogicalId, DuplicateStackId, UnresolvedDependency,
};
use crate::observability::messages::StructuredLog;
use crate::stacks::Stack;

pub fn validate_stacks(stacks: &[Stack], graph: &DependencyGraph) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(duplicate_errors) = validate_unique_stack_ids(stacks) {
        errors.extend(duplicate_errors);
    }

    if let Err(logical_id_errors) = validate_unique_logical_ids(stacks) {
        errors.extend(logical_id_errors);
    }

    if let Err(unresolved_errors) = validate_dependency_references(stacks) {
        errors.extend(unresolved_errors);
    }

    if errors.is_empty() {
        if let Err(cycle_errors) = validate_acyclic_graph(graph) {
            errors.extend(cycle_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_stack_ids(stacks: &[Stack]) -> Result<(), Vec<ValidationError>> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for stack in stacks {
        if !seen_ids.insert(stack.id()) {
            DuplicateStackId { stack_id: stack.id() }.log();
            errors.push(ValidationError::DuplicateStackId {
                stack_id: stack.id().to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_logical_ids(stacks: &[Stack]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for stack in stacks {
        let mut seen_ids = HashSet::new();
        for (logical_id, _) in stack.resources() {
            if !seen_ids.insert(logical_id.as_str()) {
                DuplicateLogicalId {
                    stack_id: stack.id(),
                    logical_id,
                }
                .log();
                errors.push(ValidationError::DuplicateLogicalId {
                    stack_id: stack.id().to_string(),
                    logical_id: logical_id.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_dependency_references(stacks: &[Stack]) -> Result<(), Vec<ValidationError>> {
    let stack_ids: HashSet<&str> = stacks.iter().map(Stack::id).collect();
    let mut errors = Vec::new();

    for stack in stacks {
        for dependency in stack.dependencies() {
            if !stack_ids.contains(dependency.as_str()) {
                UnresolvedDependency {
                    stack_id: stack.id(),
                    missing_dependency: dependency,
                }
                .log();
                errors.push(ValidationError::UnresolvedDependency {
                    stack_id: stack.id().to_string(),
                    missing_dependency: dependency.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_acyclic_graph(graph: &DependencyGraph) -> Result<(), Vec<ValidationError>> {
    match graph.find_cycle() {
        Some(cycle) => {
            CyclicDependencyDetected { cycle: &cycle }.log();
            Err(vec![ValidationError::CyclicDependency { cycle }])
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::route53::HostedZoneSpec;
    use crate::stacks::test_support::props;

    fn stack(id: &str, depends_on: &[&str]) -> Stack {
        let mut stack = Stack::new(id, props(id));
        for dependency in depends_on {
            stack.add_dependency_id(*dependency);
        }
        stack
    }

    fn validate(stacks: &[Stack]) -> Result<(), Vec<ValidationError>> {
        validate_stacks(stacks, &DependencyGraph::from_stacks(stacks))
    }

    #[test]
    fn test_valid_empty_app() {
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn test_valid_chain() {
        let stacks = vec![stack("a", &[]), stack("b", &["a"]), stack("c", &["b"])];
        assert!(validate(&stacks).is_ok());
    }

    #[test]
    fn test_duplicate_stack_id() {
        let stacks = vec![stack("a", &[]), stack("a", &[])];
        assert_eq!(
            validate(&stacks).unwrap_err(),
            vec![ValidationError::DuplicateStackId {
                stack_id: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_duplicate_logical_id() {
        let zone = HostedZoneSpec {
            logical_id: "Zone".to_string(),
            zone_name: "example.com".to_string(),
            comment: None,
        };
        let mut first = stack("a", &[]);
        first.add(&zone);
        first.add(&zone);
        let mut second = stack("b", &[]);
        second.add(&zone);

        assert_eq!(
            validate(&[first, second]).unwrap_err(),
            vec![ValidationError::DuplicateLogicalId {
                stack_id: "a".to_string(),
                logical_id: "Zone".to_string()
            }]
        );
    }

    #[test]
    fn test_unresolved_dependency() {
        let stacks = vec![stack("a", &["missing"])];
        assert_eq!(
            validate(&stacks).unwrap_err(),
            vec![ValidationError::UnresolvedDependency {
                stack_id: "a".to_string(),
                missing_dependency: "missing".to_string()
            }]
        );
    }

    #[test]
    fn test_errors_accumulate_and_skip_cycle_check() {
        let stacks = vec![
            stack("a", &["b"]),
            stack("b", &["a"]),
            stack("b", &[]),
            stack("c", &["missing"]),
        ];
        let errors = validate(&stacks).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| !matches!(e, ValidationError::CyclicDependency { .. })));
    }

    #[test]
    fn test_simple_cycle() {
        let stacks = vec![stack("a", &["b"]), stack("b", &["a"])];
        let errors = validate(&stacks).unwrap_err();

        assert_eq!(errors.len(), 1);
        match &errors[0] {
            ValidationError::CyclicDependency { cycle } => {
                assert_eq!(cycle.len(), 3);
                assert_eq!(cycle.first(), cycle.last());
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let stacks = vec![stack("a", &["a"])];
        assert_eq!(
            validate(&stacks).unwrap_err(),
            vec![ValidationError::CyclicDependency {
                cycle: vec!["a".to_string(), "a".to_string()]
            }]
        );
    }

    #[test]
    fn test_longer_cycle_path() {
        let stacks = vec![
            stack("a", &["c"]),
            stack("b", &["a"]),
            stack("c", &["b"]),
            stack("d", &[]),
        ];
        match &validate(&stacks).unwrap_err()[0] {
            ValidationError::CyclicDependency { cycle } => {
                assert_eq!(cycle, &vec!["a", "b", "c", "a"]);
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }
}
