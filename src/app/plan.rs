// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SynthesisError;
use crate::observability::messages::synthesis::PlanWritten;
use crate::observability::messages::StructuredLog;
use crate::stacks::{Stack, StackEnvironment};

pub const MANIFEST_VERSION: &str = "1";
pub const MANIFEST_FILE: &str = "manifest.json";

/// One synthesized stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackArtifact {
    pub id: String,
    pub stack_name: String,
    pub environment: StackEnvironment,
    pub tags: BTreeMap<String, String>,
    /// Every stack this one deploys after, explicit or implied by imports.
    pub dependencies: Vec<String>,
    pub template_file: String,
    #[serde(skip)]
    pub template: Value,
}

impl StackArtifact {
    pub fn from_stack(stack: &Stack, dependencies: Vec<String>) -> Result<Self, SynthesisError> {
        Ok(Self {
            id: stack.id().to_string(),
            stack_name: stack.stack_name().to_string(),
            environment: stack.environment().clone(),
            tags: stack.tags().clone(),
            dependencies,
            template_file: format!("{}.template.json", stack.id()),
            template: stack.template()?,
        })
    }
}

/// The synthesized output handed to the provisioning tool.
///
/// Artifacts are in deployment order. `levels` groups them into sets that have
/// no dependencies on each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentPlan {
    pub version: String,
    pub order: Vec<String>,
    pub levels: Vec<Vec<String>>,
    pub artifacts: Vec<StackArtifact>,
}

impl DeploymentPlan {
    pub fn artifact(&self, stack_id: &str) -> Option<&StackArtifact> {
        self.artifacts.iter().find(|a| a.id == stack_id)
    }

    /// Position of a stack in deployment order.
    pub fn position(&self, stack_id: &str) -> Option<usize> {
        self.order.iter().position(|id| id == stack_id)
    }

    /// Write `manifest.json` and one template file per stack into `dir`,
    /// creating it if needed. Returns the manifest path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, SynthesisError> {
        fs::create_dir_all(dir).map_err(|source| SynthesisError::WriteIo {
            path: dir.to_path_buf(),
            source,
        })?;

        for artifact in &self.artifacts {
            let path = dir.join(&artifact.template_file);
            write_json(&path, &artifact.template)?;
        }

        let manifest = dir.join(MANIFEST_FILE);
        write_json(&manifest, self)?;

        PlanWritten {
            path: dir,
            stack_count: self.artifacts.len(),
        }
        .log();

        Ok(manifest)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SynthesisError> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    fs::write(path, contents).map_err(|source| SynthesisError::WriteIo {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stacks::test_support::props;
    use serde_json::json;
    use tempfile::TempDir;

    fn plan() -> DeploymentPlan {
        let mut first = Stack::new("First", props("first"));
        first.add_tag("Audience", "prod");
        let second = Stack::new("Second", props("second"));

        DeploymentPlan {
            version: MANIFEST_VERSION.to_string(),
            order: vec!["First".to_string(), "Second".to_string()],
            levels: vec![vec!["First".to_string()], vec!["Second".to_string()]],
            artifacts: vec![
                StackArtifact::from_stack(&first, vec![]).unwrap(),
                StackArtifact::from_stack(&second, vec!["First".to_string()]).unwrap(),
            ],
        }
    }

    #[test]
    fn test_lookup_helpers() {
        let plan = plan();
        assert_eq!(plan.position("Second"), Some(1));
        assert_eq!(plan.position("Third"), None);
        assert_eq!(plan.artifact("First").unwrap().stack_name, "first");
    }

    #[test]
    fn test_write_to_creates_manifest_and_templates() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("cdk.out");

        let manifest_path = plan().write_to(&out).unwrap();

        assert_eq!(manifest_path, out.join("manifest.json"));
        let manifest: Value =
            serde_json::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();
        assert_eq!(manifest["order"], json!(["First", "Second"]));
        assert_eq!(
            manifest["artifacts"][1],
            json!({
                "id": "Second",
                "stackName": "second",
                "environment": { "account": "111122223333", "region": "eu-west-1" },
                "tags": {},
                "dependencies": ["First"],
                "templateFile": "Second.template.json"
            })
        );
        assert_eq!(manifest["artifacts"][0]["tags"], json!({ "Audience": "prod" }));

        let template: Value = serde_json::from_str(
            &fs::read_to_string(out.join("First.template.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(template, json!({ "Resources": {} }));
    }

    #[test]
    fn test_write_to_reports_unwritable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let err = plan().write_to(&blocker).unwrap_err();
        assert!(matches!(err, SynthesisError::WriteIo { .. }));
    }
}
