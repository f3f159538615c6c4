// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resource declarations and the references that connect them.
//!
//! Each `*Spec` type is a typed description of one managed resource. Specs are
//! turned into template entries through the [`Declare`](crate::traits::Declare)
//! trait when they are added to a [`Stack`](crate::stacks::Stack).

pub mod acm;
pub mod cloudfront;
pub mod route53;
pub mod s3;
mod token;

pub use token::{collect_imports, Token};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// What the provisioning tool does with a resource when its stack is torn down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Delete the resource and its data.
    #[default]
    Destroy,
    /// Leave the resource behind, orphaned from the stack.
    Retain,
}

impl RemovalPolicy {
    /// Template value for `DeletionPolicy` and `UpdateReplacePolicy`.
    pub fn deletion_policy(&self) -> &'static str {
        match self {
            RemovalPolicy::Destroy => "Delete",
            RemovalPolicy::Retain => "Retain",
        }
    }
}

impl FromStr for RemovalPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "destroy" => Ok(RemovalPolicy::Destroy),
            "retain" => Ok(RemovalPolicy::Retain),
            _ => Err(ConfigError::InvalidRemovalPolicy {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalPolicy::Destroy => write!(f, "destroy"),
            RemovalPolicy::Retain => write!(f, "retain"),
        }
    }
}

/// One entry under `Resources` in a stack template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Properties")]
    pub properties: Value,
    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<&'static str>,
    #[serde(rename = "UpdateReplacePolicy", skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<&'static str>,
}

impl Resource {
    pub fn new(type_name: impl Into<String>, properties: Value) -> Self {
        Self {
            type_name: type_name.into(),
            properties,
            deletion_policy: None,
            update_replace_policy: None,
        }
    }

    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.deletion_policy = Some(policy.deletion_policy());
        self.update_replace_policy = Some(policy.deletion_policy());
        self
    }
}
