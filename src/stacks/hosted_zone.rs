// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::synthesis::StackDeclared;
use crate::observability::messages::StructuredLog;
use crate::resources::route53::HostedZoneSpec;
use crate::resources::Token;
use crate::stacks::{Output, Stack, StackProps};

const HOSTED_ZONE_ID: &str = "SampleAppHostedZone";
const HOSTED_ZONE_ID_OUTPUT: &str = "HostedZoneId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZoneStackProps {
    pub base_domain_name: String,
    pub stack: StackProps,
}

/// Declares the public hosted zone for the base domain and exports its id.
#[derive(Debug, Clone)]
pub struct HostedZoneStack {
    stack: Stack,
}

impl HostedZoneStack {
    pub fn new(id: impl Into<String>, props: HostedZoneStackProps) -> Self {
        let mut stack = Stack::new(id, props.stack);
        let zone = HostedZoneSpec {
            logical_id: HOSTED_ZONE_ID.to_string(),
            zone_name: props.base_domain_name.clone(),
            comment: Some(format!("Public zone for {}", props.base_domain_name)),
        };
        stack.add(&zone);

        let export_name = format!("{}-{}", stack.stack_name(), HOSTED_ZONE_ID_OUTPUT);
        stack.add_output(Output {
            name: HOSTED_ZONE_ID_OUTPUT.to_string(),
            value: Token::reference(HOSTED_ZONE_ID),
            export_name: Some(export_name),
        });

        StackDeclared {
            stack_id: stack.id(),
            stack_name: stack.stack_name(),
            resource_count: stack.resources().len(),
        }
        .log();

        Self { stack }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn into_stack(self) -> Stack {
        self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stacks::test_support::props;
    use serde_json::json;

    #[test]
    fn test_hosted_zone_stack() {
        let stack = HostedZoneStack::new(
            "SampleAppHostedZoneStack",
            HostedZoneStackProps {
                base_domain_name: "example.com".to_string(),
                stack: props("sample-app-hosted-zone"),
            },
        );

        let template = stack.stack().template().unwrap();
        assert_eq!(
            template["Resources"]["SampleAppHostedZone"]["Properties"]["Name"],
            json!("example.com.")
        );
        assert_eq!(
            template["Outputs"]["HostedZoneId"],
            json!({
                "Value": { "Ref": "SampleAppHostedZone" },
                "Export": { "Name": "sample-app-hosted-zone-HostedZoneId" }
            })
        );
        assert_eq!(
            stack.stack().exports().collect::<Vec<_>>(),
            vec!["sample-app-hosted-zone-HostedZoneId"]
        );
    }
}
