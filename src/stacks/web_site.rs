// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::synthesis::StackDeclared;
use crate::observability::messages::StructuredLog;
use crate::resources::cloudfront::OriginAccessIdentitySpec;
use crate::resources::s3::{BucketEncryption, BucketSpec, OriginReadPolicySpec};
use crate::resources::{RemovalPolicy, Token};
use crate::stacks::{Output, Stack, StackProps};

const WEB_SITE_BUCKET_ID: &str = "SampleAppWebSiteBucket";
const WEB_SITE_BUCKET_POLICY_ID: &str = "SampleAppWebSiteBucketPolicy";
const ORIGIN_ACCESS_IDENTITY_ID: &str = "SampleAppCfOriginAccessIdentity";
const ORIGIN_ACCESS_ID_OUTPUT: &str = "CfOriginAccessIdRef";
const DEPLOY_ASSET_PATH_KEY: &str = "DeployAssetPath";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSiteStackProps {
    pub deploy_asset_path: String,
    pub web_site_bucket_name: String,
    pub stack: StackProps,
}

/// Storage for the static site and the identity CloudFront uses to read it.
///
/// The deploy asset path is recorded as stack metadata only; uploading the
/// assets is left to the provisioning tool.
#[derive(Debug, Clone)]
pub struct WebSiteStack {
    stack: Stack,
    export_name: String,
}

impl WebSiteStack {
    pub fn new(id: impl Into<String>, props: WebSiteStackProps) -> Self {
        let mut stack = Stack::new(id, props.stack);

        let bucket = BucketSpec {
            logical_id: WEB_SITE_BUCKET_ID.to_string(),
            bucket_name: props.web_site_bucket_name,
            encryption: BucketEncryption::S3Managed,
            removal_policy: RemovalPolicy::Retain,
        };
        let identity = OriginAccessIdentitySpec {
            logical_id: ORIGIN_ACCESS_IDENTITY_ID.to_string(),
            comment: format!("Access to {}", bucket.bucket_name),
        };
        let policy = OriginReadPolicySpec {
            logical_id: WEB_SITE_BUCKET_POLICY_ID.to_string(),
            bucket: bucket.reference(),
            canonical_user_id: identity.canonical_user_id(),
        };
        stack.add(&bucket);
        stack.add(&identity);
        stack.add(&policy);
        stack.add_metadata(DEPLOY_ASSET_PATH_KEY, props.deploy_asset_path);

        let export_name = format!("{}-{}", stack.stack_name(), ORIGIN_ACCESS_ID_OUTPUT);
        stack.add_output(Output {
            name: ORIGIN_ACCESS_ID_OUTPUT.to_string(),
            value: identity.identity_id(),
            export_name: Some(export_name.clone()),
        });

        StackDeclared {
            stack_id: stack.id(),
            stack_name: stack.stack_name(),
            resource_count: stack.resources().len(),
        }
        .log();

        Self { stack, export_name }
    }

    /// Cross-stack reference to the origin access identity id.
    pub fn cf_origin_access_id_ref(&self) -> Token {
        Token::import_value(self.export_name.as_str())
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

    fn web_site_stack() -> WebSiteStack {
        WebSiteStack::new(
            "SampleAppWebSiteStack",
            WebSiteStackProps {
                deploy_asset_path: "../modules/web/site/build".to_string(),
                web_site_bucket_name: "prod-site".to_string(),
                stack: props("prod-sample-app-web-site"),
            },
        )
    }

    #[test]
    fn test_declares_bucket_identity_and_policy() {
        let site = web_site_stack();
        let stack = site.stack();

        assert_eq!(stack.resources().len(), 3);
        let bucket = stack.resource(WEB_SITE_BUCKET_ID).unwrap();
        assert_eq!(bucket.properties["BucketName"], json!("prod-site"));
        assert_eq!(bucket.deletion_policy, Some("Retain"));
        assert!(stack.resource(ORIGIN_ACCESS_IDENTITY_ID).is_some());
        assert!(stack.resource(WEB_SITE_BUCKET_POLICY_ID).is_some());
        assert_eq!(
            stack.metadata().get(DEPLOY_ASSET_PATH_KEY).map(String::as_str),
            Some("../modules/web/site/build")
        );
    }

    #[test]
    fn test_origin_access_id_is_exported() {
        let site = web_site_stack();

        assert_eq!(
            site.cf_origin_access_id_ref(),
            Token::import_value("prod-sample-app-web-site-CfOriginAccessIdRef")
        );
        assert_eq!(
            site.stack().template().unwrap()["Outputs"]["CfOriginAccessIdRef"]["Value"],
            json!({ "Ref": ORIGIN_ACCESS_IDENTITY_ID })
        );
    }
}
