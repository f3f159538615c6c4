// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Application name used in stack names, resource names and tags
pub const APPLICATION_NAME: &str = "sample-app";

/// CloudFront only accepts certificates from this region
pub const CERTIFICATE_REGION: &str = "us-east-1";

/// Suffix of the distribution log bucket name, after `{account}-{audience}-`
pub const LOG_BUCKET_SUFFIX: &str = "sample-app-web-distribution-log";

/// Suffix of the default website bucket name, after `{account}-{audience}-`
pub const WEB_SITE_BUCKET_SUFFIX: &str = "sample-app-web-site";

/// Build output of the web front end, relative to the infrastructure directory
pub const DEFAULT_DEPLOY_ASSET_PATH: &str = "../modules/web/site/build";

// Environment variables
pub const ENV_AUDIENCE: &str = "AUDIENCE";
pub const ENV_AWS_ACCOUNT: &str = "AWS_ACCOUNT";
pub const ENV_AWS_REGION: &str = "AWS_REGION";
pub const ENV_DEFAULT_ACCOUNT: &str = "CDK_DEFAULT_ACCOUNT";
pub const ENV_DEFAULT_REGION: &str = "CDK_DEFAULT_REGION";
pub const ENV_BASE_DOMAIN_NAME: &str = "BASE_DOMAIN_NAME";
pub const ENV_SUB_DOMAIN_NAME: &str = "SUB_DOMAIN_NAME";
pub const ENV_WEB_SITE_BUCKET_NAME: &str = "WEB_SITE_BUCKET_NAME";
pub const ENV_DEPLOY_ASSET_PATH: &str = "DEPLOY_ASSET_PATH";
pub const ENV_LOG_BUCKET_REMOVAL_POLICY: &str = "LOG_BUCKET_REMOVAL_POLICY";

// Tag keys
pub const TAG_AUDIENCE: &str = "Audience";
pub const TAG_APPLICATION: &str = "Application";
