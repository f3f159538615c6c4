// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::app::App;
use crate::config::consts::ENV_BASE_DOMAIN_NAME;
use crate::config::StackConfig;
use crate::errors::SynthesisError;
use crate::stacks::{
    HostedZoneStack, HostedZoneStackProps, StackEnvironment, StackProps, WebSiteStack,
    WebSiteStackProps, WebStack, WebStackProps,
};
use crate::traits::ZoneLookup;

pub const HOSTED_ZONE_STACK_ID: &str = "SampleAppHostedZoneStack";
pub const HOSTED_ZONE_STACK_NAME: &str = "sample-app-hosted-zone";
pub const WEB_SITE_STACK_ID: &str = "SampleAppWebSiteStack";
pub const WEB_STACK_ID: &str = "SampleAppWebStack";

/// Build the sample app from configuration.
///
/// Stacks are declared hosted zone, website storage, then web distribution,
/// each tagged from `config`. The web stack depends explicitly on the website
/// stack. It resolves the public zone through `zones` and does not depend on
/// the hosted zone stack.
pub fn compose(config: &StackConfig, zones: &dyn ZoneLookup) -> Result<App, SynthesisError> {
    let env = StackEnvironment {
        account: config.aws_account().to_string(),
        region: config.aws_region().to_string(),
    };
    let stack_props = |stack_name: String| StackProps {
        stack_name,
        env: env.clone(),
        description: None,
    };
    let base_domain_name = config.property(ENV_BASE_DOMAIN_NAME)?.to_string();
    let web_site_bucket_name = config.resources().s3_bucket.web_site;

    let mut hosted_zone_stack = HostedZoneStack::new(
        HOSTED_ZONE_STACK_ID,
        HostedZoneStackProps {
            base_domain_name: base_domain_name.clone(),
            stack: stack_props(HOSTED_ZONE_STACK_NAME.to_string()),
        },
    );
    config.add_tags(hosted_zone_stack.stack_mut());

    let mut web_site_stack = WebSiteStack::new(
        WEB_SITE_STACK_ID,
        WebSiteStackProps {
            deploy_asset_path: config.deploy_asset_path().to_string(),
            web_site_bucket_name: web_site_bucket_name.clone(),
            stack: stack_props(format!("{}-sample-app-web-site", config.audience())),
        },
    );
    config.add_tags(web_site_stack.stack_mut());

    let mut web_stack = WebStack::new(
        WEB_STACK_ID,
        WebStackProps {
            audience: config.audience().to_string(),
            base_domain_name,
            origin_access_identity_id: web_site_stack.cf_origin_access_id_ref(),
            sub_domain_name: config.sub_domain_name(),
            web_site_bucket_name,
            log_bucket_removal_policy: config.log_bucket_removal_policy(),
            stack: stack_props(format!("{}-sample-app-web", config.audience())),
        },
        zones,
    )?;
    web_stack.stack_mut().add_dependency(web_site_stack.stack());
    config.add_tags(web_stack.stack_mut());

    let mut app = App::new();
    app.add_stack(hosted_zone_stack.into_stack());
    app.add_stack(web_site_stack.into_stack());
    app.add_stack(web_stack.into_stack());
    Ok(app)
}
