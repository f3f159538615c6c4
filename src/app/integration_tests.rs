// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::app::{
        compose, HOSTED_ZONE_STACK_ID, HOSTED_ZONE_STACK_NAME, WEB_SITE_STACK_ID, WEB_STACK_ID,
    };
    use crate::config::{load_config, load_zone_context, KnownZone, StackConfig, ZoneContext};
    use crate::errors::SynthesisError;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn env_config(extra: &[(&'static str, &'static str)]) -> StackConfig {
        let mut vars = vec![
            ("AUDIENCE", "prod"),
            ("AWS_ACCOUNT", "111122223333"),
            ("AWS_REGION", "eu-west-1"),
            ("BASE_DOMAIN_NAME", "example.com"),
        ];
        vars.extend_from_slice(extra);
        StackConfig::from_vars(vars).unwrap()
    }

    fn zones() -> ZoneContext {
        ZoneContext::new(vec![KnownZone {
            name: "example.com".to_string(),
            id: "/hostedzone/Z0123456789ABCDEFGHIJ".to_string(),
            private: false,
        }])
    }

    /// The checked-in sample configuration synthesizes end to end
    #[test]
    fn test_sample_config_files() {
        let config = load_config("configs/sample-app.yaml").unwrap();
        let zones = load_zone_context("configs/hosted-zones.yaml").unwrap();

        let plan = compose(&config, &zones).unwrap().synth().unwrap();

        assert_eq!(
            plan.order,
            vec![HOSTED_ZONE_STACK_ID, WEB_SITE_STACK_ID, WEB_STACK_ID]
        );
        let web = plan.artifact(WEB_STACK_ID).unwrap();
        assert_eq!(web.stack_name, "prod-sample-app-web");
        assert_eq!(web.tags["CostCenter"], "web");
        assert_eq!(
            web.template["Resources"]["SampleAppDomainCertificate"]["Properties"]["DomainName"],
            json!("www.example.com")
        );
    }

    #[test]
    fn test_stack_names_and_tags() {
        let app = compose(&env_config(&[]), &zones()).unwrap();

        let names: Vec<(&str, &str)> = app
            .stacks()
            .iter()
            .map(|s| (s.id(), s.stack_name()))
            .collect();
        assert_eq!(
            names,
            vec![
                (HOSTED_ZONE_STACK_ID, HOSTED_ZONE_STACK_NAME),
                (WEB_SITE_STACK_ID, "prod-sample-app-web-site"),
                (WEB_STACK_ID, "prod-sample-app-web"),
            ]
        );
        for stack in app.stacks() {
            assert_eq!(stack.tags()["Audience"], "prod");
            assert_eq!(stack.tags()["Application"], "sample-app");
            assert_eq!(stack.account(), "111122223333");
            assert_eq!(stack.region(), "eu-west-1");
        }
    }

    /// Web site stack precedes the web stack whatever the configuration
    #[test]
    fn test_web_site_stack_precedes_web_stack() {
        let variants: Vec<Vec<(&'static str, &'static str)>> = vec![
            vec![],
            vec![("SUB_DOMAIN_NAME", "www.")],
            vec![("SUB_DOMAIN_NAME", "")],
            vec![("WEB_SITE_BUCKET_NAME", "custom-site-bucket")],
            vec![("LOG_BUCKET_REMOVAL_POLICY", "retain")],
            vec![("AWS_REGION", "us-east-1")],
        ];

        for extra in variants {
            let plan = compose(&env_config(&extra), &zones())
                .unwrap()
                .synth()
                .unwrap();
            let site = plan.position(WEB_SITE_STACK_ID).unwrap();
            let web = plan.position(WEB_STACK_ID).unwrap();
            assert!(site < web, "{:?} -> {:?}", extra, plan.order);
            assert!(plan
                .artifact(WEB_STACK_ID)
                .unwrap()
                .dependencies
                .contains(&WEB_SITE_STACK_ID.to_string()));
        }
    }

    #[test]
    fn test_default_sub_domain_and_bucket_names() {
        let plan = compose(&env_config(&[]), &zones())
            .unwrap()
            .synth()
            .unwrap();

        let web = &plan.artifact(WEB_STACK_ID).unwrap().template["Resources"];
        assert_eq!(
            web["SampleAppWebDistribution"]["Properties"]["DistributionConfig"]["Aliases"],
            json!(["prod.example.com"])
        );
        assert_eq!(
            web["SampleAppWebDistribution"]["Properties"]["DistributionConfig"]["Origins"][0]
                ["DomainName"],
            json!("111122223333-prod-sample-app-web-site.s3.eu-west-1.amazonaws.com")
        );
        assert_eq!(
            web["SampleAppLogBucket"]["Properties"]["BucketName"],
            json!("111122223333-prod-sample-app-web-distribution-log")
        );
        assert_eq!(
            web["SampleAppWebDistributionARecord"]["Properties"]["HostedZoneId"],
            json!("Z0123456789ABCDEFGHIJ")
        );

        let site = &plan.artifact(WEB_SITE_STACK_ID).unwrap().template["Resources"];
        assert_eq!(
            site["SampleAppWebSiteBucket"]["Properties"]["BucketName"],
            json!("111122223333-prod-sample-app-web-site")
        );
    }

    /// Blank optional values in a config file fall back like unset ones
    #[test]
    fn test_blank_yaml_values_match_environment_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.yaml");
        fs::write(
            &path,
            "audience: prod\naws_account: \"111122223333\"\naws_region: eu-west-1\nbase_domain_name: example.com\nsub_domain_name: \"\"\nweb_site_bucket_name: \"\"\n",
        )
        .unwrap();

        let from_file = compose(&load_config(&path).unwrap(), &zones())
            .unwrap()
            .synth()
            .unwrap();
        let from_env = compose(&env_config(&[]), &zones())
            .unwrap()
            .synth()
            .unwrap();

        let web = &from_file.artifact(WEB_STACK_ID).unwrap().template["Resources"];
        assert_eq!(
            web["SampleAppWebDistribution"]["Properties"]["DistributionConfig"]["Aliases"],
            json!(["prod.example.com"])
        );
        for stack_id in [HOSTED_ZONE_STACK_ID, WEB_SITE_STACK_ID, WEB_STACK_ID] {
            assert_eq!(
                from_file.artifact(stack_id).unwrap().template,
                from_env.artifact(stack_id).unwrap().template
            );
        }
    }

    #[test]
    fn test_origin_access_identity_crosses_stacks() {
        let plan = compose(&env_config(&[]), &zones())
            .unwrap()
            .synth()
            .unwrap();

        let site = &plan.artifact(WEB_SITE_STACK_ID).unwrap().template;
        assert_eq!(
            site["Outputs"]["CfOriginAccessIdRef"]["Export"]["Name"],
            json!("prod-sample-app-web-site-CfOriginAccessIdRef")
        );

        let web = &plan.artifact(WEB_STACK_ID).unwrap().template;
        let origin = &web["Resources"]["SampleAppWebDistribution"]["Properties"]
            ["DistributionConfig"]["Origins"][0];
        assert_eq!(
            origin["S3OriginConfig"]["OriginAccessIdentity"],
            json!({ "Fn::Join": ["", [
                "origin-access-identity/cloudfront/",
                { "Fn::ImportValue": "prod-sample-app-web-site-CfOriginAccessIdRef" }
            ]] })
        );
    }

    #[test]
    fn test_hosted_zone_stack_is_independent() {
        let plan = compose(&env_config(&[]), &zones())
            .unwrap()
            .synth()
            .unwrap();

        assert_eq!(plan.levels[0][0], HOSTED_ZONE_STACK_ID);
        assert!(plan
            .artifact(HOSTED_ZONE_STACK_ID)
            .unwrap()
            .dependencies
            .is_empty());
        assert!(!plan
            .artifact(WEB_STACK_ID)
            .unwrap()
            .dependencies
            .contains(&HOSTED_ZONE_STACK_ID.to_string()));
    }

    #[test]
    fn test_unknown_zone_fails_composition() {
        let result = compose(&env_config(&[]), &ZoneContext::default());
        assert!(matches!(result, Err(SynthesisError::ZoneNotFound { .. })));
    }

    #[test]
    fn test_plan_round_trips_through_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let plan = compose(&env_config(&[]), &zones())
            .unwrap()
            .synth()
            .unwrap();

        let manifest_path = plan.write_to(temp_dir.path()).unwrap();

        let manifest: Value =
            serde_json::from_str(&fs::read_to_string(manifest_path).unwrap()).unwrap();
        assert_eq!(
            manifest["order"],
            json!([HOSTED_ZONE_STACK_ID, WEB_SITE_STACK_ID, WEB_STACK_ID])
        );
        for stack_id in [HOSTED_ZONE_STACK_ID, WEB_SITE_STACK_ID, WEB_STACK_ID] {
            let path = temp_dir.path().join(format!("{stack_id}.template.json"));
            let template: Value =
                serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(template, plan.artifact(stack_id).unwrap().template);
        }
    }
}
