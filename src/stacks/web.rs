// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The public delivery path for the static site: log bucket, certificate,
//! CloudFront distribution and the DNS alias record in front of it.
//!
//! Each step is a free function over a [`Stack`] so it can be exercised on
//! its own; [`WebStack::new`] runs them in order. No step validates domain
//! names, bucket names or zones beyond what the lookup itself does. Malformed
//! values are rejected by the provisioning tool, not here.

use crate::config::consts::LOG_BUCKET_SUFFIX;
use crate::errors::SynthesisError;
use crate::observability::messages::synthesis::{
    HostedZoneRederived, LogBucketDestroyOnTeardown, StackDeclared,
};
use crate::observability::messages::StructuredLog;
use crate::resources::acm::{CertificateRef, CertificateSpec};
use crate::resources::cloudfront::{
    AliasConfiguration, Behavior, DistributionRef, DistributionSpec, LoggingConfig, S3Origin,
};
use crate::resources::route53::{AliasRecordSpec, AliasTarget, HostedZoneRef};
use crate::resources::s3::{BucketEncryption, BucketRef, BucketSpec};
use crate::resources::{RemovalPolicy, Token};
use crate::stacks::{Output, Stack, StackProps};
use crate::traits::{ZoneLookup, ZoneQuery};

const LOG_BUCKET_ID: &str = "SampleAppLogBucket";
const CERTIFICATE_ID: &str = "SampleAppDomainCertificate";
const DISTRIBUTION_ID: &str = "SampleAppWebDistribution";
const ALIAS_RECORD_ID: &str = "SampleAppWebDistributionARecord";
const DISTRIBUTION_COMMENT: &str = "Sample App CF for Public site and API's";

#[derive(Debug, Clone, PartialEq)]
pub struct WebStackProps {
    pub audience: String,
    pub base_domain_name: String,
    pub origin_access_identity_id: Token,
    pub sub_domain_name: String,
    pub web_site_bucket_name: String,
    pub log_bucket_removal_policy: RemovalPolicy,
    pub stack: StackProps,
}

#[derive(Debug, Clone)]
pub struct WebStack {
    stack: Stack,
}

impl WebStack {
    pub fn new(
        id: impl Into<String>,
        props: WebStackProps,
        zones: &dyn ZoneLookup,
    ) -> Result<Self, SynthesisError> {
        let mut stack = Stack::new(id, props.stack);
        let account = stack.account().to_string();

        let domain_name = compute_domain_name(&props.sub_domain_name, &props.base_domain_name);
        let log_bucket = declare_log_bucket(
            &mut stack,
            &account,
            &props.audience,
            props.log_bucket_removal_policy,
        );
        let hosted_zone = resolve_hosted_zone(zones, &props.base_domain_name)?;
        let certificate = declare_certificate(&mut stack, &domain_name, &hosted_zone);
        let web_distribution = declare_distribution(
            &mut stack,
            &props.web_site_bucket_name,
            &props.origin_access_identity_id,
            &certificate,
            &domain_name,
            &log_bucket,
        );
        declare_alias_record(&mut stack, &domain_name, &hosted_zone, &web_distribution);

        stack.add_output(Output {
            name: "DistributionId".to_string(),
            value: web_distribution.distribution_id(),
            export_name: None,
        });
        stack.add_output(Output {
            name: "DistributionDomainName".to_string(),
            value: web_distribution.domain_name(),
            export_name: None,
        });

        StackDeclared {
            stack_id: stack.id(),
            stack_name: stack.stack_name(),
            resource_count: stack.resources().len(),
        }
        .log();

        Ok(Self { stack })
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

/// Plain concatenation. `sub_domain_name` carries its own trailing dot.
pub fn compute_domain_name(sub_domain_name: &str, base_domain_name: &str) -> String {
    format!("{sub_domain_name}{base_domain_name}")
}

pub fn log_bucket_name(account: &str, audience: &str) -> String {
    format!("{account}-{audience}-{LOG_BUCKET_SUFFIX}")
}

/// Declare the unencrypted distribution log bucket.
///
/// With [`RemovalPolicy::Destroy`] the logs are lost when the stack is torn
/// down. That is the default for this bucket, and synthesis warns about it.
pub fn declare_log_bucket(
    stack: &mut Stack,
    account: &str,
    audience: &str,
    removal_policy: RemovalPolicy,
) -> BucketRef {
    let bucket = BucketSpec {
        logical_id: LOG_BUCKET_ID.to_string(),
        bucket_name: log_bucket_name(account, audience),
        encryption: BucketEncryption::Unencrypted,
        removal_policy,
    };
    if removal_policy == RemovalPolicy::Destroy {
        LogBucketDestroyOnTeardown {
            bucket_name: &bucket.bucket_name,
        }
        .log();
    }
    stack.add(&bucket);
    bucket.reference()
}

/// Look up the existing public zone for the base domain. Nothing is declared.
pub fn resolve_hosted_zone(
    zones: &dyn ZoneLookup,
    base_domain_name: &str,
) -> Result<HostedZoneRef, SynthesisError> {
    zones.lookup(&ZoneQuery {
        domain_name: base_domain_name,
        private_zone: false,
    })
}

/// Declare a DNS-validated certificate for `domain_name`, always in `us-east-1`.
pub fn declare_certificate(
    stack: &mut Stack,
    domain_name: &str,
    zone: &HostedZoneRef,
) -> CertificateRef {
    let certificate = CertificateSpec {
        logical_id: CERTIFICATE_ID.to_string(),
        domain_name: domain_name.to_string(),
        hosted_zone: zone.clone(),
    };
    stack.add(&certificate);
    certificate.reference()
}

/// Declare the distribution in front of the website bucket.
///
/// All cookies and all query strings are forwarded, so they are all part of
/// the cache key.
pub fn declare_distribution(
    stack: &mut Stack,
    bucket_name: &str,
    origin_access_identity_id: &Token,
    certificate: &CertificateRef,
    domain_name: &str,
    log_bucket: &BucketRef,
) -> DistributionRef {
    let distribution = DistributionSpec {
        logical_id: DISTRIBUTION_ID.to_string(),
        comment: DISTRIBUTION_COMMENT.to_string(),
        origin: S3Origin {
            bucket: BucketRef::from_bucket_name(bucket_name, stack.region()),
            origin_access_identity_id: origin_access_identity_id.clone(),
        },
        default_behavior: Behavior { compress: true },
        alias: AliasConfiguration {
            acm_cert_ref: certificate.clone(),
            names: vec![domain_name.to_string()],
        },
        logging: LoggingConfig {
            bucket: log_bucket.clone(),
            include_cookies: false,
        },
    };
    stack.add(&distribution);
    distribution.reference()
}

/// Declare the `A` alias record pointing `domain_name` at the distribution.
///
/// The record's zone is rebuilt from the resolved zone id with the full domain
/// name as its zone name, rather than reusing `zone` as is. The record
/// therefore takes the full domain name. This mirrors the existing deployment
/// and is logged for review instead of being folded into the resolved zone.
pub fn declare_alias_record(
    stack: &mut Stack,
    domain_name: &str,
    zone: &HostedZoneRef,
    distribution: &DistributionRef,
) {
    let record_zone = HostedZoneRef::from_attributes(zone.id.as_str(), domain_name);
    HostedZoneRederived {
        zone_id: &record_zone.id,
        resolved_zone_name: &zone.name,
        record_zone_name: &record_zone.name,
    }
    .log();

    let record = AliasRecordSpec {
        logical_id: ALIAS_RECORD_ID.to_string(),
        zone: record_zone,
        target: AliasTarget::CloudFront(distribution.clone()),
    };
    stack.add(&record);
}
