// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! CloudFront distributions and origin access identities.
//!
//! A [`DistributionSpec`] always has exactly one S3 origin, exactly one default
//! behavior and exactly one certificate. Viewers are always redirected to HTTPS;
//! there is no way to configure a different viewer protocol policy.

use serde_json::json;

use crate::resources::acm::CertificateRef;
use crate::resources::s3::BucketRef;
use crate::resources::{Resource, Token};
use crate::traits::Declare;

pub const DISTRIBUTION_TYPE: &str = "AWS::CloudFront::Distribution";
pub const ORIGIN_ACCESS_IDENTITY_TYPE: &str = "AWS::CloudFront::CloudFrontOriginAccessIdentity";

pub const VIEWER_PROTOCOL_POLICY: &str = "redirect-to-https";
const ORIGIN_ID: &str = "origin1";
const ORIGIN_ACCESS_IDENTITY_PREFIX: &str = "origin-access-identity/cloudfront/";

#[derive(Debug, Clone, PartialEq)]
pub struct OriginAccessIdentitySpec {
    pub logical_id: String,
    pub comment: String,
}

impl OriginAccessIdentitySpec {
    /// The identity id, as used in an S3 origin config.
    pub fn identity_id(&self) -> Token {
        Token::reference(self.logical_id.as_str())
    }

    /// Canonical user to grant bucket access to.
    pub fn canonical_user_id(&self) -> Token {
        Token::get_att(self.logical_id.as_str(), "S3CanonicalUserId")
    }
}

impl Declare for OriginAccessIdentitySpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        Resource::new(
            ORIGIN_ACCESS_IDENTITY_TYPE,
            json!({
                "CloudFrontOriginAccessIdentityConfig": { "Comment": self.comment }
            }),
        )
    }
}

/// The default behavior answers `GET`, `HEAD` and `OPTIONS` and caches all three.
const ALLOWED_METHODS: [&str; 3] = ["GET", "HEAD", "OPTIONS"];

/// The single default cache behavior.
///
/// Every cookie and every query string is forwarded to the origin, so all of
/// them are part of the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    pub compress: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct S3Origin {
    pub bucket: BucketRef,
    pub origin_access_identity_id: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasConfiguration {
    pub acm_cert_ref: CertificateRef,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub bucket: BucketRef,
    pub include_cookies: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSpec {
    pub logical_id: String,
    pub comment: String,
    pub origin: S3Origin,
    pub default_behavior: Behavior,
    pub alias: AliasConfiguration,
    pub logging: LoggingConfig,
}

impl DistributionSpec {
    pub fn viewer_protocol_policy(&self) -> &'static str {
        VIEWER_PROTOCOL_POLICY
    }

    pub fn reference(&self) -> DistributionRef {
        DistributionRef::new(self.logical_id.as_str())
    }
}

impl Declare for DistributionSpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        let behavior = &self.default_behavior;
        let origin_access_identity = Token::concat(vec![
            Token::literal(ORIGIN_ACCESS_IDENTITY_PREFIX),
            self.origin.origin_access_identity_id.clone(),
        ]);

        Resource::new(
            DISTRIBUTION_TYPE,
            json!({
                "DistributionConfig": {
                    "Aliases": self.alias.names,
                    "Comment": self.comment,
                    "DefaultCacheBehavior": {
                        "AllowedMethods": ALLOWED_METHODS,
                        "CachedMethods": ALLOWED_METHODS,
                        "Compress": behavior.compress,
                        "ForwardedValues": {
                            "Cookies": { "Forward": "all" },
                            "QueryString": true
                        },
                        "TargetOriginId": ORIGIN_ID,
                        "ViewerProtocolPolicy": self.viewer_protocol_policy()
                    },
                    "DefaultRootObject": "index.html",
                    "Enabled": true,
                    "HttpVersion": "http2",
                    "IPV6Enabled": true,
                    "Logging": {
                        "Bucket": self.logging.bucket.regional_domain_name().to_json(),
                        "IncludeCookies": self.logging.include_cookies
                    },
                    "Origins": [{
                        "DomainName": self.origin.bucket.regional_domain_name().to_json(),
                        "Id": ORIGIN_ID,
                        "S3OriginConfig": {
                            "OriginAccessIdentity": origin_access_identity.to_json()
                        }
                    }],
                    "PriceClass": "PriceClass_100",
                    "ViewerCertificate": {
                        "AcmCertificateArn": self.alias.acm_cert_ref.certificate_arn().to_json(),
                        "MinimumProtocolVersion": "TLSv1.2_2021",
                        "SslSupportMethod": "sni-only"
                    }
                }
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRef {
    logical_id: String,
}

impl DistributionRef {
    pub fn new(logical_id: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
        }
    }

    pub fn distribution_id(&self) -> Token {
        Token::reference(self.logical_id.as_str())
    }

    pub fn domain_name(&self) -> Token {
        Token::get_att(self.logical_id.as_str(), "DomainName")
    }
}
