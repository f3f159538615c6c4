// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! S3 bucket declarations and references.

use serde_json::{json, Value};

use crate::resources::{RemovalPolicy, Resource, Token};
use crate::traits::Declare;

pub const BUCKET_TYPE: &str = "AWS::S3::Bucket";
pub const BUCKET_POLICY_TYPE: &str = "AWS::S3::BucketPolicy";

/// Server-side encryption applied to a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketEncryption {
    Unencrypted,
    /// SSE-S3 (AES256) with keys managed by the storage service.
    S3Managed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketSpec {
    pub logical_id: String,
    pub bucket_name: String,
    pub encryption: BucketEncryption,
    pub removal_policy: RemovalPolicy,
}

impl BucketSpec {
    /// Reference to the bucket once declared in a stack.
    pub fn reference(&self) -> BucketRef {
        BucketRef::Declared {
            logical_id: self.logical_id.clone(),
            bucket_name: self.bucket_name.clone(),
        }
    }
}

impl Declare for BucketSpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        let mut properties = json!({ "BucketName": self.bucket_name });
        if let BucketEncryption::S3Managed = self.encryption {
            properties["BucketEncryption"] = json!({
                "ServerSideEncryptionConfiguration": [
                    { "ServerSideEncryptionByDefault": { "SSEAlgorithm": "AES256" } }
                ]
            });
        }
        Resource::new(BUCKET_TYPE, properties).with_removal_policy(self.removal_policy)
    }
}

/// A bucket as seen by other declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum BucketRef {
    /// Declared in the same stack.
    Declared {
        logical_id: String,
        bucket_name: String,
    },
    /// Existing bucket referenced by name only; nothing is declared for it.
    Imported { bucket_name: String, region: String },
}

impl BucketRef {
    pub fn from_bucket_name(bucket_name: impl Into<String>, region: impl Into<String>) -> Self {
        BucketRef::Imported {
            bucket_name: bucket_name.into(),
            region: region.into(),
        }
    }

    pub fn bucket_name(&self) -> &str {
        match self {
            BucketRef::Declared { bucket_name, .. } | BucketRef::Imported { bucket_name, .. } => {
                bucket_name
            }
        }
    }

    pub fn regional_domain_name(&self) -> Token {
        match self {
            BucketRef::Declared { logical_id, .. } => {
                Token::get_att(logical_id.as_str(), "RegionalDomainName")
            }
            BucketRef::Imported {
                bucket_name,
                region,
            } => Token::literal(format!("{bucket_name}.s3.{region}.amazonaws.com")),
        }
    }
}

/// Grants a CloudFront origin access identity read access to every object in a bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginReadPolicySpec {
    pub logical_id: String,
    pub bucket: BucketRef,
    /// `S3CanonicalUserId` of the origin access identity.
    pub canonical_user_id: Token,
}

impl Declare for OriginReadPolicySpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        let bucket: Value = match &self.bucket {
            BucketRef::Declared { logical_id, .. } => Token::reference(logical_id.as_str()).to_json(),
            BucketRef::Imported { bucket_name, .. } => json!(bucket_name),
        };
        let objects = format!("arn:aws:s3:::{}/*", self.bucket.bucket_name());
        Resource::new(
            BUCKET_POLICY_TYPE,
            json!({
                "Bucket": bucket,
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": "s3:GetObject",
                        "Effect": "Allow",
                        "Principal": { "CanonicalUser": self.canonical_user_id.to_json() },
                        "Resource": objects
                    }]
                }
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_bucket(encryption: BucketEncryption, removal_policy: RemovalPolicy) -> BucketSpec {
        BucketSpec {
            logical_id: "LogBucket".to_string(),
            bucket_name: "logs".to_string(),
            encryption,
            removal_policy,
        }
    }

    #[test]
    fn test_unencrypted_bucket_has_no_encryption_block() {
        let resource = log_bucket(BucketEncryption::Unencrypted, RemovalPolicy::Destroy).declare();

        assert_eq!(resource.type_name, BUCKET_TYPE);
        assert_eq!(resource.properties, json!({ "BucketName": "logs" }));
        assert_eq!(resource.deletion_policy, Some("Delete"));
    }

    #[test]
    fn test_managed_encryption_and_retain() {
        let resource = log_bucket(BucketEncryption::S3Managed, RemovalPolicy::Retain).declare();

        assert_eq!(
            resource.properties["BucketEncryption"]["ServerSideEncryptionConfiguration"][0]
                ["ServerSideEncryptionByDefault"]["SSEAlgorithm"],
            json!("AES256")
        );
        assert_eq!(resource.deletion_policy, Some("Retain"));
        assert_eq!(resource.update_replace_policy, Some("Retain"));
    }

    #[test]
    fn test_bucket_ref_domain_names() {
        let declared = log_bucket(BucketEncryption::Unencrypted, RemovalPolicy::Destroy).reference();
        assert_eq!(
            declared.regional_domain_name(),
            Token::get_att("LogBucket", "RegionalDomainName")
        );

        let imported = BucketRef::from_bucket_name("site", "eu-west-1");
        assert_eq!(imported.bucket_name(), "site");
        assert_eq!(
            imported.regional_domain_name(),
            Token::literal("site.s3.eu-west-1.amazonaws.com")
        );
    }

    #[test]
    fn test_origin_read_policy() {
        let policy = OriginReadPolicySpec {
            logical_id: "SitePolicy".to_string(),
            bucket: BucketSpec {
                logical_id: "Site".to_string(),
                bucket_name: "site".to_string(),
                encryption: BucketEncryption::S3Managed,
                removal_policy: RemovalPolicy::Retain,
            }
            .reference(),
            canonical_user_id: Token::get_att("Oai", "S3CanonicalUserId"),
        };

        let resource = policy.declare();
        assert_eq!(resource.properties["Bucket"], json!({ "Ref": "Site" }));
        let statement = &resource.properties["PolicyDocument"]["Statement"][0];
        assert_eq!(statement["Resource"], json!("arn:aws:s3:::site/*"));
        assert_eq!(
            statement["Principal"]["CanonicalUser"],
            json!({ "Fn::GetAtt": ["Oai", "S3CanonicalUserId"] })
        );
    }
}
