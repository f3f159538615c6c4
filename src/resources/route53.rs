// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Route 53 hosted zones and alias records.

use serde::Serialize;
use serde_json::json;

use crate::resources::cloudfront::DistributionRef;
use crate::resources::{Resource, Token};
use crate::traits::Declare;

pub const HOSTED_ZONE_TYPE: &str = "AWS::Route53::HostedZone";
pub const RECORD_SET_TYPE: &str = "AWS::Route53::RecordSet";

/// Hosted zone id used by every CloudFront alias target.
pub const CLOUDFRONT_HOSTED_ZONE_ID: &str = "Z2FDTNDATAQYW2";

/// A resolved hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostedZoneRef {
    pub id: String,
    /// Zone name without the trailing dot.
    pub name: String,
}

impl HostedZoneRef {
    /// Build a zone reference from known attributes without any lookup.
    pub fn from_attributes(hosted_zone_id: impl Into<String>, zone_name: impl Into<String>) -> Self {
        Self {
            id: hosted_zone_id.into(),
            name: zone_name.into(),
        }
    }
}

/// Declares a public hosted zone.
#[derive(Debug, Clone, PartialEq)]
pub struct HostedZoneSpec {
    pub logical_id: String,
    pub zone_name: String,
    pub comment: Option<String>,
}

impl Declare for HostedZoneSpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        let mut properties = json!({ "Name": fully_qualified(&self.zone_name) });
        if let Some(comment) = &self.comment {
            properties["HostedZoneConfig"] = json!({ "Comment": comment });
        }
        Resource::new(HOSTED_ZONE_TYPE, properties)
    }
}

/// Where an alias record points.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasTarget {
    CloudFront(DistributionRef),
}

impl AliasTarget {
    fn dns_name(&self) -> Token {
        match self {
            AliasTarget::CloudFront(distribution) => distribution.domain_name(),
        }
    }

    fn hosted_zone_id(&self) -> &'static str {
        match self {
            AliasTarget::CloudFront(_) => CLOUDFRONT_HOSTED_ZONE_ID,
        }
    }
}

/// An `A` alias record.
///
/// The record takes the zone's name, so the zone passed in decides which name
/// the record answers for.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasRecordSpec {
    pub logical_id: String,
    pub zone: HostedZoneRef,
    pub target: AliasTarget,
}

impl AliasRecordSpec {
    pub fn fully_qualified_name(&self) -> String {
        fully_qualified(&self.zone.name)
    }
}

impl Declare for AliasRecordSpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        Resource::new(
            RECORD_SET_TYPE,
            json!({
                "Name": self.fully_qualified_name(),
                "Type": "A",
                "HostedZoneId": self.zone.id,
                "AliasTarget": {
                    "DNSName": self.target.dns_name().to_json(),
                    "HostedZoneId": self.target.hosted_zone_id()
                }
            }),
        )
    }
}

/// Append the root label dot if missing.
pub fn fully_qualified(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
