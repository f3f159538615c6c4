// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! DNS-validated certificates.
//!
//! CloudFront only accepts certificates issued in `us-east-1`, so the
//! certificate region is fixed and is never taken from the stack's own
//! deployment region. The certificate is requested through a custom resource
//! that performs DNS validation against the given hosted zone.

use serde_json::json;

use crate::config::consts::CERTIFICATE_REGION;
use crate::resources::route53::HostedZoneRef;
use crate::resources::{Resource, Token};
use crate::traits::Declare;

pub const DNS_VALIDATED_CERTIFICATE_TYPE: &str = "Custom::DnsValidatedCertificate";

/// A certificate requested through the DNS-validating custom resource.
///
/// The declaration carries no `ServiceToken`. The provisioning tool injects
/// the token of its own certificate provider when it deploys the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateSpec {
    pub logical_id: String,
    pub domain_name: String,
    pub hosted_zone: HostedZoneRef,
}

impl CertificateSpec {
    pub fn region(&self) -> &'static str {
        CERTIFICATE_REGION
    }

    pub fn reference(&self) -> CertificateRef {
        CertificateRef {
            logical_id: self.logical_id.clone(),
        }
    }
}

impl Declare for CertificateSpec {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }

    fn declare(&self) -> Resource {
        Resource::new(
            DNS_VALIDATED_CERTIFICATE_TYPE,
            json!({
                "DomainName": self.domain_name,
                "HostedZoneId": self.hosted_zone.id,
                "Region": self.region(),
                "ValidationMethod": "DNS"
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRef {
    logical_id: String,
}

impl CertificateRef {
    pub fn certificate_arn(&self) -> Token {
        Token::get_att(self.logical_id.as_str(), "Arn")
    }
}
