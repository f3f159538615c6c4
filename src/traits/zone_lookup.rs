// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SynthesisError;
use crate::resources::route53::HostedZoneRef;

/// Query for an existing hosted zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneQuery<'a> {
    pub domain_name: &'a str,
    pub private_zone: bool,
}

/// Resolves existing hosted zones at synthesis time.
///
/// Lookups never declare anything. An implementation must fail with
/// [`SynthesisError::ZoneNotFound`] when no zone matches rather than invent one.
pub trait ZoneLookup {
    fn lookup(&self, query: &ZoneQuery<'_>) -> Result<HostedZoneRef, SynthesisError>;
}
