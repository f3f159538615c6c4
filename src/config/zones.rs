// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Known hosted zones, used to resolve zone lookups at synthesis time.
//!
//! The context is a YAML list of zones that already exist in the account:
//!
//! ```yaml
//! zones:
//!   - name: example.com
//!     id: /hostedzone/Z0123456789ABCDEFGHIJ
//!   - name: internal.example.com
//!     id: Z9876543210ZYXWVUTSRQ
//!     private: true
//! ```

use crate::errors::SynthesisError;
use crate::observability::messages::synthesis::HostedZoneResolved;
use crate::observability::messages::StructuredLog;
use crate::resources::route53::HostedZoneRef;
use crate::traits::{ZoneLookup, ZoneQuery};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const HOSTED_ZONE_ID_PREFIX: &str = "/hostedzone/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnownZone {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub private: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ZoneContext {
    #[serde(default)]
    pub zones: Vec<KnownZone>,
}

impl ZoneContext {
    pub fn new(zones: Vec<KnownZone>) -> Self {
        Self { zones }
    }
}

impl ZoneLookup for ZoneContext {
    fn lookup(&self, query: &ZoneQuery<'_>) -> Result<HostedZoneRef, SynthesisError> {
        let wanted = normalize_zone_name(query.domain_name);
        let matches: Vec<&KnownZone> = self
            .zones
            .iter()
            .filter(|zone| zone.private == query.private_zone)
            .filter(|zone| normalize_zone_name(&zone.name).eq_ignore_ascii_case(wanted))
            .collect();

        match matches.as_slice() {
            [zone] => {
                let zone_ref = HostedZoneRef {
                    id: zone
                        .id
                        .strip_prefix(HOSTED_ZONE_ID_PREFIX)
                        .unwrap_or(&zone.id)
                        .to_string(),
                    name: normalize_zone_name(&zone.name).to_string(),
                };
                HostedZoneResolved {
                    domain_name: query.domain_name,
                    zone_id: &zone_ref.id,
                }
                .log();
                Ok(zone_ref)
            }
            [] => Err(SynthesisError::ZoneNotFound {
                domain_name: query.domain_name.to_string(),
                private_zone: query.private_zone,
            }),
            many => Err(SynthesisError::AmbiguousZone {
                domain_name: query.domain_name.to_string(),
                count: many.len(),
            }),
        }
    }
}

/// Zone names compare without the trailing root dot and ignoring ASCII case.
fn normalize_zone_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Load known zones from a YAML file
pub fn load_zone_context<P: AsRef<Path>>(path: P) -> Result<ZoneContext, SynthesisError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SynthesisError::ZoneContextIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| SynthesisError::ZoneContextParse {
        path: path.to_path_buf(),
        source,
    })
}
