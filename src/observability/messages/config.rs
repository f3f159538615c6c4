// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Configuration loaded.
///
/// # Log Level
/// `info!`
pub struct ConfigLoaded<'a> {
    /// `environment` or the config file path
    pub source: &'a str,
    pub audience: &'a str,
    pub account: &'a str,
    pub region: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded configuration from {}: audience={}, account={}, region={}",
            self.source, self.audience, self.account, self.region
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            audience = self.audience,
            account = self.account,
            region = self.region,
            "{}", self
        );
    }
}
