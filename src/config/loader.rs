// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::*;
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use crate::resources::RemovalPolicy;
use crate::stacks::Stack;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Configuration for one synthesis run.
///
/// Built once, from the process environment or a YAML file, and passed by
/// reference to every stack constructor. Nothing mutates it after loading.
///
/// # Example
/// ```yaml
/// audience: prod
/// aws_account: "111122223333"
/// aws_region: eu-west-1
/// base_domain_name: example.com
/// sub_domain_name: "www."
/// log_bucket_removal_policy: retain
/// tags:
///   CostCenter: web
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StackConfig {
    pub audience: String,
    pub aws_account: String,
    pub aws_region: String,
    pub base_domain_name: String,
    #[serde(default)]
    pub sub_domain_name: Option<String>,
    #[serde(default)]
    pub web_site_bucket_name: Option<String>,
    #[serde(default)]
    pub deploy_asset_path: Option<String>,
    /// What happens to the distribution log bucket on teardown (defaults to destroy)
    #[serde(default)]
    pub log_bucket_removal_policy: RemovalPolicy,
    /// Extra tags attached to every stack
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Free-form properties available through [`StackConfig::property`]; keys
    /// backed by a typed field above are ignored here
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// Bucket names resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3BucketNames {
    pub web_site: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    pub s3_bucket: S3BucketNames,
}

impl StackConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from key/value pairs shaped like environment variables.
    ///
    /// Every variable is kept as a property, so `property()` sees the full set.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let properties: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let required = |names: &[&str]| -> Result<String, ConfigError> {
            names
                .iter()
                .find_map(|name| properties.get(*name).cloned())
                .ok_or_else(|| ConfigError::MissingVariable {
                    name: names[0].to_string(),
                })
        };

        let log_bucket_removal_policy = match properties.get(ENV_LOG_BUCKET_REMOVAL_POLICY) {
            Some(value) => value.parse()?,
            None => RemovalPolicy::default(),
        };

        let config = Self {
            audience: required(&[ENV_AUDIENCE])?,
            aws_account: required(&[ENV_AWS_ACCOUNT, ENV_DEFAULT_ACCOUNT])?,
            aws_region: required(&[ENV_AWS_REGION, ENV_DEFAULT_REGION])?,
            base_domain_name: required(&[ENV_BASE_DOMAIN_NAME])?,
            sub_domain_name: properties.get(ENV_SUB_DOMAIN_NAME).cloned(),
            web_site_bucket_name: properties.get(ENV_WEB_SITE_BUCKET_NAME).cloned(),
            deploy_asset_path: properties.get(ENV_DEPLOY_ASSET_PATH).cloned(),
            log_bucket_removal_policy,
            tags: BTreeMap::new(),
            properties,
        };

        ConfigLoaded {
            source: "environment",
            audience: &config.audience,
            account: &config.aws_account,
            region: &config.aws_region,
        }
        .log();

        Ok(config)
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn aws_account(&self) -> &str {
        &self.aws_account
    }

    pub fn aws_region(&self) -> &str {
        &self.aws_region
    }

    /// Look up a named property.
    ///
    /// The well-known keys always answer from the typed fields, so a stray
    /// `properties` entry cannot shadow them. Other keys come from `properties`.
    pub fn property(&self, key: &str) -> Result<&str, ConfigError> {
        let value = match key {
            ENV_AUDIENCE => Some(self.audience.as_str()),
            ENV_AWS_ACCOUNT => Some(self.aws_account.as_str()),
            ENV_AWS_REGION => Some(self.aws_region.as_str()),
            ENV_BASE_DOMAIN_NAME => Some(self.base_domain_name.as_str()),
            ENV_SUB_DOMAIN_NAME => non_empty(&self.sub_domain_name),
            ENV_WEB_SITE_BUCKET_NAME => non_empty(&self.web_site_bucket_name),
            ENV_DEPLOY_ASSET_PATH => non_empty(&self.deploy_asset_path),
            _ => self.properties.get(key).map(String::as_str),
        };
        value.ok_or_else(|| ConfigError::MissingProperty {
            key: key.to_string(),
        })
    }

    /// Subdomain prefix including its trailing dot, e.g. `www.`.
    ///
    /// Defaults to `{audience}.` so each audience gets its own host name. An
    /// empty value counts as unset, whichever source it came from.
    pub fn sub_domain_name(&self) -> String {
        non_empty(&self.sub_domain_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}.", self.audience))
    }

    pub fn deploy_asset_path(&self) -> &str {
        non_empty(&self.deploy_asset_path).unwrap_or(DEFAULT_DEPLOY_ASSET_PATH)
    }

    pub fn log_bucket_removal_policy(&self) -> RemovalPolicy {
        self.log_bucket_removal_policy
    }

    pub fn resources(&self) -> Resources {
        let web_site = non_empty(&self.web_site_bucket_name)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "{}-{}-{}",
                    self.aws_account, self.audience, WEB_SITE_BUCKET_SUFFIX
                )
            });
        Resources {
            s3_bucket: S3BucketNames { web_site },
        }
    }

    /// Attach the standard tags plus any configured extra tags.
    pub fn add_tags(&self, stack: &mut Stack) {
        stack.add_tag(TAG_AUDIENCE, self.audience.as_str());
        stack.add_tag(TAG_APPLICATION, APPLICATION_NAME);
        for (key, value) in &self.tags {
            stack.add_tag(key.as_str(), value.as_str());
        }
    }
}

/// Optional values set to `""` are treated as unset.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<StackConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: StackConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    ConfigLoaded {
        source: &path.display().to_string(),
        audience: &cfg.audience,
        account: &cfg.aws_account,
        region: &cfg.aws_region,
    }
    .log();

    Ok(cfg)
}
