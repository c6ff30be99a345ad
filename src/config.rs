//! Configuration management for the notifier
//!
//! This module defines the `Config` struct holding every setting the
//! notifier needs. It uses the `figment` crate to layer compiled-in defaults,
//! an optional TOML file, `MONERO_SNS_*` environment variables, and finally
//! the command-line flags.

use crate::cli::Cli;
use crate::core::DEFAULT_TOPIC_ARN;
use crate::errors::NotifyError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map, Value},
    Figment, Metadata, Profile, Provider,
};
use serde::{Deserialize, Serialize};

/// Prefix shared by every environment variable the notifier reads.
pub const ENV_PREFIX: &str = "MONERO_SNS_";

/// Settings for one notifier run: where to publish and how loudly to log.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// The SNS topic ARN. Set through `MONERO_SNS_ARN`.
    pub arn: String,
    /// Explicit region, overriding the one embedded in the ARN.
    pub region: Option<String>,
    /// Alternative SNS endpoint, e.g. a LocalStack instance.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Loads the application configuration.
    ///
    /// Later sources win: defaults, the `--config` file, environment, flags.
    pub fn load(cli: &Cli) -> Result<Self, NotifyError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = &cli.config {
            if !path.exists() {
                return Err(figment::Error::from(format!(
                    "configuration file {} not found",
                    path.display()
                ))
                .into());
            }
            figment = figment.merge(Toml::file(path));
        }

        let config: Config = figment
            // e.g. MONERO_SNS_ARN, MONERO_SNS_REGION
            .merge(RawEnv(Env::prefixed(ENV_PREFIX)))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }

    /// The topic to publish to. An empty ARN counts as unset.
    pub fn topic_arn(&self) -> &str {
        if self.arn.is_empty() {
            DEFAULT_TOPIC_ARN
        } else {
            &self.arn
        }
    }
}

/// `MONERO_SNS_*` variables with their values kept as plain strings.
///
/// figment's `Env` parses values, so `MONERO_SNS_ARN=12345` would arrive as an
/// integer and `[a,b]` as an array. A topic identifier is opaque text.
struct RawEnv(Env);

impl Provider for RawEnv {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("`{}` environment variable(s)", ENV_PREFIX))
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let dict: Dict = self
            .0
            .iter()
            .map(|(key, value)| (key.as_str().to_ascii_lowercase(), Value::from(value)))
            .collect();
        Ok(Profile::Default.collect(dict))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            arn: DEFAULT_TOPIC_ARN.to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}
