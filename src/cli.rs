//! The `send-sns` argument surface.
//!
//! The first two positionals carry the alert itself. Everything from the
//! first positional on is literal text, so a message such as `--region` is
//! published as-is. Flags therefore go before the subject, and a leading `--`
//! lets the subject itself start with a hyphen. The flags are merged over the
//! `MONERO_SNS_*` environment and the TOML file when the configuration is
//! loaded.

use crate::core::Notification;
use crate::errors::NotifyError;
use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Name printed in the usage line.
pub const PROGRAM_NAME: &str = "send-sns";

/// Publish a monero-node-stack alert to an Amazon SNS topic.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = PROGRAM_NAME, author, version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Topic ARN, overriding MONERO_SNS_ARN.
    #[arg(long, value_name = "ARN")]
    pub topic_arn: Option<String>,

    /// Region to publish in, instead of the one embedded in the ARN.
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Subject (first 100 characters are sent), then message. Extra values are ignored.
    #[arg(
        value_name = "SUBJECT MESSAGE",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Builds the notification from the positionals.
    ///
    /// Fails with [`NotifyError::Usage`] unless both subject and message were given.
    pub fn notification(&self) -> Result<Notification, NotifyError> {
        match self.args.as_slice() {
            [subject, message, ..] => Ok(Notification::new(subject, message.clone())),
            _ => Err(NotifyError::Usage {
                program: PROGRAM_NAME.to_string(),
            }),
        }
    }
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(arn) = &self.topic_arn {
            dict.insert("arn".into(), Value::from(arn.clone()));
        }

        if let Some(region) = &self.region {
            dict.insert("region".into(), Value::from(region.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
