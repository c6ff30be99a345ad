//! Error types for the notifier.

use thiserror::Error;

/// Everything that can stop a notification from reaching its topic.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Fewer than two positional arguments were supplied.
    #[error("Usage: {program} <subject> <message>")]
    Usage { program: String },

    /// The topic ARN is colon-delimited but carries no usable region field.
    #[error("topic ARN `{0}` has no region field")]
    InvalidTopicArn(String),

    /// The configuration file or environment could not be parsed.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The SNS client rejected or failed the publish call.
    #[error("failed to publish to {topic_arn}: {detail}")]
    Dispatch {
        topic_arn: String,
        detail: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for NotifyError {
    fn from(err: figment::Error) -> Self {
        NotifyError::Config(Box::new(err))
    }
}
