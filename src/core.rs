//! Core domain types: the notification itself and where it is sent.

use crate::config::Config;
use crate::errors::NotifyError;
use tracing::debug;

/// Topic used when `MONERO_SNS_ARN` is unset or empty.
pub const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:us-west-2:381328847089:monero-alerts";

/// Region used for identifiers that are not colon-delimited.
pub const FALLBACK_REGION: &str = "us-west-2";

/// SNS rejects subjects longer than this many characters.
pub const MAX_SUBJECT_CHARS: usize = 100;

/// Returns the first [`MAX_SUBJECT_CHARS`] characters of `subject`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_subject(subject: &str) -> &str {
    match subject.char_indices().nth(MAX_SUBJECT_CHARS) {
        Some((byte_idx, _)) => &subject[..byte_idx],
        None => subject,
    }
}

/// Extracts the region from a topic ARN.
///
/// `arn:aws:sns:us-west-2:381328847089:monero-alerts` yields `us-west-2`. An
/// identifier without any colon yields [`FALLBACK_REGION`].
pub fn region_from_topic_arn(topic_arn: &str) -> Result<String, NotifyError> {
    if !topic_arn.contains(':') {
        return Ok(FALLBACK_REGION.to_string());
    }
    match topic_arn.split(':').nth(3) {
        Some(region) if !region.is_empty() => Ok(region.to_string()),
        _ => Err(NotifyError::InvalidTopicArn(topic_arn.to_string())),
    }
}

/// A single alert, ready to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    subject: String,
    message: String,
}

impl Notification {
    /// Builds a notification, truncating the subject to the SNS limit.
    pub fn new(subject: &str, message: impl Into<String>) -> Self {
        let truncated = truncate_subject(subject);
        if truncated.len() < subject.len() {
            debug!(
                original_chars = subject.chars().count(),
                "Subject truncated to {} characters",
                MAX_SUBJECT_CHARS
            );
        }
        Self {
            subject: truncated.to_string(),
            message: message.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The resolved topic and the region whose endpoint serves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    pub topic_arn: String,
    pub region: String,
}

impl DispatchTarget {
    /// Resolves the target from loaded configuration.
    ///
    /// An explicit region override wins; otherwise the region comes from the ARN.
    pub fn resolve(config: &Config) -> Result<Self, NotifyError> {
        let topic_arn = config.topic_arn().to_string();
        let region = match config.region.as_deref().filter(|r| !r.is_empty()) {
            Some(region) => region.to_string(),
            None => region_from_topic_arn(&topic_arn)?,
        };
        Ok(Self { topic_arn, region })
    }
}
