//! Handles the dispatching of notifications to the alerting topic.
//!
//! The `Publisher` trait decouples the dispatch step from the concrete SNS
//! client, so the dispatch logic can be exercised without AWS credentials.
pub mod sns;

use crate::core::Notification;
use crate::errors::NotifyError;
use async_trait::async_trait;

/// What the notification service returned for an accepted publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
}

/// A client that can publish a single notification to a topic.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes `notification` to `topic_arn`.
    async fn publish(
        &self,
        topic_arn: &str,
        notification: &Notification,
    ) -> Result<PublishReceipt, NotifyError>;
}
