//! A mock publisher for testing dispatch without AWS.

use async_trait::async_trait;
use monero_sns_notify::core::Notification;
use monero_sns_notify::errors::NotifyError;
use monero_sns_notify::notification::{PublishReceipt, Publisher};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
pub struct PublishedNotification {
    pub topic_arn: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct MockPublisher {
    pub published: Arc<Mutex<Vec<PublishedNotification>>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_published(&self) -> Vec<PublishedNotification> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(
        &self,
        topic_arn: &str,
        notification: &Notification,
    ) -> Result<PublishReceipt, NotifyError> {
        let mut published = self.published.lock().unwrap();
        published.push(PublishedNotification {
            topic_arn: topic_arn.to_string(),
            subject: notification.subject().to_string(),
            message: notification.message().to_string(),
        });
        Ok(PublishReceipt {
            message_id: Some(format!("mock-{}", published.len())),
        })
    }
}
