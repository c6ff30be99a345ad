//! A publisher backed by the Amazon SNS client.

use crate::core::{DispatchTarget, Notification};
use crate::errors::NotifyError;
use crate::notification::{PublishReceipt, Publisher};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::{config::Region, error::DisplayErrorContext, Client};
use tracing::{debug, error, info, instrument};

/// Publishes notifications through `aws-sdk-sns`.
pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    /// Creates a client bound to the target's region.
    ///
    /// Credentials come from the standard AWS provider chain (environment,
    /// profile, instance metadata). `endpoint_url` points the client at
    /// something other than the public SNS endpoint.
    pub async fn connect(target: &DispatchTarget, endpoint_url: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(target.region.clone()));
        if let Some(url) = endpoint_url {
            debug!(endpoint_url = url, "Using custom SNS endpoint");
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;
        Self::from_client(Client::new(&sdk_config))
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    #[instrument(skip(self, notification), fields(subject = notification.subject()))]
    async fn publish(
        &self,
        topic_arn: &str,
        notification: &Notification,
    ) -> Result<PublishReceipt, NotifyError> {
        let output = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .subject(notification.subject())
            .message(notification.message())
            .send()
            .await
            .map_err(|err| {
                let detail = DisplayErrorContext(&err).to_string();
                error!(error = %detail, "SNS publish failed");
                NotifyError::Dispatch {
                    topic_arn: topic_arn.to_string(),
                    detail,
                    source: Box::new(err),
                }
            })?;

        let message_id = output.message_id().map(str::to_string);
        info!(message_id = ?message_id, "Published notification to SNS.");
        Ok(PublishReceipt { message_id })
    }
}

#[cfg(test)]
mod sns_publisher_tests {
    use super::*;
    use aws_sdk_sns::config::{retry::RetryConfig, Credentials};
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOPIC: &str = "arn:aws:sns:us-west-2:381328847089:monero-alerts";

    const PUBLISH_RESPONSE: &str = r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <PublishResult>
    <MessageId>567910cd-659e-55d4-8ccb-5aaf14679dc0</MessageId>
  </PublishResult>
  <ResponseMetadata>
    <RequestId>d74b8436-ae13-5ab4-a9ff-ce54dfea72a0</RequestId>
  </ResponseMetadata>
</PublishResponse>"#;

    const NOT_FOUND_RESPONSE: &str = r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <Error>
    <Type>Sender</Type>
    <Code>NotFound</Code>
    <Message>Topic does not exist</Message>
  </Error>
  <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
</ErrorResponse>"#;

    fn test_publisher(endpoint: &str) -> SnsPublisher {
        let config = aws_sdk_sns::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-west-2"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .endpoint_url(endpoint)
            .retry_config(RetryConfig::disabled())
            .build();
        SnsPublisher::from_client(Client::from_conf(config))
    }

    #[tokio::test]
    async fn test_sns_publish_success() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Action=Publish"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(PUBLISH_RESPONSE, "text/xml"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let publisher = test_publisher(&server.uri());
        let notification = Notification::new("Disk low", "Node X disk at 95%");

        // Act
        let receipt = publisher.publish(TOPIC, &notification).await.unwrap();

        // Assert
        assert_eq!(
            receipt.message_id.as_deref(),
            Some("567910cd-659e-55d4-8ccb-5aaf14679dc0")
        );
        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body).to_string();
        assert!(body.contains("Subject=Disk"), "body was: {}", body);
        assert!(body.contains("Message=Node"), "body was: {}", body);
        assert!(body.contains("monero-alerts"), "body was: {}", body);
    }

    #[tokio::test]
    async fn test_sns_publish_sends_truncated_subject() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(PUBLISH_RESPONSE, "text/xml"),
            )
            .mount(&server)
            .await;

        let publisher = test_publisher(&server.uri());
        let subject = format!("{}{}", "a".repeat(100), "b".repeat(50));
        let notification = Notification::new(&subject, "body");

        publisher.publish(TOPIC, &notification).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body).to_string();
        assert!(body.contains(&"a".repeat(100)));
        assert!(!body.contains("bbbb"), "subject was not truncated: {}", body);
    }

    #[tokio::test]
    async fn test_sns_publish_handles_service_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(404).set_body_raw(NOT_FOUND_RESPONSE, "text/xml"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let publisher = test_publisher(&server.uri());
        let notification = Notification::new("Disk low", "Node X disk at 95%");

        // Act
        let result = publisher.publish(TOPIC, &notification).await;

        // Assert
        match result {
            Err(NotifyError::Dispatch {
                topic_arn, detail, ..
            }) => {
                assert_eq!(topic_arn, TOPIC);
                assert!(
                    detail.contains("Topic does not exist"),
                    "unexpected detail: {}",
                    detail
                );
            }
            other => panic!("expected a dispatch error, got {:?}", other),
        }
    }
}
