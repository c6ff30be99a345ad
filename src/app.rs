//! The dispatch step, decoupled from the entry point.

use crate::{
    core::{DispatchTarget, Notification},
    errors::NotifyError,
    notification::{PublishReceipt, Publisher},
};
use tracing::{info, instrument};

/// Sends `notification` to the target topic with exactly one publish call.
///
/// No retry is attempted here; callers that need one own the policy.
#[instrument(skip_all, fields(topic_arn = %target.topic_arn, region = %target.region))]
pub async fn dispatch<P>(
    publisher: &P,
    target: &DispatchTarget,
    notification: &Notification,
) -> Result<PublishReceipt, NotifyError>
where
    P: Publisher + ?Sized,
{
    info!("Dispatching notification.");
    publisher.publish(&target.topic_arn, notification).await
}
