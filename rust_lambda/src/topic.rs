use lambda_runtime::tracing;

use crate::error::NotifierError;
use crate::upload::{UploadRecord, NOTIFICATION_SUBJECT};

/// SNS client bound to the topic that announces new uploads.
#[derive(Clone, Debug)]
pub struct NotificationTopic {
    inner: aws_sdk_sns::Client,
    topic_arn: String,
}

impl NotificationTopic {
    pub fn new(inner: aws_sdk_sns::Client, topic_arn: impl Into<String>) -> Self {
        Self {
            inner,
            topic_arn: topic_arn.into(),
        }
    }

    pub async fn publish_upload(&self, upload: &UploadRecord) -> Result<(), NotifierError> {
        let output = self
            .inner
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(NOTIFICATION_SUBJECT)
            .message(upload.notification_message())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error=?e,
                    topic_arn = %self.topic_arn,
                    "could not publish upload notification"
                );
                NotifierError::from(e)
            })?;

        tracing::debug!(
            message_id=?output.message_id(),
            topic_arn = %self.topic_arn,
            "published upload notification"
        );
        Ok(())
    }
}
