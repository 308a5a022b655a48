use lambda_runtime::tracing;

use crate::error::NotifierError;
use crate::upload::UploadMetadata;

/// SQS client bound to the queue that collects upload metadata.
#[derive(Clone, Debug)]
pub struct MetadataQueue {
    inner: aws_sdk_sqs::Client,
    queue_url: String,
}

impl MetadataQueue {
    pub fn new(inner: aws_sdk_sqs::Client, queue_url: impl Into<String>) -> Self {
        Self {
            inner,
            queue_url: queue_url.into(),
        }
    }

    pub async fn send_metadata(
        &self,
        metadata: &UploadMetadata<'_>,
    ) -> Result<(), NotifierError> {
        let body = metadata.to_body()?;

        let output = self
            .inner
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error=?e,
                    queue_url = %self.queue_url,
                    "could not send upload metadata to queue"
                );
                NotifierError::from(e)
            })?;

        tracing::debug!(
            message_id=?output.message_id(),
            queue_url = %self.queue_url,
            "queued upload metadata"
        );
        Ok(())
    }
}
