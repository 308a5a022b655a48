use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::tracing::{self, info_span, Instrument};
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;

use crate::error::NotifierError;
use crate::queue::MetadataQueue;
use crate::topic::NotificationTopic;
use crate::upload::UploadRecord;

const PROCESSING_COMPLETE_BODY: &str = "\"Processing complete\"";

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    fn processing_complete() -> Self {
        Self {
            status_code: 200,
            body: PROCESSING_COMPLETE_BODY.to_string(),
        }
    }
}

/// Every record is projected before the first send, so an `Err` here means no
/// queue message or notification has gone out for this batch.
fn collect_uploads(event: &S3Event) -> Result<Vec<UploadRecord>, NotifierError> {
    event.records.iter().map(UploadRecord::try_from).collect()
}

async fn forward_upload(
    queue: &MetadataQueue,
    topic: &NotificationTopic,
    upload: &UploadRecord,
) -> Result<(), NotifierError> {
    queue.send_metadata(&upload.metadata()).await?;
    topic.publish_upload(upload).await?;
    tracing::info!("forwarded upload");
    Ok(())
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    queue: &MetadataQueue,
    topic: &NotificationTopic,
) -> Result<HandlerResponse, Error> {
    let payload = event.payload;
    tracing::info!(
        request_id = %event.context.request_id,
        record_count = payload.records.len(),
        "processing s3 records"
    );
    tracing::debug!(event = ?payload, "received s3 event");

    if payload.records.is_empty() {
        tracing::warn!("No records found in S3 event");
        return Ok(HandlerResponse::processing_complete());
    }

    let uploads = collect_uploads(&payload)?;
    for upload in &uploads {
        forward_upload(queue, topic, upload)
            .instrument(info_span!(
                "forward_upload",
                bucket = %upload.bucket,
                key = %upload.key
            ))
            .await?;
    }

    tracing::info!(forwarded = uploads.len(), "processing complete");
    Ok(HandlerResponse::processing_complete())
}
