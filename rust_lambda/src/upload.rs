use aws_lambda_events::event::s3::S3EventRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::NotifierError;

pub(crate) const NOTIFICATION_SUBJECT: &str = "File Upload Notification";

/// The slice of an S3 event record that gets forwarded downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub bucket: String,
    pub key: String,
    pub event_time: DateTime<Utc>,
}

/// Queue message body describing one upload.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UploadMetadata<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
    pub timestamp: String,
}

impl UploadRecord {
    pub fn metadata(&self) -> UploadMetadata<'_> {
        UploadMetadata {
            bucket: &self.bucket,
            key: &self.key,
            timestamp: self.event_time.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn notification_message(&self) -> String {
        format!(
            "New file uploaded to S3 bucket '{}' with key '{}'",
            self.bucket, self.key
        )
    }
}

impl TryFrom<&S3EventRecord> for UploadRecord {
    type Error = NotifierError;

    fn try_from(record: &S3EventRecord) -> Result<Self, Self::Error> {
        let bucket = record
            .s3
            .bucket
            .name
            .clone()
            .ok_or(NotifierError::MissingField {
                field: "bucket name",
            })?;
        let key = record
            .s3
            .object
            .key
            .clone()
            .ok_or(NotifierError::MissingField { field: "object key" })?;

        Ok(UploadRecord {
            bucket,
            key,
            event_time: record.event_time,
        })
    }
}

impl UploadMetadata<'_> {
    pub fn to_body(&self) -> Result<String, NotifierError> {
        Ok(serde_json::to_string(self)?)
    }
}
