use aws_sdk_sns::operation::publish::PublishError;
use aws_sdk_sqs::operation::send_message::SendMessageError;

/// Everything that can fail while forwarding an upload notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("{name} must be configured")]
    MissingEnv { name: &'static str },

    #[error("S3 event record has no {field}")]
    MissingField { field: &'static str },

    #[error("failed to encode upload metadata: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to send upload metadata to queue: {0}")]
    SendMessage(#[from] aws_sdk_sqs::error::SdkError<SendMessageError>),

    #[error("failed to publish upload notification: {0}")]
    Publish(#[from] aws_sdk_sns::error::SdkError<PublishError>),
}
