use aws_config::BehaviorVersion;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sqs::Client as SqsClient;
use lambda_runtime::{run, service_fn, tracing, Error};
mod config;
mod error;
mod event_handler;
mod queue;
mod topic;
mod upload;
use config::Config;
use event_handler::function_handler;
use queue::MetadataQueue;
use topic::NotificationTopic;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt()
        .json()
        .with_env_filter(
            tracing::subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing::subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let queue = MetadataQueue::new(SqsClient::new(&shared_config), config.sqs_queue_url);
    let topic = NotificationTopic::new(SnsClient::new(&shared_config), config.sns_topic_arn);
    tracing::info!("initialized sqs and sns clients");

    run(service_fn(|event| function_handler(event, &queue, &topic))).await
}
