use crate::error::NotifierError;

pub(crate) const SNS_TOPIC_ARN: &str = "SNS_TOPIC_ARN";
pub(crate) const SQS_QUEUE_URL: &str = "SQS_QUEUE_URL";

/// Destinations the handler forwards every upload to.
///
/// Both values are injected by the deployment as environment variables and
/// are required; the lambda refuses to start without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// ARN of the topic that receives the human readable notification.
    pub sns_topic_arn: String,

    /// URL of the queue that receives the JSON upload metadata.
    pub sqs_queue_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(NotifierError::MissingEnv { name })
        };

        Ok(Config {
            sns_topic_arn: required(SNS_TOPIC_ARN)?,
            sqs_queue_url: required(SQS_QUEUE_URL)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_both_destinations() {
        let config = Config::from_lookup(lookup_from(&[
            (SNS_TOPIC_ARN, "arn:aws:sns:us-east-1:123456789012:uploads"),
            (SQS_QUEUE_URL, "https://sqs.us-east-1.amazonaws.com/123456789012/uploads"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                sns_topic_arn: "arn:aws:sns:us-east-1:123456789012:uploads".to_string(),
                sqs_queue_url: "https://sqs.us-east-1.amazonaws.com/123456789012/uploads"
                    .to_string(),
            }
        );
    }

    #[test]
    fn missing_topic_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[(SQS_QUEUE_URL, "https://queue")]))
            .unwrap_err();
        assert!(matches!(
            err,
            NotifierError::MissingEnv {
                name: SNS_TOPIC_ARN
            }
        ));
        assert_eq!(err.to_string(), "SNS_TOPIC_ARN must be configured");
    }

    #[test]
    fn missing_queue_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[(SNS_TOPIC_ARN, "arn:topic")])).unwrap_err();
        assert!(matches!(
            err,
            NotifierError::MissingEnv {
                name: SQS_QUEUE_URL
            }
        ));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            (SNS_TOPIC_ARN, "arn:topic"),
            (SQS_QUEUE_URL, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            NotifierError::MissingEnv {
                name: SQS_QUEUE_URL
            }
        ));
    }
}
