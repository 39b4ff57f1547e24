use async_trait::async_trait;

use crate::remediation::RemediationError;


/// Control-plane operations needed to put a trail back into a logging state.
#[async_trait]
pub trait TrailLogging: Send + Sync {
    async fn start_logging(&self, trail: &str) -> Result<(), RemediationError>;
}

#[async_trait]
impl TrailLogging for aws_sdk_cloudtrail::Client {
    async fn start_logging(&self, trail: &str) -> Result<(), RemediationError> {
        aws_sdk_cloudtrail::Client::start_logging(self)
            .name(trail)
            .send()
            .await
            .map_err(|err| RemediationError::StartLogging {
                trail: trail.to_string(),
                source: Box::new(aws_sdk_cloudtrail::Error::from(err)),
            })?;

        tracing::info!(trail, "Logging started on trail");
        Ok(())
    }
}
