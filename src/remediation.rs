use serde::de::Error as _;
use serde_json::Value;

use crate::models::{CloudTrailNotification, EventName, EventSource, StopLoggingParameters};
use crate::trail::TrailLogging;


#[derive(Debug, thiserror::Error)]
pub enum RemediationError {
    #[error("malformed event: {0}")]
    MalformedEvent(#[from] serde_json::Error),
    #[error("failed to start logging on trail {trail}")]
    StartLogging {
        trail: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// What the handler did with an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Remediation {
    Ignored,
    TrailRestarted { trail: String },
}


/// Restarts logging on the trail named by a CloudTrail `StopLogging` event.
///
/// Any other event is accepted and left alone. `requestParameters` is only looked at
/// once the event is known to be a StopLogging call, so unrelated events never fail on it.
///
/// # Arguments
/// * `trails` - control plane used to restart the trail
/// * `event` - raw EventBridge payload
/// # Returns
/// * `Ok(Remediation::TrailRestarted)` if logging was started again, `Ok(Remediation::Ignored)` otherwise.
/// * `Err(RemediationError::MalformedEvent)` if a field needed for the decision is missing or has the wrong type.
/// * `Err(RemediationError::StartLogging)` if the control plane rejected the call.
pub async fn remediate<T>(trails: &T, event: Value) -> Result<Remediation, RemediationError>
where
    T: TrailLogging + ?Sized,
{
    let notification: CloudTrailNotification = serde_json::from_value(event)?;
    let detail = notification.detail;

    match (&detail.event_source, &detail.event_name) {
        (EventSource::CloudTrail, event_name) => {
            tracing::info!("Identified CloudTrail event {}", event_name.as_str());

            if *event_name != EventName::StopLogging {
                return Ok(Remediation::Ignored);
            }

            let parameters = detail.request_parameters
                .ok_or_else(|| serde_json::Error::missing_field("requestParameters"))?;
            let StopLoggingParameters { name } = serde_json::from_value(parameters)?;

            tracing::info!(trail = %name, "Remediating CloudTrail StopLogging event by starting trail");
            trails.start_logging(&name).await?;

            Ok(Remediation::TrailRestarted { trail: name })
        }
        (EventSource::Other(_), event_name) => {
            tracing::debug!("Ignoring event {} from {}", event_name.as_str(), detail.event_source.as_str());
            Ok(Remediation::Ignored)
        }
    }
}
