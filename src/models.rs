use serde::Deserialize;
use serde_json::Value;

pub const CLOUDTRAIL_EVENT_SOURCE: &str = "cloudtrail.amazonaws.com";
pub const STOP_LOGGING_EVENT_NAME: &str = "StopLogging";


/// EventBridge envelope around a CloudTrail API call record. Only `detail` is read,
/// the rest of the envelope (id, account, region, ...) is ignored.
#[derive(Debug, Deserialize)]
pub struct CloudTrailNotification {
    pub detail: EventDetail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub event_source: EventSource,
    pub event_name: EventName,
    // shape depends on the API call, so it is only decoded once we know which call it was
    pub request_parameters: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventSource {
    CloudTrail,
    Other(String),
}

impl From<String> for EventSource {
    fn from(source: String) -> Self {
        match source.as_str() {
            CLOUDTRAIL_EVENT_SOURCE => EventSource::CloudTrail,
            _ => EventSource::Other(source),
        }
    }
}

impl EventSource {
    pub fn as_str(&self) -> &str {
        match self {
            EventSource::CloudTrail => CLOUDTRAIL_EVENT_SOURCE,
            EventSource::Other(source) => source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EventName {
    StopLogging,
    Other(String),
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        match name.as_str() {
            STOP_LOGGING_EVENT_NAME => EventName::StopLogging,
            _ => EventName::Other(name),
        }
    }
}

impl EventName {
    pub fn as_str(&self) -> &str {
        match self {
            EventName::StopLogging => STOP_LOGGING_EVENT_NAME,
            EventName::Other(name) => name,
        }
    }
}

/// `requestParameters` of a StopLogging call. `name` is whatever the caller passed,
/// either the trail name or its ARN.
#[derive(Debug, Deserialize)]
pub struct StopLoggingParameters {
    pub name: String,
}
