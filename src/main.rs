mod models;
mod remediation;
mod trail;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{filter, EnvFilter};

use remediation::{remediate, Remediation};
use trail::TrailLogging;


#[tokio::main]
async fn main() -> Result<(), Error> {

    tracing_subscriber::fmt()
        .with_level(true)
        // CloudWatch stamps every line with the ingestion time already
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();


    let client = aws_sdk_cloudtrail::Client::new(&aws_config::load_from_env().await);

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| handle(&client, event))).await
}


async fn handle(trails: &dyn TrailLogging, event: LambdaEvent<Value>) -> Result<(), Error> {
    let (payload, context) = event.into_parts();

    match remediate(trails, payload).await {
        Ok(Remediation::TrailRestarted { trail }) => {
            tracing::info!(request_id = %context.request_id, trail = %trail, "Trail remediated");
            Ok(())
        }
        Ok(Remediation::Ignored) => Ok(()),
        Err(err) => {
            tracing::error!(request_id = %context.request_id, "Remediation failed: {}", err);
            Err(err.into())
        }
    }
}
