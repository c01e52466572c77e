use customer_profile::{Config, ProfileHandler, TracingRecorder};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    let handler = ProfileHandler::new(TracingRecorder::new(config.correlation));
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, ctx) = event.into_parts();
        handler.handle(&payload, &ctx).map_err(Error::from)
    }))
    .await
}

/// Initializes the tracing from the RUST_LOG env var if present
/// or defaults to INFO for everything.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // the CloudWatch console does not render color codes
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}
