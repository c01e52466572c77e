//! A minimal AWS Lambda function that echoes the customer profile
//! fields of the incoming event as an HTTP-proxy JSON response.
//!
//! The library holds the whole behavioral contract so it can be tested
//! without a Lambda environment; the binary only wires it into
//! `lambda_runtime`.

pub mod config;
pub mod handler;
pub mod recorder;
pub mod types;

pub use config::Config;
pub use handler::{MissingFieldError, ProfileHandler};
pub use recorder::{CorrelationSource, EventRecorder, TracingRecorder};
pub use types::ResponseEnvelope;
