use crate::recorder::CorrelationSource;
use std::env::var;
use tracing::warn;

/// Name of the correlation source option, e.g. `request-id` or `none`.
const CORRELATION_SOURCE_ENV: &str = "LAMBDA_CORRELATION_SOURCE";

/// Runtime settings for the diagnostic side of the function.
/// The request/response contract itself takes no configuration.
pub struct Config {
    pub correlation: CorrelationSource,
}

impl Config {
    /// Creates a new Config instance from environment variables and defaults.
    /// Falls back to the request ID with a warning if the configured
    /// source name is not recognized.
    pub fn from_env() -> Self {
        let correlation = match var(CORRELATION_SOURCE_ENV) {
            Ok(name) => match CorrelationSource::from_option(&name) {
                Some(source) => source,
                None => {
                    warn!(
                        "Unknown correlation source `{}` in {}. Using request-id.",
                        name, CORRELATION_SOURCE_ENV
                    );
                    CorrelationSource::RequestId
                }
            },
            Err(_) => CorrelationSource::RequestId,
        };

        Self { correlation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a single test to keep the env var mutations sequential
    #[test]
    fn correlation_source_comes_from_the_environment() {
        std::env::remove_var(CORRELATION_SOURCE_ENV);
        assert_eq!(Config::from_env().correlation, CorrelationSource::RequestId);

        std::env::set_var(CORRELATION_SOURCE_ENV, "trace-id");
        assert_eq!(Config::from_env().correlation, CorrelationSource::TraceId);

        std::env::set_var(CORRELATION_SOURCE_ENV, "carrier-pigeon");
        assert_eq!(Config::from_env().correlation, CorrelationSource::RequestId);

        std::env::remove_var(CORRELATION_SOURCE_ENV);
    }
}
