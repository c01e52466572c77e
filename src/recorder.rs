use lambda_runtime::Context;
use serde_json::Value;
use tracing::info;

/// Where the per-invocation correlation identifier comes from.
/// Selected by name in the config, e.g. `request-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationSource {
    /// The AWS request ID of the current invocation. The default.
    RequestId,
    /// The X-Ray trace ID, if the platform provided one.
    TraceId,
    /// No correlation identifier is attached to log records.
    Disabled,
}

impl CorrelationSource {
    /// Resolves an option name into a source.
    /// Returns None for names this version does not know about.
    pub fn from_option(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "request-id" => Some(Self::RequestId),
            "trace-id" => Some(Self::TraceId),
            "none" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Extracts the correlation identifier from the invocation context.
    /// An empty or missing value means there is nothing to correlate by.
    pub fn extract(&self, ctx: &Context) -> Option<String> {
        match self {
            Self::RequestId => Some(ctx.request_id.clone()).filter(|id| !id.is_empty()),
            Self::TraceId => ctx.xray_trace_id.clone().filter(|id| !id.is_empty()),
            Self::Disabled => None,
        }
    }
}

/// A diagnostic sink for raw invocation events.
/// Recording is best-effort and must never fail the invocation,
/// so implementations return nothing.
pub trait EventRecorder {
    fn record(&self, event: &Value, ctx: &Context);
}

/// Emits the raw event through `tracing`, tagged with the correlation
/// identifier when the configured source yields one.
pub struct TracingRecorder {
    correlation: CorrelationSource,
}

impl TracingRecorder {
    pub fn new(correlation: CorrelationSource) -> Self {
        Self { correlation }
    }
}

impl EventRecorder for TracingRecorder {
    fn record(&self, event: &Value, ctx: &Context) {
        match self.correlation.extract(ctx) {
            Some(correlation_id) => info!(%correlation_id, "Received event: {}", event),
            None => info!("Received event: {}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_ids(request_id: &str, trace_id: Option<&str>) -> Context {
        let mut ctx = Context::default();
        ctx.request_id = request_id.to_owned();
        ctx.xray_trace_id = trace_id.map(String::from);
        ctx
    }

    #[test]
    fn request_id_comes_back_verbatim() {
        let ctx = ctx_with_ids("8476a536-e9f4-11e8-9739-2dfe598c3fcd", None);

        assert_eq!(
            CorrelationSource::RequestId.extract(&ctx),
            Some("8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_owned())
        );
    }

    #[test]
    fn trace_id_comes_back_verbatim() {
        let ctx = ctx_with_ids("req-1", Some("Root=1-5759e988-bd862e3fe1be46a994272793"));

        assert_eq!(
            CorrelationSource::TraceId.extract(&ctx),
            Some("Root=1-5759e988-bd862e3fe1be46a994272793".to_owned())
        );
    }

    #[test]
    fn empty_identifiers_are_treated_as_absent() {
        let ctx = ctx_with_ids("", Some(""));

        assert_eq!(CorrelationSource::RequestId.extract(&ctx), None);
        assert_eq!(CorrelationSource::TraceId.extract(&ctx), None);
    }

    #[test]
    fn disabled_never_yields_an_identifier() {
        let ctx = ctx_with_ids("req-1", Some("Root=1-00-00"));

        assert_eq!(CorrelationSource::Disabled.extract(&ctx), None);
    }

    #[test]
    fn option_names_parse_case_insensitively() {
        assert_eq!(
            CorrelationSource::from_option("Request-Id"),
            Some(CorrelationSource::RequestId)
        );
        assert_eq!(
            CorrelationSource::from_option("TRACE-ID"),
            Some(CorrelationSource::TraceId)
        );
        assert_eq!(
            CorrelationSource::from_option("none"),
            Some(CorrelationSource::Disabled)
        );
        assert_eq!(CorrelationSource::from_option("x-ray"), None);
    }
}
