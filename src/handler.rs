use crate::recorder::EventRecorder;
use crate::types::ResponseEnvelope;
use lambda_runtime::Context;
use serde_json::{Map, Value};
use thiserror::Error;

/// The profile fields copied from the event into the response body.
pub const PROFILE_FIELDS: &[&str] = &["name", "email"];

/// A required key was not present in the event.
/// There is no structured 4xx path: the error propagates through the
/// runtime and surfaces as a platform-level invocation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing required field `{field}` in the event")]
pub struct MissingFieldError {
    pub field: &'static str,
}

/// Maps one invocation event onto the response envelope.
/// Stateless apart from the injected recorder; every call builds a
/// fresh envelope.
pub struct ProfileHandler<R> {
    recorder: R,
    fields: &'static [&'static str],
}

impl<R: EventRecorder> ProfileHandler<R> {
    /// A handler echoing the standard profile fields.
    pub fn new(recorder: R) -> Self {
        Self::with_fields(recorder, PROFILE_FIELDS)
    }

    /// A handler echoing a custom set of fields.
    /// An empty list turns the function into a pure health-check style
    /// responder with a `{}` body.
    pub fn with_fields(recorder: R, fields: &'static [&'static str]) -> Self {
        Self { recorder, fields }
    }

    /// Copies the configured fields verbatim from the event into a 200
    /// JSON envelope. Values are not validated or transformed, only
    /// checked for presence.
    pub fn handle(&self, event: &Value, ctx: &Context) -> Result<ResponseEnvelope, MissingFieldError> {
        // diagnostic only - the response does not depend on it
        self.recorder.record(event, ctx);

        let mut profile = Map::with_capacity(self.fields.len());
        for &field in self.fields {
            let value = event.get(field).ok_or(MissingFieldError { field })?;
            profile.insert(field.to_owned(), value.clone());
        }

        let body = serde_json::to_string(&Value::Object(profile))
            .expect("Failed to serialize the profile body. It's a bug.");

        Ok(ResponseEnvelope::json(body))
    }
}
