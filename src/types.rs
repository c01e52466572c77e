use serde::Serialize;
use std::collections::HashMap;

/// The response mapping expected by the HTTP-proxy integration.
/// The platform consumes the serialized form, so the field names
/// must match its convention exactly (`statusCode`, not `status_code`).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: i32,
    /// JSON document serialized to text, per the proxy convention.
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl ResponseEnvelope {
    /// Wraps an already-serialized JSON body into a 200 envelope.
    pub fn json(body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_owned(), "application/json".to_owned());

        Self {
            status_code: 200,
            body,
            headers,
        }
    }
}
