use thiserror::Error;

/// Failures raised while preparing, sending or checking a request.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Authentication setup failed with status {status}: {body}")]
    AuthenticationSetup { status: u16, body: String },
    #[error("Expected status {expected} but got {actual}: {body}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: String,
    },
    #[error("Assertion failed: {0}")]
    Assertion(String),
    #[error("Response took {elapsed_ms} ms, limit is {limit_ms} ms")]
    SlowResponse { elapsed_ms: u128, limit_ms: u128 },
    #[error("Schema validation failed: {0}")]
    Schema(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("SOAP payload error: {0}")]
    Xml(String),
}

impl HarnessError {
    /// Shorthand for an assertion failure with a formatted message.
    pub fn assertion(message: impl Into<String>) -> Self {
        HarnessError::Assertion(message.into())
    }
}
