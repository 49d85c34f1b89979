use reqwest::{Client, Method};
use serde_json::Value;

use super::api::QueryValidationError;

const GENERIC_FAILURE: &str = "Request failed";

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Non-2xx response; the message is what the dashboard shows the user.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QueryValidationError),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Decode(_) | Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub json: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::with_method(Method::GET)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    pub fn post(body: Value) -> Self {
        Self {
            json: Some(body),
            ..Self::with_method(Method::POST)
        }
    }

    pub fn put(body: Value) -> Self {
        Self {
            json: Some(body),
            ..Self::with_method(Method::PUT)
        }
    }

    fn with_method(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            json: None,
        }
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// Sends one request and returns the decoded body.
///
/// Bodies that are not valid JSON come back as `Value::String` holding the
/// raw text. A non-success status becomes [`RequestError::Status`].
pub async fn fetch_json(
    client: &Client,
    url: &str,
    options: RequestOptions,
) -> Result<Value, RequestError> {
    tracing::debug!(method = %options.method, url, "sending request");

    let mut request = client.request(options.method.clone(), url);
    if !options.query.is_empty() {
        request = request.query(&options.query);
    }
    if let Some(body) = options.json.as_ref() {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    let body = serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.clone()));

    if !status.is_success() {
        let message = failure_message(&body, &text);
        tracing::warn!(status = status.as_u16(), url, %message, "request failed");
        return Err(RequestError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}

fn failure_message(body: &Value, raw: &str) -> String {
    if let Some(detail) = body.get("detail").filter(|detail| is_truthy(detail)) {
        return match detail {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
    }
    if raw.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        raw.to_string()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
