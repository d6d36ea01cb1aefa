//! Error type for everything that talks to the activities API.

use std::fmt;

use wasm_bindgen::{JsCast, JsValue};

/// Failure of a single request against the activities API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No `window` object, i.e. not running in a browser page
    NoWindow,
    /// The request could not be built or the network call itself failed
    Transport(String),
    /// The server answered with a non-success status
    Status { status: u16, detail: Option<String> },
    /// The response body was not what we expected
    Decode(String),
}

impl ApiError {
    /// Wrap a rejected JS promise or thrown JS value.
    pub fn transport(value: JsValue) -> Self {
        ApiError::Transport(describe_js(&value))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NoWindow => write!(f, "no browser window available"),
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status { status, detail: Some(detail) } => {
                write!(f, "server returned {}: {}", status, detail)
            }
            ApiError::Status { status, detail: None } => write!(f, "server returned {}", status),
            ApiError::Decode(msg) => write!(f, "unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

// JS errors carry their text in `message`; anything else falls back to its debug form
fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
