use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("element #{id} not found in document")]
    ElementNotFound { id: String },
    #[error("no window or document available")]
    NoDocument,
    #[error("element #{id} is not an HTML element")]
    NotHtmlElement { id: String },
    #[error("failed to register click listener: {0}")]
    Listener(String),
    #[error("invalid runtime configuration: {0}")]
    InvalidConfig(String),
}

impl ToggleError {
    pub fn not_found(id: impl Into<String>) -> Self {
        ToggleError::ElementNotFound { id: id.into() }
    }
}

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort text for a value thrown by a browser API.
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
