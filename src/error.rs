//! Error type shared by the DOM host and the JavaScript bindings.
//!
//! The countdown core never fails; errors only come from parsing options
//! handed over from JavaScript and from DOM calls that reject.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The options object could not be turned into `CountdownOptions`.
    Options(String),
    /// A callback option was present but is not a function.
    NotAFunction(&'static str),
    /// A DOM call failed; carries the stringified JS error.
    Dom(String),
    /// No `window`/`document` is available (e.g. inside a worker).
    NoDocument,
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::Options(msg) => write!(f, "Invalid countdown options: {}", msg),
            WidgetError::NotAFunction(name) => write!(f, "Option `{}` must be a function", name),
            WidgetError::Dom(msg) => write!(f, "DOM operation failed: {}", msg),
            WidgetError::NoDocument => write!(f, "No document available"),
        }
    }
}

impl std::error::Error for WidgetError {}

impl WidgetError {
    /// Wrap a rejected DOM call.
    pub fn dom(err: JsValue) -> Self {
        let msg = err
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&err).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| format!("{:?}", err));
        WidgetError::Dom(msg)
    }
}

impl From<serde_wasm_bindgen::Error> for WidgetError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WidgetError::Options(err.to_string())
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            WidgetError::NotAFunction("onEnd").to_string(),
            "Option `onEnd` must be a function"
        );
        assert_eq!(
            WidgetError::Options("seconds: expected u32".into()).to_string(),
            "Invalid countdown options: seconds: expected u32"
        );
        assert_eq!(WidgetError::NoDocument.to_string(), "No document available");
    }
}
