use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// A block's required element is not in the markup; the block stays inert.
    MissingElement(String),
    Js(String),
    Config(String),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::MissingElement(what) => write!(f, "required element missing: {what}"),
            WebError::Js(msg) => write!(f, "browser call failed: {msg}"),
            WebError::Config(msg) => write!(f, "invalid site config: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        WebError::Config(err.to_string())
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
