use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("No window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Document has no body")]
    MissingBody,

    #[error("Toggle element #{0} not found")]
    ToggleNotFound(String),

    #[error("Icon element matching '{0}' not found inside toggle")]
    IconNotFound(String),

    #[error("Theme toggle #{0} is already attached")]
    AlreadyAttached(String),

    #[error("Invalid theme config: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl ThemeError {
    pub fn dom(err: JsValue) -> Self {
        ThemeError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
